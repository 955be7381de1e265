//! Tests for clean, check and list subcommands.

use super::parse;
use clap::Parser;
use crate::cli::CliCommand;

#[test]
fn cli_parse_clean_many() {
    let cli = parse(&[
        "urlcanon",
        "clean",
        "https://a.example/?utm_source=x",
        "https://b.example/",
    ]);
    assert!(!cli.no_config);
    match cli.command {
        CliCommand::Clean { urls } => {
            assert_eq!(urls, vec!["https://a.example/?utm_source=x", "https://b.example/"]);
        }
        _ => panic!("expected Clean"),
    }
}

#[test]
fn cli_parse_clean_stdin() {
    match parse(&["urlcanon", "clean"]).command {
        CliCommand::Clean { urls } => assert!(urls.is_empty()),
        _ => panic!("expected Clean"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["urlcanon", "check", "https://example.com/?fbclid=1"]).command {
        CliCommand::Check { url } => assert_eq!(url, "https://example.com/?fbclid=1"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_list() {
    match parse(&["urlcanon", "list", "https://example.com/?ref=a"]).command {
        CliCommand::List { url } => assert_eq!(url, "https://example.com/?ref=a"),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_check_requires_url() {
    assert!(crate::cli::Cli::try_parse_from(["urlcanon", "check"]).is_err());
}
