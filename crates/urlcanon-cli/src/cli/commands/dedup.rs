//! `urlcanon dedup [FILE]` – collapse URLs that differ only by tracking noise.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use urlcanon_core::Canonicalizer;

use super::input::read_urls;

pub fn run_dedup(canon: &Canonicalizer, path: Option<&Path>, json: bool) -> Result<()> {
    let urls = read_urls(path)?;
    dedup_to(
        canon,
        &urls,
        json,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn dedup_to(
    canon: &Canonicalizer,
    urls: &[String],
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let report = canon.dedupe(urls);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for entry in &report.unique {
        writeln!(out, "{}", entry.canonical)?;
    }
    for e in &report.invalid {
        writeln!(err, "skipped: {e}")?;
    }
    writeln!(
        err,
        "{} unique, {} duplicate(s), {} invalid",
        report.unique.len(),
        report.duplicates.len(),
        report.invalid.len()
    )?;
    Ok(())
}
