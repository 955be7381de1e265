//! `urlcanon check <url>` – report whether tracking parameters are present.

use anyhow::Result;
use std::io::{self, Write};
use urlcanon_core::Canonicalizer;

/// Prints `tracking` or `clean`; an unparseable URL is an error, not `clean`.
pub fn run_check(canon: &Canonicalizer, url: &str) -> Result<()> {
    check_to(canon, url, &mut io::stdout().lock())
}

fn check_to(canon: &Canonicalizer, url: &str, out: &mut impl Write) -> Result<()> {
    canon.canonicalize(url)?;
    if canon.has_tracking_parameters(url) {
        writeln!(out, "tracking")?;
    } else {
        writeln!(out, "clean")?;
    }
    Ok(())
}
