//! `urlcanon clean [URL...]` – print canonical URLs.

use anyhow::{bail, Result};
use std::io::{self, Write};
use urlcanon_core::Canonicalizer;

use super::input::read_urls;

/// Prints one canonical URL per input; invalid inputs go to stderr and fail
/// the command after all inputs were processed.
pub fn run_clean(canon: &Canonicalizer, urls: &[String]) -> Result<()> {
    let urls = if urls.is_empty() {
        read_urls(None)?
    } else {
        urls.to_vec()
    };
    clean_to(canon, &urls, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn clean_to(
    canon: &Canonicalizer,
    urls: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut invalid = 0usize;
    for url in urls {
        match canon.canonicalize(url) {
            Ok(clean) => writeln!(out, "{clean}")?,
            Err(e) => {
                writeln!(err, "{e}")?;
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} input(s) were not valid URLs", urls.len());
    }
    Ok(())
}
