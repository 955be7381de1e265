//! Line input from a file or stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Reads non-blank lines (trimmed) from `path`, or from stdin when `None`.
pub fn read_urls(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        None => {
            let mut lines = Vec::new();
            for line in io::stdin().lock().lines() {
                lines.push(line.context("failed to read stdin")?);
            }
            lines.join("\n")
        }
    };
    Ok(non_blank_lines(&text))
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect()
}
