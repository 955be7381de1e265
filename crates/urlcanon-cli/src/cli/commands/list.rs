//! `urlcanon list <url>` – print matched tracking keys.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

pub fn run_list(canon: &Canonicalizer, url: &str) -> Result<()> {
    for key in canon.list_tracking_parameters(url) {
        println!("{key}");
    }
    Ok(())
}
