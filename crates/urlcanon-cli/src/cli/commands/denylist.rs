//! `urlcanon denylist` – print the effective denylist.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

pub fn run_denylist(canon: &Canonicalizer) -> Result<()> {
    for name in canon.denylist().iter() {
        println!("{name}");
    }
    Ok(())
}
