//! `relurl full-path <url>`: print pathname + search + hash.

use anyhow::Result;

use super::parse_url;

pub fn run_full_path(url: &str) -> Result<()> {
    println!("{}", parse_url(url)?.full_path());
    Ok(())
}
