//! `relurl update-search <url> [key=value ...]`: merge into the search string.

use anyhow::Result;

use super::{parse_pairs, parse_url};

pub fn run_update_search(url: &str, pairs: &[String]) -> Result<()> {
    println!("{}", update_search(url, pairs)?);
    Ok(())
}

fn update_search(url: &str, pairs: &[String]) -> Result<String> {
    let mut url = parse_url(url)?;
    url.update_search_data(parse_pairs(pairs));
    tracing::debug!("search updated: {}", url.search());
    Ok(url.href())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_keys() {
        let pairs = vec!["page=2".to_string(), "q=rust".to_string()];
        let out = update_search("https://example.com/list?page=1&sort=asc#r", &pairs).unwrap();
        assert_eq!(out, "https://example.com/list?page=2&sort=asc&q=rust#r");
    }
}
