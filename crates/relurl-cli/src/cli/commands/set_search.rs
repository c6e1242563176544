//! `relurl set-search <url> [key=value ...]`: replace the search string.

use anyhow::Result;

use super::{parse_pairs, parse_url};

pub fn run_set_search(url: &str, pairs: &[String]) -> Result<()> {
    println!("{}", set_search(url, pairs)?);
    Ok(())
}

fn set_search(url: &str, pairs: &[String]) -> Result<String> {
    let mut url = parse_url(url)?;
    url.set_search_data(parse_pairs(pairs));
    tracing::debug!("search replaced: {}", url.search());
    Ok(url.href())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replaces_and_keeps_hash() {
        let out = set_search(
            "/this/is/a/test?a=1&a=2&b=true&c=a&d=&d=#hash",
            &args(&["x=1", "y=2"]),
        )
        .unwrap();
        assert_eq!(out, "/this/is/a/test?x=1&y=2#hash");
    }

    #[test]
    fn no_pairs_clears_search() {
        let out = set_search("https://example.com/p?a=1#h", &[]).unwrap();
        assert_eq!(out, "https://example.com/p#h");
    }

    #[test]
    fn repeated_keys_and_encoding() {
        let out = set_search("/p", &args(&["t=a b", "t=c"])).unwrap();
        assert_eq!(out, "/p?t=a%20b&t=c");
    }
}
