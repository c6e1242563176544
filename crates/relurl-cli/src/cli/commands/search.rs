//! `relurl search <url>`: print decoded search data.

use anyhow::Result;
use relurl_core::config::{OutputFormat, RelurlConfig};

use super::{parse_url, search_lines, to_json};

pub fn run_search(url: &str, cfg: &RelurlConfig) -> Result<()> {
    let data = parse_url(url)?.search_data();
    let out = match cfg.output {
        OutputFormat::Json => to_json(&data, cfg)?,
        OutputFormat::Text => search_lines(&data, "").join("\n"),
    };
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
