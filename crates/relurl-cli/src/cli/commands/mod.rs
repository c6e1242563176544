//! CLI command handlers, one per file, plus the helpers they share.

mod full_path;
mod inspect;
mod search;
mod set_search;
mod update_search;

pub use full_path::run_full_path;
pub use inspect::run_inspect;
pub use search::run_search;
pub use set_search::run_set_search;
pub use update_search::run_update_search;

use anyhow::{Context, Result};
use relurl_core::config::RelurlConfig;
use relurl_core::{RelativeUrl, SearchData};
use serde::Serialize;

fn parse_url(input: &str) -> Result<RelativeUrl> {
    RelativeUrl::parse(input).with_context(|| format!("parse URL argument {input:?}"))
}

/// Collects `key=value` arguments; repeated keys fold into lists and a bare
/// `key` gets an empty value.
fn parse_pairs(pairs: &[String]) -> SearchData {
    let mut data = SearchData::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').unwrap_or((pair.as_str(), ""));
        data.append(key, value);
    }
    data
}

fn to_json<T: Serialize>(value: &T, cfg: &RelurlConfig) -> Result<String> {
    let json = if cfg.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// `key = value` lines, one per value.
fn search_lines(data: &SearchData, indent: &str) -> Vec<String> {
    data.iter()
        .flat_map(|(key, value)| {
            value
                .values()
                .iter()
                .map(move |v| format!("{indent}{key} = {v}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relurl_core::SearchValue;

    #[test]
    fn parse_pairs_folds_and_defaults() {
        let args: Vec<String> = ["a=1", "flag", "a=2", "b=x=y"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let data = parse_pairs(&args);
        assert_eq!(
            data.get("a"),
            Some(&SearchValue::Many(vec!["1".into(), "2".into()]))
        );
        assert_eq!(data.get("flag"), Some(&SearchValue::from("")));
        assert_eq!(data.get("b"), Some(&SearchValue::from("x=y")));
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["a", "flag", "b"]);
    }

    #[test]
    fn search_lines_expand_lists() {
        let data = SearchData::parse("?a=1&a=2&b=");
        assert_eq!(search_lines(&data, "  "), vec!["  a = 1", "  a = 2", "  b = "]);
    }

    #[test]
    fn to_json_respects_pretty() {
        let data = SearchData::parse("?a=1");
        let compact = RelurlConfig {
            pretty: false,
            ..RelurlConfig::default()
        };
        assert_eq!(to_json(&data, &compact).unwrap(), r#"{"a":"1"}"#);
        assert!(to_json(&data, &RelurlConfig::default()).unwrap().contains('\n'));
    }

    #[test]
    fn parse_url_error_has_context() {
        let err = parse_url("http://exa mple.com").unwrap_err();
        assert!(format!("{err:#}").contains("parse URL argument"));
    }
}
