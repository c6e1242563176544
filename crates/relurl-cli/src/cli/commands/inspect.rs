//! `relurl inspect <url>`: print every URL component.

use anyhow::Result;
use relurl_core::config::{OutputFormat, RelurlConfig};
use relurl_core::UrlProperties;

use super::{parse_url, search_lines, to_json};

pub fn run_inspect(url: &str, cfg: &RelurlConfig) -> Result<()> {
    let props = parse_url(url)?.properties();
    println!("{}", render_properties(&props, cfg)?);
    Ok(())
}

pub(super) fn render_properties(props: &UrlProperties, cfg: &RelurlConfig) -> Result<String> {
    match cfg.output {
        OutputFormat::Json => to_json(props, cfg),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("protocol: {}", props.protocol),
                format!("username: {}", props.username),
                format!("password: {}", props.password),
                format!("host: {}", props.host),
                format!("hostname: {}", props.hostname),
                format!("port: {}", props.port),
                format!("pathname: {}", props.pathname),
                format!("search: {}", props.search),
                "searchData:".to_string(),
            ];
            lines.extend(search_lines(&props.search_data, "  "));
            lines.push(format!("hash: {}", props.hash));
            lines.push(format!("href: {}", props.href));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relurl_core::RelativeUrl;

    #[test]
    fn text_output_lists_components() {
        let props = RelativeUrl::parse("https://example.com:8443/a?x=1&x=2#top")
            .unwrap()
            .properties();
        let cfg = RelurlConfig {
            output: OutputFormat::Text,
            ..RelurlConfig::default()
        };
        let text = render_properties(&props, &cfg).unwrap();
        assert!(text.contains("host: example.com:8443\n"));
        assert!(text.contains("searchData:\n  x = 1\n  x = 2\nhash: #top"));
        assert!(text.ends_with("href: https://example.com:8443/a?x=1&x=2#top"));
    }

    #[test]
    fn json_output_is_camel_case() {
        let props = RelativeUrl::parse("/a?x=1").unwrap().properties();
        let json = render_properties(&props, &RelurlConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["searchData"]["x"], "1");
        assert_eq!(value["pathname"], "/a");
    }
}
