//! Splitting input strings into URL parts.
//!
//! Absolute input (`scheme://...`) goes through `url::Url`; everything else
//! is treated as a path-relative reference and split by hand.

use super::{RelativeUrl, UrlError};

/// True when `input` starts with `scheme://`, where the scheme is
/// `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`.
pub(super) fn looks_absolute(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    first_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && rest.starts_with("//")
}

pub(super) fn parse_absolute(input: &str) -> Result<RelativeUrl, UrlError> {
    let parsed = url::Url::parse(input).map_err(|source| UrlError::Parse {
        input: input.to_string(),
        source,
    })?;
    Ok(from_platform_url(&parsed))
}

pub(super) fn from_platform_url(url: &url::Url) -> RelativeUrl {
    let non_empty_prefixed = |prefix: char, part: Option<&str>| match part {
        Some(p) if !p.is_empty() => format!("{prefix}{p}"),
        _ => String::new(),
    };

    RelativeUrl {
        protocol: format!("{}:", url.scheme()),
        username: url.username().to_string(),
        password: url.password().unwrap_or_default().to_string(),
        hostname: url.host_str().unwrap_or_default().to_string(),
        port: url.port().map(|p| p.to_string()).unwrap_or_default(),
        pathname: url.path().to_string(),
        search: non_empty_prefixed('?', url.query()),
        hash: non_empty_prefixed('#', url.fragment()),
    }
}

/// Splits a relative reference on the first `#`, then the first `?`.
/// Never fails; unrecognised prefixes stay in `pathname`.
pub(super) fn parse_relative(input: &str) -> RelativeUrl {
    let (rest, hash) = match input.find('#') {
        Some(i) => input.split_at(i),
        None => (input, ""),
    };
    let (pathname, search) = match rest.find('?') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    if let Some((prefix, _)) = pathname.split_once(':') {
        if !prefix.contains('/') {
            tracing::debug!("no authority in {input:?}; keeping {prefix:?}: as part of the path");
        }
    }

    RelativeUrl {
        pathname: pathname.to_string(),
        search: search.to_string(),
        hash: hash.to_string(),
        ..RelativeUrl::default()
    }
}
