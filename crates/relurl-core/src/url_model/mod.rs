//! URL modeling for absolute and path-relative URLs.
//!
//! [`RelativeUrl`] keeps every component as a string, derives `host` and
//! `href` on demand, and exposes the query string as ordered
//! [`SearchData`] where repeated keys fold into sequences.

mod encoding;
mod error;
mod parse;
mod search;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use error::UrlError;
pub use search::{SearchData, SearchValue};

/// A parsed URL, absolute (`http://user:pw@host:port/path?q#h`) or relative
/// (`/path?q#h`).
///
/// Relative URLs have empty `protocol`, credentials, `hostname` and `port`.
/// `href` always equals `protocol + "//" + credentials + host + full_path()`,
/// reduced to `full_path()` when there is neither protocol nor host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeUrl {
    protocol: String,
    username: String,
    password: String,
    hostname: String,
    port: String,
    pathname: String,
    search: String,
    hash: String,
}

/// Read-only snapshot of every URL component, as returned by
/// [`RelativeUrl::properties`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlProperties {
    pub protocol: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub search: String,
    pub search_data: SearchData,
    pub hash: String,
    pub href: String,
}

impl RelativeUrl {
    /// Parses an absolute or relative URL.
    ///
    /// Only absolute input can fail, when the underlying URL parser rejects it.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        if parse::looks_absolute(input) {
            parse::parse_absolute(input)
        } else {
            Ok(parse::parse_relative(input))
        }
    }

    /// Builds a URL from an already decomposed record. `host`, `search_data`
    /// and `href` are derived fields and are ignored.
    pub fn from_properties(props: &UrlProperties) -> Result<Self, UrlError> {
        let mut url = Self::default();
        url.set_protocol(&props.protocol);
        url.set_username(&props.username);
        url.set_password(&props.password);
        url.set_hostname(&props.hostname);
        url.set_port(&props.port)?;
        url.set_pathname(&props.pathname);
        url.set_search(&props.search);
        url.set_hash(&props.hash);
        Ok(url)
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// `hostname[:port]`.
    pub fn host(&self) -> String {
        if self.port.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// True when the URL carries a scheme or an authority.
    pub fn is_absolute(&self) -> bool {
        !self.protocol.is_empty() || !self.hostname.is_empty()
    }

    /// `pathname + search + hash`, for absolute and relative URLs alike.
    pub fn full_path(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    pub fn href(&self) -> String {
        if !self.is_absolute() {
            return self.full_path();
        }
        let mut out = String::with_capacity(
            self.protocol.len() + self.hostname.len() + self.port.len() + 8,
        );
        out.push_str(&self.protocol);
        out.push_str("//");
        if !self.username.is_empty() || !self.password.is_empty() {
            out.push_str(&self.username);
            if !self.password.is_empty() {
                out.push(':');
                out.push_str(&self.password);
            }
            out.push('@');
        }
        out.push_str(&self.host());
        out.push_str(&self.full_path());
        out
    }

    pub fn properties(&self) -> UrlProperties {
        UrlProperties {
            protocol: self.protocol.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            host: self.host(),
            hostname: self.hostname.clone(),
            port: self.port.clone(),
            pathname: self.pathname.clone(),
            search: self.search.clone(),
            search_data: self.search_data(),
            hash: self.hash.clone(),
            href: self.href(),
        }
    }

    pub fn search_data(&self) -> SearchData {
        SearchData::parse(&self.search)
    }

    /// Replaces the whole search string with `data`, serialised in the order
    /// given. `pathname` and `hash` are untouched.
    pub fn set_search_data<I, K, V>(&mut self, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SearchValue>,
    {
        self.search = data.into_iter().collect::<SearchData>().to_search();
    }

    /// Merges `data` into the current search: existing keys are replaced in
    /// place, new keys are appended.
    pub fn update_search_data<I, K, V>(&mut self, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SearchValue>,
    {
        let mut current = self.search_data();
        current.extend_from(data.into_iter().collect());
        self.search = current.to_search();
    }

    /// Sets the scheme; the trailing `:` is added when missing.
    pub fn set_protocol(&mut self, protocol: &str) {
        let scheme = protocol.trim().trim_end_matches(':');
        self.protocol = if scheme.is_empty() {
            String::new()
        } else {
            format!("{scheme}:")
        };
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = username.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    /// Sets `hostname[:port]`. Bracketed IPv6 hosts are kept whole.
    pub fn set_host(&mut self, host: &str) -> Result<(), UrlError> {
        match host.rsplit_once(':') {
            Some((name, port)) if !name.ends_with(':') && !port.contains(']') => {
                self.set_port(port)?;
                self.hostname = name.to_string();
            }
            _ => {
                self.hostname = host.to_string();
                self.port.clear();
            }
        }
        Ok(())
    }

    pub fn set_hostname(&mut self, hostname: &str) {
        self.hostname = hostname.to_string();
    }

    /// Sets the port; an empty string clears it.
    pub fn set_port(&mut self, port: &str) -> Result<(), UrlError> {
        let port = port.trim();
        if port.is_empty() {
            self.port.clear();
            return Ok(());
        }
        let number: u16 = port
            .parse()
            .map_err(|_| UrlError::InvalidPort(port.to_string()))?;
        self.port = number.to_string();
        Ok(())
    }

    /// Sets the path; a leading `/` is added to non-empty paths lacking one.
    pub fn set_pathname(&mut self, pathname: &str) {
        self.pathname = if pathname.is_empty() || pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };
    }

    /// Sets the raw search string, with or without `?`. `""` and `"?"` clear it.
    pub fn set_search(&mut self, search: &str) {
        self.search = prefixed('?', search);
    }

    /// Sets the fragment, with or without `#`. `""` and `"#"` clear it.
    pub fn set_hash(&mut self, hash: &str) {
        self.hash = prefixed('#', hash);
    }
}

fn prefixed(prefix: char, value: &str) -> String {
    let bare = value.strip_prefix(prefix).unwrap_or(value);
    if bare.is_empty() {
        String::new()
    } else {
        format!("{prefix}{bare}")
    }
}

impl FromStr for RelativeUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<url::Url> for RelativeUrl {
    fn from(url: url::Url) -> Self {
        parse::from_platform_url(&url)
    }
}

impl From<&url::Url> for RelativeUrl {
    fn from(url: &url::Url) -> Self {
        parse::from_platform_url(url)
    }
}

impl fmt::Display for RelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
