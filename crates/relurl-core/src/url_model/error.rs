//! Error type for URL construction and part setters.

/// Failure raised while building or mutating a [`RelativeUrl`](super::RelativeUrl).
///
/// Relative and query-string parsing never fail; only the strict parser used
/// for absolute URLs and the port setter can.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    /// The input looked absolute (`scheme://...`) but the URL parser rejected it.
    #[error("invalid absolute URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Port was not a decimal number in `0..=65535`.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}
