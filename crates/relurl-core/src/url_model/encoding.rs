//! Percent codec for search keys and values.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is when encoding a search component (same set as
/// `encodeURIComponent`: unreserved chars plus `!`, `'`, `(`, `)`, `*`).
const SEARCH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a search key or value.
pub(super) fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, SEARCH_COMPONENT).to_string()
}

/// Decodes a search key or value: `+` becomes a space, then `%XX` escapes are
/// decoded. Invalid escapes are kept literally and invalid UTF-8 is replaced.
pub(super) fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
