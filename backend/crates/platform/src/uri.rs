//! URI helpers
//!
//! Percent-encoding with the same output as the browser expression
//! `encodeURI(s).replace(/[!'()*]/g, encodeURIComponent)`, plus small
//! path/query utilities used when building editor URLs.

use std::collections::HashMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is: `encodeURI`'s reserved and unreserved marks, minus `! ' ( ) *`.
const URI_WITH_SPECIALS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Percent-encode a URI, including the characters `encodeURI` leaves alone
/// (`!`, `'`, `(`, `)`, `*`).
///
/// `%` is always encoded, so an already encoded input is encoded twice.
pub fn encode_uri_with_specials(input: &str) -> String {
    utf8_percent_encode(input, URI_WITH_SPECIALS).to_string()
}

/// Last path segment of `path` (the whole input when it has no `/`)
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of the last path segment, without the dot
pub fn file_extension(path: &str) -> Option<&str> {
    let (_, ext) = file_name(path).rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// Split a raw query string into key/value pairs without decoding them.
///
/// Pairs without `=` or with an empty value are dropped. Only the first `=`
/// separates key and value, so base64 padding in values survives.
pub fn raw_query_pairs(query: &str) -> HashMap<&str, &str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .collect()
}
