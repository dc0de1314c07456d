//! Page title forms: display (`Foo bar`) and underscored/path (`Foo_bar`).

use super::charset::TITLE_PATH;
use crate::error::LinkError;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// Percent-encodes a decoded title so it occupies exactly one path segment.
///
/// `/` becomes `%2F`; path-safe characters (including `_` and `:`) are kept as
/// given, so callers choose between display and underscored form themselves.
///
/// # Examples
///
/// - `"G/O_Media"` → `"G%2FO_Media"`
/// - `"Talk:Foo"` → `"Talk:Foo"`
pub fn percent_encode_title_for_path(title: &str) -> Result<String, LinkError> {
    if title.is_empty() {
        return Err(LinkError::InvalidTitle(title.to_string()));
    }
    Ok(utf8_percent_encode(title, TITLE_PATH).to_string())
}

/// Decodes one percent-encoded path component. `None` if the bytes are not UTF-8.
pub fn decode_component(encoded: &str) -> Option<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

pub fn to_display(title: &str) -> String {
    title.replace('_', " ")
}

pub fn to_underscored(title: &str) -> String {
    title.replace(' ', "_")
}
