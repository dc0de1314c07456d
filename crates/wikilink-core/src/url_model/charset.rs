//! Percent-encoding sets.
//!
//! Each constant lists the bytes that get *encoded*; everything else passes
//! through unchanged. Non-ASCII input is always encoded as UTF-8 escapes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// A page title placed as a single path segment.
///
/// Leaves the RFC 3986 `pchar` punctuation (`-._~!$&'()*+,;=:@`) alone and
/// encodes everything else, including `/`, `?`, `#` and `%`.
pub const TITLE_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// A relative href (`./Foo`, `/wiki/Foo#Section`) from page HTML.
///
/// Same as [`TITLE_PATH`] but keeps the structural characters `/`, `?` and
/// `#`, and keeps `%` so existing escapes are not encoded twice.
pub const RELATIVE_PATH_AND_FRAGMENT: &AsciiSet = &TITLE_PATH
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'%');
