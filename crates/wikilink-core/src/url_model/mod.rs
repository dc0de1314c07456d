//! URL modeling: parsing, scheme replacement, host labels and title encoding.

pub mod charset;
mod host;
mod title;

pub use host::{desktop_host, language_from_host, mobile_host};
pub use title::{decode_component, percent_encode_title_for_path, to_display, to_underscored};

use crate::error::LinkError;
use url::{Position, Url};

/// Parses an absolute URL.
pub fn parse_url(input: &str) -> Result<Url, LinkError> {
    Url::parse(input).map_err(|e| LinkError::malformed(input, e))
}

/// Returns `url` with its scheme replaced by `new_scheme`.
///
/// Unlike [`Url::set_scheme`] this also works between special and
/// non-special schemes (`https` → `wikipedia`). The only check is that the
/// result parses.
///
/// # Examples
///
/// - `https://en.wikipedia.org/wiki/Foo` + `wikipedia` → `wikipedia://en.wikipedia.org/wiki/Foo`
pub fn replace_scheme(url: &Url, new_scheme: &str) -> Result<Url, LinkError> {
    let rebuilt = format!("{}{}", new_scheme, &url[Position::AfterScheme..]);
    Url::parse(&rebuilt).map_err(|e| LinkError::malformed(rebuilt, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_scheme_keeps_other_components() {
        let url = parse_url("https://en.wikipedia.org/wiki/G%2FO_Media?a=b#History").unwrap();
        let replaced = replace_scheme(&url, "wikipedia").unwrap();
        assert_eq!(
            replaced.as_str(),
            "wikipedia://en.wikipedia.org/wiki/G%2FO_Media?a=b#History"
        );
        assert_eq!(replaced.host_str(), Some("en.wikipedia.org"));

        let back = replace_scheme(&replaced, "http").unwrap();
        assert_eq!(back.as_str(), "http://en.wikipedia.org/wiki/G%2FO_Media?a=b#History");
    }

    #[test]
    fn replace_scheme_rejects_unparseable_result() {
        let url = parse_url("https://en.wikipedia.org/wiki/Foo").unwrap();
        assert!(matches!(
            replace_scheme(&url, "1bad scheme"),
            Err(LinkError::MalformedUrl { .. })
        ));
    }

    #[test]
    fn parse_url_rejects_relative_input() {
        assert!(matches!(
            parse_url("/wiki/Foo"),
            Err(LinkError::MalformedUrl { .. })
        ));
    }
}
