//! Resolving hrefs found in page HTML against the page URL.

use super::LinkNormalizer;
use crate::error::LinkError;
use crate::url_model::charset::RELATIVE_PATH_AND_FRAGMENT;
use percent_encoding::utf8_percent_encode;
use std::borrow::Cow;
use url::Url;

impl LinkNormalizer {
    /// Resolves `href` (`./Foo`, `/wiki/Foo#Bar`, or absolute) against `base`.
    ///
    /// Relative hrefs are percent-encoded with
    /// [`RELATIVE_PATH_AND_FRAGMENT`]; absolute hrefs are used verbatim and
    /// ignore `base`. Resolution happens against the canonicalized base so a
    /// base title containing `/` counts as a single segment. Non-wiki bases
    /// are used as they are.
    pub fn resolve_relative_href(&self, base: &Url, href: &str) -> Result<Url, LinkError> {
        let candidate: Cow<'_, str> = if href.starts_with('.') || href.starts_with('/') {
            utf8_percent_encode(href, RELATIVE_PATH_AND_FRAGMENT).into()
        } else {
            Cow::Borrowed(href)
        };

        let encoded_base = self.encoded_wiki_url(base).unwrap_or_else(|| {
            tracing::debug!(base = %base, "resolving href against non-wiki base as-is");
            base.clone()
        });

        encoded_base
            .join(&candidate)
            .map_err(|source| LinkError::UnresolvableHref {
                href: href.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn encoded_slash_in_base_is_one_segment() {
        let n = LinkNormalizer::default();
        let resolved = n
            .resolve_relative_href(&url("https://en.wikipedia.org/wiki/G%2FO_Media"), "./Foo")
            .unwrap();
        assert_eq!(resolved.as_str(), "https://en.wikipedia.org/wiki/Foo");
    }

    #[test]
    fn raw_slash_in_base_title_is_encoded_first() {
        let n = LinkNormalizer::default();
        let resolved = n
            .resolve_relative_href(&url("https://en.wikipedia.org/wiki/G/O_Media"), "./Foo")
            .unwrap();
        assert_eq!(resolved.as_str(), "https://en.wikipedia.org/wiki/Foo");
    }

    #[test]
    fn relative_href_is_percent_encoded() {
        let n = LinkNormalizer::default();
        let base = url("https://en.wikipedia.org/wiki/Coffee");
        let resolved = n.resolve_relative_href(&base, "./Café au lait#History").unwrap();
        assert_eq!(
            resolved.as_str(),
            "https://en.wikipedia.org/wiki/Caf%C3%A9%20au%20lait#History"
        );

        let resolved = n.resolve_relative_href(&base, "./Caf%C3%A9").unwrap();
        assert_eq!(resolved.as_str(), "https://en.wikipedia.org/wiki/Caf%C3%A9");
    }

    #[test]
    fn root_relative_href_keeps_host() {
        let n = LinkNormalizer::default();
        let resolved = n
            .resolve_relative_href(&url("https://de.m.wikipedia.org/wiki/Kaffee"), "/wiki/Tee")
            .unwrap();
        assert_eq!(resolved.as_str(), "https://de.m.wikipedia.org/wiki/Tee");
    }

    #[test]
    fn absolute_href_ignores_base() {
        let n = LinkNormalizer::default();
        let resolved = n
            .resolve_relative_href(
                &url("https://en.wikipedia.org/wiki/Foo"),
                "https://example.org/a b?x=1",
            )
            .unwrap();
        assert_eq!(resolved.as_str(), "https://example.org/a%20b?x=1");
    }

    #[test]
    fn non_wiki_base_is_used_as_is() {
        let n = LinkNormalizer::default();
        let resolved = n
            .resolve_relative_href(&url("https://example.org/docs/index.html"), "./page.html")
            .unwrap();
        assert_eq!(resolved.as_str(), "https://example.org/docs/page.html");
    }

    #[test]
    fn unresolvable_href_fails() {
        let n = LinkNormalizer::default();
        let err = n
            .resolve_relative_href(&url("https://en.wikipedia.org/wiki/Foo"), "http://")
            .unwrap_err();
        assert!(matches!(err, LinkError::UnresolvableHref { .. }));
    }
}
