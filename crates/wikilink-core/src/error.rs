//! Error type for link construction and resolution.
//!
//! Structural queries (title, language, namespace) return `Option` instead;
//! only operations that build a URL from caller input report failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    /// Input (or the URL produced from it) could not be parsed.
    #[error("malformed URL {input:?}: {source}")]
    MalformedUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Empty or otherwise unusable page title.
    #[error("invalid page title {0:?}")]
    InvalidTitle(String),
    /// The operation needs a wiki page path and the URL has none.
    #[error("not a wiki page URL: {0}")]
    NotAWikiUrl(String),
    /// The href could not be resolved to an absolute URL.
    #[error("cannot resolve href {href:?}: {source}")]
    UnresolvableHref {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

impl LinkError {
    pub(crate) fn malformed(input: impl Into<String>, source: url::ParseError) -> Self {
        LinkError::MalformedUrl {
            input: input.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_input() {
        let err = LinkError::malformed("not a url", url::ParseError::RelativeUrlWithoutBase);
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL without a base"));

        let err = LinkError::NotAWikiUrl("https://example.com/".to_string());
        assert_eq!(err.to_string(), "not a wiki page URL: https://example.com/");
    }

    #[test]
    fn source_is_exposed() {
        use std::error::Error;
        let err = LinkError::UnresolvableHref {
            href: "./x".to_string(),
            source: url::ParseError::EmptyHost,
        };
        assert!(err.source().is_some());
        assert!(LinkError::InvalidTitle(String::new()).source().is_none());
    }
}
