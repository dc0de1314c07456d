//! The wiki link normalizer.
//!
//! Converts between raw URLs/hrefs and canonical, percent-encoded wiki URLs
//! and answers structural questions about them (title, language, namespace).
//! Everything here is a pure function of the input and the [`SiteConfig`];
//! a single normalizer can be shared freely across threads.

mod media;
mod resolve;
mod sharing;


pub use media::FileLinkRewriteRule;
pub use sharing::{add_sharing_provenance, SharingVariant};

use crate::config::SiteConfig;
use crate::error::LinkError;
use crate::namespace::{self, PageNamespace};
use crate::url_model::{
    self, decode_component, desktop_host, language_from_host, mobile_host,
    percent_encode_title_for_path, to_display, to_underscored,
};
use url::{Host, Url};

const WIKI_PATH_PREFIX: &str = "/wiki/";
const INDEX_PHP_PATH: &str = "/w/index.php";

/// Fragments pointing at references rather than page content.
const REFERENCE_FRAGMENT_PREFIXES: &[&str] = &["cite_note-", "cite_ref-", "endnote_"];

#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    config: SiteConfig,
    file_rule: FileLinkRewriteRule,
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

impl LinkNormalizer {
    pub fn new(config: SiteConfig) -> Self {
        let file_rule = FileLinkRewriteRule::from_config(&config);
        Self { config, file_rule }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Deep link into the app: same URL under the configured app scheme.
    pub fn replace_scheme_with_app_scheme(&self, url: &Url) -> Result<Url, LinkError> {
        url_model::replace_scheme(url, &self.config.app_scheme)
    }

    pub fn extract_language(&self, url: &Url) -> Option<String> {
        match url.host()? {
            Host::Domain(domain) => language_from_host(domain, &self.config.non_language_labels),
            Host::Ipv4(_) | Host::Ipv6(_) => None,
        }
    }

    /// Database name of the wiki (`en` → `enwiki`, `zh-yue` → `zh_yuewiki`).
    pub fn wiki_database_name(&self, url: &Url) -> Option<String> {
        self.extract_language(url)
            .map(|language| format!("{}wiki", language.replace('-', "_")))
    }

    /// Decoded path after `/wiki/`, e.g. `Talk:G/O_Media`.
    pub fn wiki_resource_path(&self, url: &Url) -> Option<String> {
        let encoded = url.path().strip_prefix(WIKI_PATH_PREFIX)?;
        if encoded.is_empty() {
            return None;
        }
        decode_component(encoded).filter(|decoded| !decoded.is_empty())
    }

    /// The `title` query item of `/w/index.php` URLs.
    pub fn w_resource_path(&self, url: &Url) -> Option<String> {
        if url.path() != INDEX_PHP_PATH {
            return None;
        }
        url.query_pairs()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    pub fn is_wiki_resource(&self, url: &Url) -> bool {
        self.wiki_resource_path(url).is_some()
    }

    /// Title in storage form (`Foo_bar`), namespace prefix included.
    pub fn extract_title_with_underscores(&self, url: &Url) -> Option<String> {
        self.wiki_resource_path(url)
            .or_else(|| self.w_resource_path(url))
            .map(|title| to_underscored(&title))
    }

    /// Title in display form (`Foo bar`), namespace prefix included.
    pub fn extract_title(&self, url: &Url) -> Option<String> {
        self.extract_title_with_underscores(url)
            .map(|title| to_display(&title))
    }

    pub fn percent_encoded_page_title(&self, url: &Url) -> Option<String> {
        let title = self.extract_title_with_underscores(url)?;
        percent_encode_title_for_path(&title).ok()
    }

    fn encoded_wiki_url(&self, url: &Url) -> Option<Url> {
        let encoded_title = self.percent_encoded_page_title(url)?;
        let mut encoded = url.clone();
        encoded.set_path(&format!("{WIKI_PATH_PREFIX}{encoded_title}"));
        if self.wiki_resource_path(url).is_none() {
            // The title came from `index.php?title=`; it now lives in the path.
            let rest: Vec<(String, String)> = url
                .query_pairs()
                .into_owned()
                .filter(|(key, _)| key != "title")
                .collect();
            if rest.is_empty() {
                encoded.set_query(None);
            } else {
                encoded.query_pairs_mut().clear().extend_pairs(rest);
            }
        }
        Some(encoded)
    }

    /// Rewrites the path to `/wiki/<encoded title>` so a title containing `/`
    /// stays one path segment (`/wiki/G/O_Media` → `/wiki/G%2FO_Media`).
    ///
    /// Must only be called on wiki page URLs; anything else is a caller bug
    /// and yields [`LinkError::NotAWikiUrl`].
    pub fn canonicalize_article_url(&self, url: &Url) -> Result<Url, LinkError> {
        self.encoded_wiki_url(url).ok_or_else(|| {
            tracing::warn!(url = %url, "canonicalize_article_url called on a non-wiki URL");
            LinkError::NotAWikiUrl(url.to_string())
        })
    }

    /// `<scheme>://<desktop host>/`.
    pub fn site_url(&self, url: &Url) -> Option<Url> {
        let host = desktop_host(url.host_str()?, &self.config.mobile_label);
        with_host_and_path(url, &host, "/")
    }

    /// Canonical desktop page URL used for storage lookups: configured scheme,
    /// lowercased desktop host, underscored title with the site's casing rule,
    /// no query or fragment.
    pub fn database_url(&self, url: &Url) -> Option<Url> {
        let host = desktop_host(url.host_str()?, &self.config.mobile_label);
        let title = self.extract_title_with_underscores(url)?;
        let encoded = percent_encode_title_for_path(&self.database_title(url, &title)).ok()?;
        let raw = format!(
            "{}://{}{}{}",
            self.config.canonical_scheme, host, WIKI_PATH_PREFIX, encoded
        );
        Url::parse(&raw).ok()
    }

    /// Applies the casing rule to the bare title. Namespaced titles get the
    /// canonical prefix, so `Benutzer:x` and `User:X` share a key on dewiki.
    fn database_title(&self, url: &Url, title: &str) -> String {
        let casing = self.config.title_casing;
        if let Some(language) = self.extract_language(url) {
            let (ns, bare) =
                namespace::namespace_and_title(&self.config.namespaces, &language, title);
            if ns != PageNamespace::Main {
                return format!(
                    "{}:{}",
                    to_underscored(ns.canonical_name()),
                    casing.apply(&to_underscored(&bare))
                );
            }
        }
        casing.apply(title)
    }

    pub fn extract_database_key(&self, url: &Url) -> Option<String> {
        self.database_url(url).map(String::from)
    }

    /// [`Self::database_url`], or the input when it is not a wiki page.
    pub fn canonical(&self, url: &Url) -> Url {
        self.database_url(url).unwrap_or_else(|| url.clone())
    }

    /// Same-site URL for a display or underscored title.
    pub fn url_with_title(&self, base: &Url, title: &str) -> Option<Url> {
        let host = base.host_str()?.to_ascii_lowercase();
        let encoded = percent_encode_title_for_path(&to_underscored(title)).ok()?;
        with_host_and_path(base, &host, &format!("{WIKI_PATH_PREFIX}{encoded}"))
    }

    /// `base` with its fragment replaced; an empty fragment removes it.
    pub fn url_with_fragment(&self, base: &Url, fragment: &str) -> Option<Url> {
        base.host_str()?;
        let mut url = base.clone();
        url.set_fragment(Some(fragment).filter(|f| !f.is_empty()));
        Some(url)
    }

    /// Same-site URL for an explicit path on the desktop or mobile domain.
    pub fn url_with_path(&self, base: &Url, path: &str, is_mobile: bool) -> Option<Url> {
        let host = base.host_str()?;
        let host = if is_mobile {
            mobile_host(host, &self.config.mobile_label)
        } else {
            desktop_host(host, &self.config.mobile_label)
        };
        if path.starts_with('/') {
            with_host_and_path(base, &host, path)
        } else {
            with_host_and_path(base, &host, &format!("/{path}"))
        }
    }

    /// Namespace and bare display title, reporting Main for unprefixed titles.
    pub fn namespace_and_title(&self, url: &Url) -> Option<(PageNamespace, String)> {
        let language = self.extract_language(url)?;
        let path = self.extract_title_with_underscores(url)?;
        Some(namespace::namespace_and_title(
            &self.config.namespaces,
            &language,
            &path,
        ))
    }

    pub fn namespace(&self, url: &Url) -> Option<PageNamespace> {
        self.namespace_and_title(url).map(|(ns, _)| ns)
    }

    /// Explicit, recognised non-Main prefix and the bare title.
    ///
    /// Unprefixed titles return `None`; callers that want Main as the default
    /// use [`Self::namespace_and_title`].
    pub fn classify_namespace(&self, url: &Url) -> Option<(PageNamespace, String)> {
        self.namespace_and_title(url)
            .filter(|(ns, _)| *ns != PageNamespace::Main)
    }

    /// `Talk:<title>` for Main namespace articles, `None` for everything else.
    pub fn article_talk_page_url(&self, url: &Url) -> Option<Url> {
        let (ns, title) = self.namespace_and_title(url)?;
        if ns != PageNamespace::Main || title.is_empty() {
            return None;
        }
        self.url_with_title(url, &format!("{}:{}", PageNamespace::Talk.canonical_name(), title))
    }

    pub fn is_hosted_file_link(&self, url: &Url) -> bool {
        self.file_rule.matches_host(url)
    }

    /// Rewrites legacy audio file links to their transcoded mp3 location.
    /// Returns the input unchanged whenever the rule does not apply.
    pub fn rewrite_for_playback_compatibility(&self, url: &Url) -> Url {
        self.file_rule.rewrite(url)
    }

    /// True when the URL is not a `<language host>/wiki/<title>` page, i.e. the
    /// app should hand it off rather than render it.
    pub fn is_non_standard_url(&self, url: &Url) -> bool {
        self.extract_language(url).is_none() || self.extract_title(url).is_none()
    }

    /// Whether a link preview makes sense: not for reference fragments, always
    /// for wiki pages, and for other URLs only over http(s).
    pub fn is_previewable(&self, url: &Url) -> bool {
        if let Some(fragment) = url.fragment() {
            if REFERENCE_FRAGMENT_PREFIXES
                .iter()
                .any(|prefix| fragment.starts_with(prefix))
            {
                return false;
            }
        }
        if self.is_wiki_resource(url) {
            return true;
        }
        matches!(url.scheme(), "http" | "https")
    }
}

fn with_host_and_path(base: &Url, host: &str, path: &str) -> Option<Url> {
    let mut url = base.clone();
    url.set_host(Some(host)).ok()?;
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}
