//! Rewriting hosted audio file links to a playable format.

use crate::config::SiteConfig;
use url::Url;

const COMMONS_SEGMENT: &str = "commons";
const TRANSCODED_SEGMENT: &str = "transcoded";
const PLAYABLE_SUFFIX: &str = ".mp3";

/// Legacy audio files on the upload host have an mp3 rendition under
/// `.../commons/transcoded/<hash dirs>/<file>/<file>.mp3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLinkRewriteRule {
    pub upload_host: String,
    pub legacy_extensions: Vec<String>,
}

impl FileLinkRewriteRule {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            upload_host: config.upload_host.clone(),
            legacy_extensions: config.legacy_audio_extensions.clone(),
        }
    }

    pub fn matches_host(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&self.upload_host))
    }

    fn is_legacy_audio(&self, filename: &str) -> bool {
        filename.rsplit_once('.').is_some_and(|(_, ext)| {
            self.legacy_extensions
                .iter()
                .any(|legacy| legacy.eq_ignore_ascii_case(ext))
        })
    }

    /// Applies the rewrite, or returns a copy of `url` when any part of the
    /// expected layout is missing.
    pub fn rewrite(&self, url: &Url) -> Url {
        if !self.matches_host(url) {
            return url.clone();
        }
        let Some(segments) = url.path_segments() else {
            return url.clone();
        };
        let mut segments: Vec<String> = segments.map(str::to_string).collect();

        let filename = match segments.last() {
            Some(name) if self.is_legacy_audio(name) => name.clone(),
            _ => return url.clone(),
        };
        let commons = match segments.iter().position(|s| s == COMMONS_SEGMENT) {
            Some(index) if index + 1 < segments.len() => index,
            _ => {
                tracing::debug!(url = %url, "audio link without commons segment, left unchanged");
                return url.clone();
            }
        };

        segments.insert(commons + 1, TRANSCODED_SEGMENT.to_string());
        segments.push(format!("{filename}{PLAYABLE_SUFFIX}"));

        let mut rewritten = url.clone();
        rewritten.set_path(&format!("/{}", segments.join("/")));
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> FileLinkRewriteRule {
        FileLinkRewriteRule::from_config(&SiteConfig::default())
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn ogg_gets_transcoded_mp3_path() {
        let rewritten = rule().rewrite(&url(
            "https://upload.wikimedia.org/wikipedia/commons/a/ab/Sound.ogg",
        ));
        assert_eq!(
            rewritten.as_str(),
            "https://upload.wikimedia.org/wikipedia/commons/transcoded/a/ab/Sound.ogg/Sound.ogg.mp3"
        );
    }

    #[test]
    fn extension_and_host_compare_case_insensitively() {
        let rewritten = rule().rewrite(&url("https://UPLOAD.wikimedia.org/wikipedia/commons/1/12/Bird.OGA"));
        assert_eq!(
            rewritten.path(),
            "/wikipedia/commons/transcoded/1/12/Bird.OGA/Bird.OGA.mp3"
        );
    }

    #[test]
    fn encoded_filename_is_preserved() {
        let rewritten = rule().rewrite(&url(
            "https://upload.wikimedia.org/wikipedia/commons/c/c8/Bach%20Fugue.ogg",
        ));
        assert_eq!(
            rewritten.path(),
            "/wikipedia/commons/transcoded/c/c8/Bach%20Fugue.ogg/Bach%20Fugue.ogg.mp3"
        );
    }

    #[test]
    fn other_hosts_and_extensions_are_untouched() {
        let other_host = url("https://example.org/wikipedia/commons/a/ab/Sound.ogg");
        assert_eq!(rule().rewrite(&other_host), other_host);

        let image = url("https://upload.wikimedia.org/wikipedia/commons/a/ab/Photo.jpg");
        assert_eq!(rule().rewrite(&image), image);

        let no_extension = url("https://upload.wikimedia.org/wikipedia/commons/a/ab/ogg");
        assert_eq!(rule().rewrite(&no_extension), no_extension);
    }

    #[test]
    fn missing_commons_segment_is_untouched() {
        let en = url("https://upload.wikimedia.org/wikipedia/en/a/ab/Sound.ogg");
        assert_eq!(rule().rewrite(&en), en);
    }
}
