use crate::namespace::{default_tables, NamespaceTables};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the first character of a title is folded when building database keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleCasing {
    /// First character is case-insensitive (upper-cased in keys), the rest is kept.
    /// Characters whose upper case is more than one char (`ß`) are left alone.
    #[default]
    FirstLetter,
    /// Titles are fully case-sensitive (e.g. Wiktionary).
    CaseSensitive,
}

impl TitleCasing {
    pub fn apply(self, title: &str) -> String {
        match self {
            TitleCasing::CaseSensitive => title.to_string(),
            TitleCasing::FirstLetter => {
                let mut chars = title.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        let upper = first.to_uppercase();
                        if upper.len() != 1 {
                            return title.to_string();
                        }
                        let mut out = String::with_capacity(title.len());
                        out.extend(upper);
                        out.extend(chars);
                        out
                    }
                }
            }
        }
    }
}

/// Site configuration loaded from `~/.config/wikilink/site.toml`.
///
/// Every field is optional in the file; missing fields take the Wikimedia
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host serving uploaded media files.
    pub upload_host: String,
    /// Audio extensions (lowercase, no dot) rewritten to transcoded mp3.
    pub legacy_audio_extensions: Vec<String>,
    /// Scheme used for canonical/database URLs.
    pub canonical_scheme: String,
    /// Scheme used for in-app deep links.
    pub app_scheme: String,
    /// Host label marking the mobile domain (`en.m.wikipedia.org`).
    pub mobile_label: String,
    /// Leading host labels that are never a language code.
    pub non_language_labels: Vec<String>,
    /// First-letter folding rule for database keys.
    pub title_casing: TitleCasing,
    /// Localized namespace prefixes per language. Replaces the built-in
    /// tables entirely when present.
    pub namespaces: NamespaceTables,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            upload_host: "upload.wikimedia.org".to_string(),
            legacy_audio_extensions: vec!["ogg".to_string(), "oga".to_string()],
            canonical_scheme: "https".to_string(),
            app_scheme: "wikipedia".to_string(),
            mobile_label: "m".to_string(),
            non_language_labels: ["www", "m", "commons", "meta", "species", "upload", "incubator"]
                .into_iter()
                .map(String::from)
                .collect(),
            title_casing: TitleCasing::default(),
            namespaces: default_tables(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: SiteConfig = toml::from_str(data).context("invalid site config")?;
        Ok(cfg)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading site config {}", path.display()))?;
        Self::from_toml_str(&data)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wikilink")?;
    Ok(xdg_dirs.place_config_file("site.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default site config at {}", path.display());
        return Ok(default_cfg);
    }

    SiteConfig::load_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::PageNamespace;

    #[test]
    fn default_config_values() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.upload_host, "upload.wikimedia.org");
        assert_eq!(cfg.legacy_audio_extensions, vec!["ogg", "oga"]);
        assert_eq!(cfg.canonical_scheme, "https");
        assert_eq!(cfg.app_scheme, "wikipedia");
        assert_eq!(cfg.title_casing, TitleCasing::FirstLetter);
        assert!(cfg.namespaces.contains_key("de"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed = SiteConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed.upload_host, cfg.upload_host);
        assert_eq!(parsed.non_language_labels, cfg.non_language_labels);
        assert_eq!(parsed.namespaces, cfg.namespaces);
    }

    #[test]
    fn config_toml_partial_values() {
        let toml = r#"
            upload_host = "upload.example.org"
            title_casing = "case_sensitive"

            [namespaces.nl]
            "Overleg" = "talk"
            "Gebruiker" = "user"
        "#;
        let cfg = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.upload_host, "upload.example.org");
        assert_eq!(cfg.title_casing, TitleCasing::CaseSensitive);
        assert_eq!(cfg.legacy_audio_extensions, vec!["ogg", "oga"]);
        assert_eq!(cfg.namespaces.len(), 1);
        assert_eq!(cfg.namespaces["nl"]["Overleg"], PageNamespace::Talk);
    }

    #[test]
    fn config_toml_rejects_unknown_namespace() {
        let toml = r#"
            [namespaces.nl]
            "Overleg" = "chatter"
        "#;
        assert!(SiteConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.upload_host, "upload.wikimedia.org");

        fs::write(&path, "mobile_label = \"mobile\"\n").unwrap();
        let reloaded = load_or_init_at(&path).unwrap();
        assert_eq!(reloaded.mobile_label, "mobile");
    }

    #[test]
    fn title_casing_first_letter() {
        assert_eq!(TitleCasing::FirstLetter.apply("iPhone"), "IPhone");
        assert_eq!(TitleCasing::FirstLetter.apply("éclair"), "Éclair");
        assert_eq!(TitleCasing::FirstLetter.apply(""), "");
        assert_eq!(TitleCasing::CaseSensitive.apply("iPhone"), "iPhone");
    }

    #[test]
    fn title_casing_keeps_multi_char_upper_case() {
        assert_eq!(TitleCasing::FirstLetter.apply("ßeta"), "ßeta");
        assert_eq!(TitleCasing::FirstLetter.apply("ŉ_x"), "ŉ_x");
    }
}
