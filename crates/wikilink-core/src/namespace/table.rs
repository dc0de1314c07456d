//! Prefix lookup against language tables and canonical names.

use super::PageNamespace;
use std::collections::BTreeMap;

/// Language code -> (localized prefix -> namespace).
pub type NamespaceTables = BTreeMap<String, BTreeMap<String, PageNamespace>>;

/// Aliases accepted on every wiki in addition to the canonical names.
const CANONICAL_ALIASES: &[(&str, PageNamespace)] = &[
    ("image", PageNamespace::File),
    ("image talk", PageNamespace::FileTalk),
];

const EN: &[(&str, PageNamespace)] = &[
    ("Wikipedia", PageNamespace::Project),
    ("Wikipedia talk", PageNamespace::ProjectTalk),
    ("WP", PageNamespace::Project),
    ("WT", PageNamespace::ProjectTalk),
];

const DE: &[(&str, PageNamespace)] = &[
    ("Medium", PageNamespace::Media),
    ("Spezial", PageNamespace::Special),
    ("Diskussion", PageNamespace::Talk),
    ("Benutzer", PageNamespace::User),
    ("Benutzer Diskussion", PageNamespace::UserTalk),
    ("Wikipedia", PageNamespace::Project),
    ("Wikipedia Diskussion", PageNamespace::ProjectTalk),
    ("Datei", PageNamespace::File),
    ("Datei Diskussion", PageNamespace::FileTalk),
    ("Vorlage", PageNamespace::Template),
    ("Vorlage Diskussion", PageNamespace::TemplateTalk),
    ("Hilfe", PageNamespace::Help),
    ("Hilfe Diskussion", PageNamespace::HelpTalk),
    ("Kategorie", PageNamespace::Category),
    ("Kategorie Diskussion", PageNamespace::CategoryTalk),
    ("Portal Diskussion", PageNamespace::PortalTalk),
    ("Modul", PageNamespace::Module),
    ("Modul Diskussion", PageNamespace::ModuleTalk),
];

const FR: &[(&str, PageNamespace)] = &[
    ("Média", PageNamespace::Media),
    ("Spécial", PageNamespace::Special),
    ("Discussion", PageNamespace::Talk),
    ("Utilisateur", PageNamespace::User),
    ("Discussion utilisateur", PageNamespace::UserTalk),
    ("Wikipédia", PageNamespace::Project),
    ("Discussion Wikipédia", PageNamespace::ProjectTalk),
    ("Fichier", PageNamespace::File),
    ("Discussion fichier", PageNamespace::FileTalk),
    ("Modèle", PageNamespace::Template),
    ("Discussion modèle", PageNamespace::TemplateTalk),
    ("Aide", PageNamespace::Help),
    ("Discussion aide", PageNamespace::HelpTalk),
    ("Catégorie", PageNamespace::Category),
    ("Discussion catégorie", PageNamespace::CategoryTalk),
    ("Portail", PageNamespace::Portal),
    ("Discussion Portail", PageNamespace::PortalTalk),
    ("Discussion module", PageNamespace::ModuleTalk),
];

/// Built-in localized tables (en, de, fr).
pub fn default_tables() -> NamespaceTables {
    [("en", EN), ("de", DE), ("fr", FR)]
        .into_iter()
        .map(|(lang, entries)| {
            let table: BTreeMap<String, PageNamespace> = entries
                .iter()
                .map(|(prefix, ns)| (prefix.to_string(), *ns))
                .collect();
            (lang.to_string(), table)
        })
        .collect()
}

/// Prefixes compare case-insensitively, with `_` and ` ` treated alike.
fn normalize_prefix(prefix: &str) -> String {
    prefix.replace('_', " ").trim().to_lowercase()
}

/// Looks up a prefix (without colon) for `language`.
///
/// The language table is consulted first, then the canonical English names,
/// which MediaWiki accepts on every wiki. Main has no prefix and is never
/// returned.
pub fn namespace_for_prefix(
    tables: &NamespaceTables,
    language: &str,
    prefix: &str,
) -> Option<PageNamespace> {
    let wanted = normalize_prefix(prefix);
    if wanted.is_empty() {
        return None;
    }

    let localized = tables.get(language).and_then(|table| {
        table
            .iter()
            .find(|(name, _)| normalize_prefix(name) == wanted)
            .map(|(_, ns)| *ns)
    });
    if localized.is_some() {
        return localized;
    }

    PageNamespace::ALL
        .into_iter()
        .filter(|ns| *ns != PageNamespace::Main)
        .find(|ns| normalize_prefix(ns.canonical_name()) == wanted)
        .or_else(|| {
            CANONICAL_ALIASES
                .iter()
                .find(|(alias, _)| *alias == wanted)
                .map(|(_, ns)| *ns)
        })
}

/// Splits a decoded resource path (`Talk:Foo_bar`) into its namespace and
/// display title (`Foo bar`). Unknown or missing prefixes yield Main with the
/// whole path as the title.
pub fn namespace_and_title(
    tables: &NamespaceTables,
    language: &str,
    resource_path: &str,
) -> (PageNamespace, String) {
    if let Some((prefix, rest)) = resource_path.split_once(':') {
        if let Some(ns) = namespace_for_prefix(tables, language, prefix) {
            return (ns, rest.replace('_', " ").trim().to_string());
        }
    }
    (PageNamespace::Main, resource_path.replace('_', " "))
}
