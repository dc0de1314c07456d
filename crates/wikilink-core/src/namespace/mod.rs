//! Page namespaces and per-language prefix tables.
//!
//! A wiki partitions its titles by a `Prefix:` in front of the page name.
//! Canonical English prefixes are valid on every wiki; localized prefixes
//! come from the site configuration.

mod table;

pub use table::{default_tables, namespace_and_title, namespace_for_prefix, NamespaceTables};

use serde::{Deserialize, Serialize};

/// Namespace of a wiki page, with the MediaWiki numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageNamespace {
    Media,
    Special,
    Main,
    Talk,
    User,
    UserTalk,
    Project,
    ProjectTalk,
    File,
    FileTalk,
    #[serde(rename = "mediawiki")]
    MediaWiki,
    #[serde(rename = "mediawiki_talk")]
    MediaWikiTalk,
    Template,
    TemplateTalk,
    Help,
    HelpTalk,
    Category,
    CategoryTalk,
    Portal,
    PortalTalk,
    Draft,
    DraftTalk,
    #[serde(rename = "timedtext")]
    TimedText,
    #[serde(rename = "timedtext_talk")]
    TimedTextTalk,
    Module,
    ModuleTalk,
}

impl PageNamespace {
    pub const ALL: [PageNamespace; 26] = [
        PageNamespace::Media,
        PageNamespace::Special,
        PageNamespace::Main,
        PageNamespace::Talk,
        PageNamespace::User,
        PageNamespace::UserTalk,
        PageNamespace::Project,
        PageNamespace::ProjectTalk,
        PageNamespace::File,
        PageNamespace::FileTalk,
        PageNamespace::MediaWiki,
        PageNamespace::MediaWikiTalk,
        PageNamespace::Template,
        PageNamespace::TemplateTalk,
        PageNamespace::Help,
        PageNamespace::HelpTalk,
        PageNamespace::Category,
        PageNamespace::CategoryTalk,
        PageNamespace::Portal,
        PageNamespace::PortalTalk,
        PageNamespace::Draft,
        PageNamespace::DraftTalk,
        PageNamespace::TimedText,
        PageNamespace::TimedTextTalk,
        PageNamespace::Module,
        PageNamespace::ModuleTalk,
    ];

    /// MediaWiki namespace id.
    pub fn id(self) -> i32 {
        match self {
            PageNamespace::Media => -2,
            PageNamespace::Special => -1,
            PageNamespace::Main => 0,
            PageNamespace::Talk => 1,
            PageNamespace::User => 2,
            PageNamespace::UserTalk => 3,
            PageNamespace::Project => 4,
            PageNamespace::ProjectTalk => 5,
            PageNamespace::File => 6,
            PageNamespace::FileTalk => 7,
            PageNamespace::MediaWiki => 8,
            PageNamespace::MediaWikiTalk => 9,
            PageNamespace::Template => 10,
            PageNamespace::TemplateTalk => 11,
            PageNamespace::Help => 12,
            PageNamespace::HelpTalk => 13,
            PageNamespace::Category => 14,
            PageNamespace::CategoryTalk => 15,
            PageNamespace::Portal => 100,
            PageNamespace::PortalTalk => 101,
            PageNamespace::Draft => 118,
            PageNamespace::DraftTalk => 119,
            PageNamespace::TimedText => 710,
            PageNamespace::TimedTextTalk => 711,
            PageNamespace::Module => 828,
            PageNamespace::ModuleTalk => 829,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.id() == id)
    }

    /// Canonical (English) prefix, without the trailing colon. Empty for Main.
    pub fn canonical_name(self) -> &'static str {
        match self {
            PageNamespace::Media => "Media",
            PageNamespace::Special => "Special",
            PageNamespace::Main => "",
            PageNamespace::Talk => "Talk",
            PageNamespace::User => "User",
            PageNamespace::UserTalk => "User talk",
            PageNamespace::Project => "Project",
            PageNamespace::ProjectTalk => "Project talk",
            PageNamespace::File => "File",
            PageNamespace::FileTalk => "File talk",
            PageNamespace::MediaWiki => "MediaWiki",
            PageNamespace::MediaWikiTalk => "MediaWiki talk",
            PageNamespace::Template => "Template",
            PageNamespace::TemplateTalk => "Template talk",
            PageNamespace::Help => "Help",
            PageNamespace::HelpTalk => "Help talk",
            PageNamespace::Category => "Category",
            PageNamespace::CategoryTalk => "Category talk",
            PageNamespace::Portal => "Portal",
            PageNamespace::PortalTalk => "Portal talk",
            PageNamespace::Draft => "Draft",
            PageNamespace::DraftTalk => "Draft talk",
            PageNamespace::TimedText => "TimedText",
            PageNamespace::TimedTextTalk => "TimedText talk",
            PageNamespace::Module => "Module",
            PageNamespace::ModuleTalk => "Module talk",
        }
    }

    /// Talk namespaces have odd, non-negative ids.
    pub fn is_talk(self) -> bool {
        let id = self.id();
        id >= 0 && id % 2 == 1
    }
}
