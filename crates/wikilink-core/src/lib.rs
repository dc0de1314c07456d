pub mod config;
pub mod error;
pub mod logging;

pub mod namespace;
pub mod normalizer;
pub mod url_model;

pub use config::{SiteConfig, TitleCasing};
pub use error::LinkError;
pub use namespace::PageNamespace;
pub use normalizer::{add_sharing_provenance, FileLinkRewriteRule, LinkNormalizer, SharingVariant};
