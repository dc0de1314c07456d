//! Provenance tags for shared links.

use serde::{Deserialize, Serialize};
use url::Url;

const PROVENANCE_KEY: &str = "wprov";

/// How a link left the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharingVariant {
    /// Plain text share.
    Text,
    /// Share that includes an image (e.g. a quote card).
    Image,
}

impl SharingVariant {
    pub fn provenance_tag(self) -> &'static str {
        match self {
            SharingVariant::Text => "sfti1",
            SharingVariant::Image => "sfii1",
        }
    }
}

/// Replaces the whole query with `wprov=<tag>`.
pub fn add_sharing_provenance(url: &Url, variant: SharingVariant) -> Url {
    let mut shared = url.clone();
    shared
        .query_pairs_mut()
        .clear()
        .append_pair(PROVENANCE_KEY, variant.provenance_tag());
    shared
}
