use std::fmt;

use serde::{Deserialize, Serialize};

/// The collection a result came from.
///
/// Derived from the source collection at projection time, never inferred
/// from record content. Serializes to the lowercase label the rendering
/// layer keys its display mapping on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// News entries, each carrying its own page path.
    News,

    /// Research topics, sharing one fixed page path.
    Research,

    /// The personnel directory, sharing one fixed page path.
    Team,

    /// The static page index.
    Pages,
}

impl Category {
    /// The lowercase label used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Research => "research",
            Self::Team => "team",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One projected hit, uniform across all collections.
///
/// Produced by [`Collection::project`](crate::Collection::project) and
/// consumed by the rendering layer, which lists hits and navigates to
/// `path` on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title of the hit.
    pub title: String,

    /// Short display text under the title. May be empty — static pages
    /// have no description.
    pub description: String,

    /// Navigation target for this hit. Never empty.
    pub path: String,

    /// Which collection produced this hit.
    pub category: Category,
}
