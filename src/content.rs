use serde::{Deserialize, Serialize};

use crate::result::{Category, SearchResult};
use crate::traits::Collection;

/// Maximum description length in characters before truncation.
///
/// Projections cut long text (news descriptions, research topic bodies) to
/// this many characters and append an ellipsis. The cut is character-based,
/// so multi-byte text is never split mid-codepoint, but it is not
/// word-boundary aware — a long description can be cut mid-word. That is a
/// known cosmetic limitation of the projection, not a bug.
pub const DESCRIPTION_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One news entry. Searchable on `title` and `description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    /// Per-record page path, e.g. `/noticias/forum-permanente`.
    pub path: String,
}

/// One research topic. Searchable on `title`, `body`, and `coordinator`.
///
/// Topics carry no path of their own — [`TopicCollection`] supplies the
/// shared research page path at projection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchTopic {
    pub title: String,
    pub body: String,
    pub coordinator: String,
}

/// One personnel directory entry. Searchable on `name`, `role`, and
/// `institution`.
///
/// Entries carry no path of their own — [`DirectoryCollection`] supplies
/// the shared team page path at projection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub role: String,
    /// Home institution, absent for internal staff.
    #[serde(default)]
    pub institution: Option<String>,
}

/// One entry in the static page index. Searchable on `title` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    pub title: String,
    pub path: String,
}

// ---------------------------------------------------------------------------
// Built-in collections
// ---------------------------------------------------------------------------

/// The news collection. Category `news`, highest priority slot by
/// convention — register it first.
pub struct NewsCollection {
    items: Vec<NewsItem>,
}

impl NewsCollection {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

impl Collection for NewsCollection {
    fn category(&self) -> Category {
        Category::News
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn field_values(&self, idx: usize) -> Vec<&str> {
        let item = &self.items[idx];
        vec![item.title.as_str(), item.description.as_str()]
    }

    fn project(&self, idx: usize) -> SearchResult {
        let item = &self.items[idx];
        SearchResult {
            title: item.title.clone(),
            description: truncate(&item.description, DESCRIPTION_LIMIT),
            path: item.path.clone(),
            category: Category::News,
        }
    }
}

/// The research topic collection. Category `research`; all hits navigate
/// to one shared research page path.
pub struct TopicCollection {
    topics: Vec<ResearchTopic>,
    path: String,
}

impl TopicCollection {
    pub fn new(topics: Vec<ResearchTopic>, path: impl Into<String>) -> Self {
        Self {
            topics,
            path: path.into(),
        }
    }
}

impl Collection for TopicCollection {
    fn category(&self) -> Category {
        Category::Research
    }

    fn len(&self) -> usize {
        self.topics.len()
    }

    fn field_values(&self, idx: usize) -> Vec<&str> {
        let topic = &self.topics[idx];
        vec![
            topic.title.as_str(),
            topic.body.as_str(),
            topic.coordinator.as_str(),
        ]
    }

    fn project(&self, idx: usize) -> SearchResult {
        let topic = &self.topics[idx];
        SearchResult {
            title: topic.title.clone(),
            description: truncate(&topic.body, DESCRIPTION_LIMIT),
            path: self.path.clone(),
            category: Category::Research,
        }
    }
}

/// The personnel directory. Category `team`; all hits navigate to one
/// shared team page path.
pub struct DirectoryCollection {
    entries: Vec<DirectoryEntry>,
    path: String,
}

impl DirectoryCollection {
    pub fn new(entries: Vec<DirectoryEntry>, path: impl Into<String>) -> Self {
        Self {
            entries,
            path: path.into(),
        }
    }
}

impl Collection for DirectoryCollection {
    fn category(&self) -> Category {
        Category::Team
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn field_values(&self, idx: usize) -> Vec<&str> {
        let entry = &self.entries[idx];
        vec![
            entry.name.as_str(),
            entry.role.as_str(),
            // Absent institution presents as empty — never matches.
            entry.institution.as_deref().unwrap_or(""),
        ]
    }

    fn project(&self, idx: usize) -> SearchResult {
        let entry = &self.entries[idx];
        let description = match &entry.institution {
            Some(institution) => format!("{} ({})", entry.role, institution),
            None => entry.role.clone(),
        };
        SearchResult {
            title: entry.name.clone(),
            description,
            path: self.path.clone(),
            category: Category::Team,
        }
    }
}

/// The static page index. Category `pages`; titles only, no descriptions.
pub struct PageIndex {
    pages: Vec<StaticPage>,
}

impl PageIndex {
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self { pages }
    }
}

impl Collection for PageIndex {
    fn category(&self) -> Category {
        Category::Pages
    }

    fn len(&self) -> usize {
        self.pages.len()
    }

    fn field_values(&self, idx: usize) -> Vec<&str> {
        vec![self.pages[idx].title.as_str()]
    }

    fn project(&self, idx: usize) -> SearchResult {
        let page = &self.pages[idx];
        SearchResult {
            title: page.title.clone(),
            description: String::new(),
            path: page.path.clone(),
            category: Category::Pages,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Cut `text` to at most `limit` characters, appending an ellipsis when
/// anything was removed. Total — text at or under the limit comes back
/// unchanged.
fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push('…');
            out
        }
        None => text.to_string(),
    }
}
