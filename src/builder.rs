use crate::engine::SearchIndex;
use crate::error::SearchError;
use crate::result::Category;
use crate::traits::{Collection, Matcher};

/// Default cap on results returned by one query execution — global across
/// all collections combined, not per collection.
pub const MAX_RESULTS: usize = 10;

// ---------------------------------------------------------------------------
// IndexBuilder
// ---------------------------------------------------------------------------

/// Entry point for assembling a [`SearchIndex`].
///
/// Created via [`sitesearch::index()`](crate::index). Register collections
/// with chained builder methods, then call [`build()`](IndexBuilder::build)
/// to validate the configuration and obtain an immutable index.
///
/// # Example
///
/// ```rust,ignore
/// let index = sitesearch::index()
///     .collection(news)
///     .collection(topics)
///     .collection(people)
///     .collection(pages)
///     .limit(10)
///     .build()?;
/// ```
pub struct IndexBuilder {
    collections: Vec<Box<dyn Collection>>,
    limit: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            limit: MAX_RESULTS,
        }
    }
}

impl IndexBuilder {
    // ── Collections ───────────────────────────────────────────────────────

    /// Register a collection.
    ///
    /// Any type implementing [`Collection`] is accepted — the built-in
    /// site collections or caller-defined ones. Registration order is the
    /// priority order: earlier collections fill the capped result list
    /// first. For the standard site layout that is news, research, team,
    /// pages.
    pub fn collection(mut self, c: impl Collection + 'static) -> Self {
        self.collections.push(Box::new(c));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Cap the number of results one query execution returns.
    ///
    /// Defaults to [`MAX_RESULTS`]. The cap applies to the combined list,
    /// not per collection.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = n;
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Validate the configuration and produce an immutable [`SearchIndex`].
    ///
    /// An index with no collections is valid — every query just returns
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DuplicateCategory`] if two collections were
    /// registered for the same category, and [`SearchError::InvalidLimit`]
    /// for a cap of zero.
    pub fn build(self) -> Result<SearchIndex, SearchError> {
        if self.limit == 0 {
            return Err(SearchError::InvalidLimit);
        }

        let mut seen: Vec<Category> = Vec::with_capacity(self.collections.len());
        for collection in &self.collections {
            let category = collection.category();
            if seen.contains(&category) {
                return Err(SearchError::DuplicateCategory(category));
            }
            seen.push(category);
        }

        Ok(SearchIndex::new(self.collections, self.limit))
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers (sitesearch ships these as conveniences)
// ---------------------------------------------------------------------------

/// Matches records where any field's lower-cased value contains the needle.
///
/// Literal substring containment — `"cp2"` matches `"CP2B"`. No stemming,
/// no diacritic folding, no tokenization.
pub(crate) struct SubstringMatcher {
    needle: String,
}

impl SubstringMatcher {
    /// `needle` must already be trimmed and lower-cased; the engine
    /// normalizes once per query, not once per record.
    pub(crate) fn new(needle: String) -> Self {
        Self { needle }
    }
}

impl Matcher for SubstringMatcher {
    fn is_match(&self, fields: &[&str]) -> bool {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(self.needle.as_str()))
    }
}
