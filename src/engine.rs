use std::time::Instant;

use tracing::debug;

use crate::builder::SubstringMatcher;
use crate::result::SearchResult;
use crate::traits::{Collection, Matcher};

// ---------------------------------------------------------------------------
// SearchIndex
// ---------------------------------------------------------------------------

/// An immutable set of collections ready to answer queries.
///
/// Built once via [`IndexBuilder::build`](crate::IndexBuilder::build) and
/// queried for the rest of the process lifetime. Collections never change
/// after construction, so queries from any number of threads are safe and
/// two runs with the same query always produce identical output.
pub struct SearchIndex {
    collections: Vec<Box<dyn Collection>>,
    limit: usize,
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("collections", &self.collections.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl SearchIndex {
    pub(crate) fn new(collections: Vec<Box<dyn Collection>>, limit: usize) -> Self {
        Self { collections, limit }
    }

    /// Run one query execution and return the capped, ordered hit list.
    ///
    /// The raw query is trimmed and lower-cased once, then matched as a
    /// literal substring against each collection's declared field values.
    /// Hits appear in collection registration order, preserving each
    /// collection's internal record order, and the combined list is capped
    /// at the configured limit.
    ///
    /// An empty or whitespace-only query returns `[]` without touching any
    /// collection — an empty query must never surface unrelated content.
    pub fn query(&self, raw: &str) -> Vec<SearchResult> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.run(&SubstringMatcher::new(needle))
    }

    /// Run the same pass under a caller-supplied matcher.
    ///
    /// Normalization and the empty-query short-circuit are the caller's
    /// concern here — the matcher sees each record's field values verbatim.
    pub fn query_with(&self, matcher: &dyn Matcher) -> Vec<SearchResult> {
        self.run(matcher)
    }

    /// The result cap this index applies to every query execution.
    pub fn limit(&self) -> usize {
        self.limit
    }

    // ── The aggregation pass ──────────────────────────────────────────────

    /// Filter, project, merge, truncate — one synchronous pass over all
    /// collections in priority order. Stops scanning as soon as the cap is
    /// reached.
    fn run(&self, matcher: &dyn Matcher) -> Vec<SearchResult> {
        let start = Instant::now();
        let mut hits = Vec::new();
        let mut scanned = 0usize;

        'collections: for collection in &self.collections {
            for idx in 0..collection.len() {
                scanned += 1;
                if !matcher.is_match(&collection.field_values(idx)) {
                    continue;
                }
                hits.push(collection.project(idx));
                if hits.len() >= self.limit {
                    break 'collections;
                }
            }
        }

        debug!(
            scanned,
            matches = hits.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "query pass complete"
        );

        hits
    }
}
