use tracing::trace;

use crate::engine::SearchIndex;
use crate::result::SearchResult;

/// Observable lifecycle state of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The search surface is not showing. No query, no results.
    Closed,

    /// Open with an empty (or whitespace-only) query. Distinct from a
    /// query that found nothing — that is `Querying` with empty results.
    OpenEmpty,

    /// Open with a non-empty query; `results()` is current for `query()`.
    Querying,
}

/// The live-query session around an immutable [`SearchIndex`].
///
/// Owns the `(open, query, results)` triple as one explicit state object —
/// no globals. Every query mutation recomputes results synchronously before
/// either is observable, so the stored results always correspond to the
/// stored query string. Single-threaded by construction: `&mut self`
/// transitions mean no two aggregation passes can ever be outstanding.
///
/// # Example
///
/// ```rust
/// use sitesearch::{PageIndex, SearchSession, SessionState, StaticPage};
///
/// let index = sitesearch::index()
///     .collection(PageIndex::new(vec![StaticPage {
///         title: "FAQ".into(),
///         path: "/faq".into(),
///     }]))
///     .build()
///     .unwrap();
///
/// let mut session = SearchSession::new(index);
/// session.open();
/// session.set_query("faq");
/// assert_eq!(session.state(), SessionState::Querying);
///
/// let path = session.select(0);
/// assert_eq!(path.as_deref(), Some("/faq"));
/// assert_eq!(session.state(), SessionState::Closed);
/// ```
pub struct SearchSession {
    index: SearchIndex,
    open: bool,
    query: String,
    results: Vec<SearchResult>,
}

impl SearchSession {
    /// Wrap an index in a closed session.
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            open: false,
            query: String::new(),
            results: Vec::new(),
        }
    }

    // ── Observers ─────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        if !self.open {
            SessionState::Closed
        } else if self.query.trim().is_empty() {
            SessionState::OpenEmpty
        } else {
            SessionState::Querying
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current query string as the user typed it.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the current query. Always consistent with [`query()`](Self::query).
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// The index backing this session.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Open the search surface with a fresh, empty query.
    pub fn open(&mut self) {
        trace!("search session opened");
        self.open = true;
        self.query.clear();
        self.results.clear();
    }

    /// Close the search surface, clearing query and results
    /// unconditionally. Nothing survives into the next open.
    pub fn close(&mut self) {
        trace!("search session closed");
        self.open = false;
        self.query.clear();
        self.results.clear();
    }

    /// Replace the query and recompute results synchronously.
    ///
    /// Query and results are updated as a unit, so an observer never sees
    /// stale results against a newer query. A no-op while closed — query
    /// transitions are only defined for open sessions.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.open {
            return;
        }
        let query = query.into();
        self.results = self.index.query(&query);
        self.query = query;
    }

    /// Take the navigation path of result `idx` and close the session.
    ///
    /// An out-of-range index returns `None` and leaves the session as it
    /// was.
    pub fn select(&mut self, idx: usize) -> Option<String> {
        let path = self.results.get(idx).map(|hit| hit.path.clone())?;
        self.close();
        Some(path)
    }
}
