//! # sitesearch
//!
//! In-process multi-collection site search — typed collections, one capped
//! result list.
//!
//! sitesearch unifies independently-shaped content collections (news items,
//! research topics, a personnel directory, a static page index) under a
//! single query contract: case-insensitive substring matching over each
//! collection's declared fields, projection into a uniform
//! [`SearchResult`], and one merged list in fixed priority order, capped at
//! [`MAX_RESULTS`]. It owns the aggregation pass, the contracts
//! ([`Collection`], [`Matcher`]), the error type, and the builder API. It
//! does **not** own rendering, routing, or localization — those belong to
//! the caller, which consumes the result list and navigates to a hit's
//! `path` on selection.
//!
//! # Quick Start
//!
//! ```rust
//! use sitesearch::{NewsCollection, NewsItem, PageIndex, StaticPage};
//!
//! let index = sitesearch::index()
//!     .collection(NewsCollection::new(vec![NewsItem {
//!         title: "Fórum Permanente CP2B".into(),
//!         description: "Primeira edição do fórum permanente de biogás.".into(),
//!         path: "/noticias/forum-permanente".into(),
//!     }]))
//!     .collection(PageIndex::new(vec![StaticPage {
//!         title: "FAQ".into(),
//!         path: "/faq".into(),
//!     }]))
//!     .build()
//!     .unwrap();
//!
//! let hits = index.query("faq");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].path, "/faq");
//!
//! // Empty and whitespace-only queries never match everything.
//! assert!(index.query("   ").is_empty());
//! ```
//!
//! # Live sessions
//!
//! [`SearchSession`] owns the open/query/results lifecycle for a search
//! surface: open resets the query, every keystroke recomputes results
//! synchronously, close clears everything.
//!
//! # Custom Collections and Matchers
//!
//! Implement [`Collection`] to search any record shape alongside the
//! built-in site collections, and [`Matcher`] to replace the substring
//! predicate — see the trait docs for examples.

#![forbid(unsafe_code)]

mod builder;
mod content;
mod engine;
mod error;
mod result;
mod session;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{IndexBuilder, MAX_RESULTS};
pub use content::{
    DirectoryCollection, DirectoryEntry, NewsCollection, NewsItem, PageIndex, ResearchTopic,
    StaticPage, TopicCollection, DESCRIPTION_LIMIT,
};
pub use engine::SearchIndex;
pub use error::SearchError;
pub use result::{Category, SearchResult};
pub use session::{SearchSession, SessionState};
pub use traits::{Collection, Matcher};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`IndexBuilder`] to assemble a [`SearchIndex`].
///
/// # Example
///
/// ```rust
/// use sitesearch::{StaticPage, PageIndex};
///
/// let index = sitesearch::index()
///     .collection(PageIndex::new(vec![
///         StaticPage { title: "FAQ".into(), path: "/faq".into() },
///         StaticPage { title: "Sobre".into(), path: "/sobre".into() },
///     ]))
///     .build()
///     .unwrap();
///
/// assert_eq!(index.query("sobre").len(), 1);
/// assert_eq!(index.query("zzz").len(), 0);
/// ```
pub fn index() -> IndexBuilder {
    IndexBuilder::default()
}
