use thiserror::Error;

use crate::result::Category;

/// Configuration defects surfaced by [`IndexBuilder::build`](crate::IndexBuilder::build).
///
/// The query path itself is total — matching and projection never fail, an
/// empty collection contributes zero matches, and absent fields project as
/// empty strings. The only errors this crate knows about are integration
/// mistakes caught once, at index construction.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Two collections registered for the same category. A collection
    /// brings its category, priority slot, and searchable-field list as
    /// one unit; one category maps to exactly one collection.
    #[error("duplicate collection for category `{0}`")]
    DuplicateCategory(Category),

    /// Result cap of zero — an index that can never return anything.
    #[error("result limit must be at least 1")]
    InvalidLimit,
}

impl SearchError {
    /// The category this error concerns, if applicable.
    /// Callers use this to name the offending collection without pattern
    /// matching on variants.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::DuplicateCategory(c) => Some(*c),
            Self::InvalidLimit => None,
        }
    }
}
