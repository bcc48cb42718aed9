use crate::result::{Category, SearchResult};

/// A typed, immutable, in-memory sequence of content records.
///
/// Implement this to put any record shape behind the search contract —
/// the crate ships collections for the four site content types
/// ([`NewsCollection`](crate::NewsCollection),
/// [`TopicCollection`](crate::TopicCollection),
/// [`DirectoryCollection`](crate::DirectoryCollection),
/// [`PageIndex`](crate::PageIndex)), and callers can add their own.
///
/// # Object Safety
///
/// `Collection` is object-safe. The builder stores collections as
/// `Box<dyn Collection>`, so records are accessed by index
/// (`len()` / `field_values()` / `project()`) rather than through an
/// `impl Iterator` return type (which would not be object-safe).
///
/// # Thread Safety
///
/// `Send + Sync` are required — an index is immutable after construction,
/// so any number of concurrent read-only query executions are safe.
///
/// # Example
///
/// ```rust
/// use sitesearch::{Category, Collection, SearchResult};
///
/// struct GlossaryCollection(Vec<(String, String)>); // (term, definition)
///
/// impl Collection for GlossaryCollection {
///     fn category(&self) -> Category {
///         Category::Pages
///     }
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn field_values(&self, idx: usize) -> Vec<&str> {
///         let (term, definition) = &self.0[idx];
///         vec![term.as_str(), definition.as_str()]
///     }
///
///     fn project(&self, idx: usize) -> SearchResult {
///         let (term, definition) = &self.0[idx];
///         SearchResult {
///             title: term.clone(),
///             description: definition.clone(),
///             path: "/glossario".into(),
///             category: self.category(),
///         }
///     }
/// }
/// ```
pub trait Collection: Send + Sync {
    /// The category attached to every result this collection produces.
    ///
    /// One category maps to one collection — the builder rejects duplicate
    /// registrations at [`build()`](crate::IndexBuilder::build).
    fn category(&self) -> Category;

    /// Number of records in this collection.
    fn len(&self) -> usize;

    /// Whether this collection holds no records. An empty collection simply
    /// contributes zero matches — it is never an error.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of the declared searchable fields for record `idx`.
    ///
    /// Absent optional fields must be presented as empty strings, which
    /// never match a non-empty needle. `idx` is always in `0..len()`.
    fn field_values(&self, idx: usize) -> Vec<&str>;

    /// Project record `idx` into the uniform result shape, attaching this
    /// collection's category and, where records carry no path of their own,
    /// the collection's shared page path.
    ///
    /// Pure and total: never fails, never panics on well-formed content.
    /// `idx` is always in `0..len()`.
    fn project(&self, idx: usize) -> SearchResult;
}

/// Determines whether a record's searchable field values match.
///
/// The engine calls this once per record with the values returned by
/// [`Collection::field_values`]. The built-in matcher is case-insensitive
/// substring containment; implement this for anything else — prefix
/// matching, regex, per-field weighting.
///
/// # Thread Safety
///
/// `Send + Sync` are required — a matcher is shared by every collection in
/// the pass and an index may be queried from multiple threads.
///
/// # Example
///
/// ```rust
/// use sitesearch::Matcher;
///
/// struct PrefixMatcher(String);
///
/// impl Matcher for PrefixMatcher {
///     fn is_match(&self, fields: &[&str]) -> bool {
///         fields.iter().any(|f| f.to_lowercase().starts_with(&self.0))
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if a record with these field values should be
    /// included in results.
    fn is_match(&self, fields: &[&str]) -> bool;
}
