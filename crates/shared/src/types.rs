//! Shared record types

/// Table holding the book catalog
pub const BOOKS_TABLE: &str = "scalar_db_books";

/// A book in the catalog. Its slug doubles as the subdomain label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub slug: String,
    /// Enablement flag consulted by flag-aware subdomain validation
    pub display_in_index: bool,
}

impl Book {
    pub fn new(slug: impl Into<String>, display_in_index: bool) -> Self {
        Self {
            slug: slug.into(),
            display_in_index,
        }
    }

    /// Whether this book satisfies a lookup for `slug`, optionally requiring the flag
    pub fn matches(&self, slug: &str, require_flag: bool) -> bool {
        self.slug == slug && (!require_flag || self.display_in_index)
    }
}
