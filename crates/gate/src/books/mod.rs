//! Book record lookup
//!
//! The gate only ever asks one question of the catalog: does exactly one book
//! with this slug exist (optionally with its enablement flag set)?

mod memory;
mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

use futures::future::BoxFuture;
use hostgate_shared::LookupError;

/// Existence check against the book catalog
pub trait BookLookup: Send + Sync {
    /// True iff exactly one book matches `slug` (and has its flag set when
    /// `require_flag` is true). Zero or several matches are both `false`.
    fn exists<'a>(&'a self, slug: &'a str, require_flag: bool)
        -> BoxFuture<'a, Result<bool, LookupError>>;
}
