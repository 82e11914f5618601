//! In-memory book lookup, for tests and local runs without a database

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use futures::future::BoxFuture;
use hostgate_shared::{Book, LookupError};

use super::BookLookup;

/// Thread-safe in-memory catalog
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
    lookups: AtomicUsize,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().collect()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, book: Book) -> Result<(), LookupError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| LookupError::Unavailable("book store lock poisoned".to_string()))?;
        books.push(book);
        Ok(())
    }

    /// Number of `exists` calls served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn count(&self, slug: &str, require_flag: bool) -> Result<usize, LookupError> {
        let books = self
            .books
            .read()
            .map_err(|_| LookupError::Unavailable("book store lock poisoned".to_string()))?;
        Ok(books.iter().filter(|b| b.matches(slug, require_flag)).count())
    }
}

impl BookLookup for MemoryBookStore {
    fn exists<'a>(
        &'a self,
        slug: &'a str,
        require_flag: bool,
    ) -> BoxFuture<'a, Result<bool, LookupError>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let result = self.count(slug, require_flag).map(|n| n == 1);
        Box::pin(async move { result })
    }
}
