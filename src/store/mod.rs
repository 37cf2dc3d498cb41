//! Data access for the `book` table.
//!
//! Handlers only see the [`BookStore`] trait; [`MySqlBookStore`] is the
//! production implementation.

mod mysql;

pub use mysql::MySqlBookStore;

use crate::error::StoreError;
use crate::model::Book;
use async_trait::async_trait;

/// Persistence operations behind the HTTP routes. Implementations must be safe
/// to call from many requests at once; callers add no locking of their own.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Every book, in store iteration order.
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    /// Point lookup by ISBN. Zero rows is [`StoreError::NotFound`].
    async fn get_book(&self, isbn: &str) -> Result<Book, StoreError>;

    /// Inserts `book` and returns the store-assigned insert id. Duplicate ISBNs
    /// are rejected by the table's key, not checked beforehand.
    async fn add_book(&self, book: &Book) -> Result<u64, StoreError>;

    /// Deletes by ISBN and returns the number of affected rows, which may be zero.
    async fn delete_book(&self, isbn: &str) -> Result<u64, StoreError>;

    /// Distinct author names across all books.
    async fn list_authors(&self) -> Result<Vec<String>, StoreError>;

    /// Books whose author matches `name` exactly under the store's collation.
    async fn list_books_by_author(&self, name: &str) -> Result<Vec<Book>, StoreError>;

    /// Liveness check against the store.
    async fn ping(&self) -> Result<(), StoreError>;
}
