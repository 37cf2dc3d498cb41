//! MySQL implementation of [`BookStore`] over a shared `sqlx` pool.

use super::BookStore;
use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::model::Book;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::mysql::{MySql, MySqlPool, MySqlPoolOptions};
use sqlx::Connection;

const SELECT_BOOKS: &str = "SELECT isbn, title, author, summary, pub_year FROM book";
const SELECT_BOOK_BY_ISBN: &str =
    "SELECT isbn, title, author, summary, pub_year FROM book WHERE isbn = ?";
const SELECT_BOOKS_BY_AUTHOR: &str =
    "SELECT isbn, title, author, summary, pub_year FROM book WHERE author = ?";
const SELECT_AUTHORS: &str = "SELECT DISTINCT author FROM book";
const INSERT_BOOK: &str =
    "INSERT INTO book (isbn, title, author, summary, pub_year) VALUES (?, ?, ?, ?, ?)";
const DELETE_BOOK: &str = "DELETE FROM book WHERE isbn = ?";

/// Owns the connection pool for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct MySqlBookStore {
    pool: MySqlPool,
}

impl MySqlBookStore {
    /// Opens the pool and pings the server once. Callers treat an error as fatal.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        tracing::debug!(address = %config.address(), database = %config.database, "connecting");
        let pool = MySqlPoolOptions::new()
            .connect_with(config.connect_options())
            .await
            .map_err(StoreError::Connect)?;
        let store = Self::from_pool(pool);
        store.ping_connection().await.map_err(StoreError::Connect)?;
        tracing::info!(address = %config.address(), database = %config.database, "connected");
        Ok(store)
    }

    /// Wraps an already configured pool without checking it.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn ping_connection(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    async fn fetch_books(
        &self,
        op: &'static str,
        sql: &'static str,
        author: Option<&str>,
    ) -> Result<Vec<Book>, StoreError> {
        tracing::debug!(sql = %sql, "query");
        let mut query = sqlx::query_as::<MySql, Book>(sql);
        if let Some(author) = author {
            query = query.bind(author);
        }
        let mut rows = query.fetch(&self.pool);
        let mut books = Vec::new();
        while let Some(book) = rows.try_next().await.map_err(StoreError::query(op))? {
            books.push(book);
        }
        Ok(books)
    }
}

#[async_trait]
impl BookStore for MySqlBookStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        self.fetch_books("list_books", SELECT_BOOKS, None).await
    }

    async fn get_book(&self, isbn: &str) -> Result<Book, StoreError> {
        tracing::debug!(sql = %SELECT_BOOK_BY_ISBN, isbn = %isbn, "query");
        sqlx::query_as::<MySql, Book>(SELECT_BOOK_BY_ISBN)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::query("get_book"))?
            .ok_or_else(|| StoreError::NotFound {
                isbn: isbn.to_string(),
            })
    }

    async fn add_book(&self, book: &Book) -> Result<u64, StoreError> {
        tracing::debug!(sql = %INSERT_BOOK, isbn = %book.isbn, "execute");
        let result = sqlx::query(INSERT_BOOK)
            .bind(&book.isbn)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.summary)
            .bind(book.pub_year)
            .execute(&self.pool)
            .await
            .map_err(StoreError::query("add_book"))?;
        Ok(result.last_insert_id())
    }

    async fn delete_book(&self, isbn: &str) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_BOOK, isbn = %isbn, "execute");
        let result = sqlx::query(DELETE_BOOK)
            .bind(isbn)
            .execute(&self.pool)
            .await
            .map_err(StoreError::query("delete_book"))?;
        Ok(result.rows_affected())
    }

    async fn list_authors(&self) -> Result<Vec<String>, StoreError> {
        tracing::debug!(sql = %SELECT_AUTHORS, "query");
        let mut rows = sqlx::query_scalar::<MySql, String>(SELECT_AUTHORS).fetch(&self.pool);
        let mut authors = Vec::new();
        while let Some(author) = rows
            .try_next()
            .await
            .map_err(StoreError::query("list_authors"))?
        {
            authors.push(author);
        }
        Ok(authors)
    }

    async fn list_books_by_author(&self, name: &str) -> Result<Vec<Book>, StoreError> {
        self.fetch_books("list_books_by_author", SELECT_BOOKS_BY_AUTHOR, Some(name))
            .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ping_connection().await.map_err(StoreError::query("ping"))
    }
}
