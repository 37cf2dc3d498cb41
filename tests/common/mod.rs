//! Test doubles for [`BookStore`] and request helpers shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use library_catalog::{catalog_router, AppState, Book, BookStore, StoreError};
use serde_json::Value;
use sqlx::error::{DatabaseError, ErrorKind};
use std::borrow::Cow;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Driver error reported for a primary-key collision, as MySQL's 1062.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DuplicateKey(String);

impl DatabaseError for DuplicateKey {
    fn message(&self) -> &str {
        &self.0
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23000"))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

/// Keeps books in insertion order and rejects duplicate ISBNs like a primary key would.
#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.snapshot())
    }

    async fn get_book(&self, isbn: &str) -> Result<Book, StoreError> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                isbn: isbn.to_string(),
            })
    }

    async fn add_book(&self, book: &Book) -> Result<u64, StoreError> {
        let mut books = self.books.lock().unwrap();
        if books.iter().any(|b| b.isbn == book.isbn) {
            let duplicate = DuplicateKey(format!(
                "Duplicate entry '{}' for key 'PRIMARY'",
                book.isbn
            ));
            return Err(StoreError::query("add_book")(sqlx::Error::Database(
                Box::new(duplicate),
            )));
        }
        books.push(book.clone());
        Ok(0)
    }

    async fn delete_book(&self, isbn: &str) -> Result<u64, StoreError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.isbn != isbn);
        Ok((before - books.len()) as u64)
    }

    async fn list_authors(&self) -> Result<Vec<String>, StoreError> {
        let mut authors: Vec<String> = Vec::new();
        for book in self.books.lock().unwrap().iter() {
            if !authors.contains(&book.author) {
                authors.push(book.author.clone());
            }
        }
        Ok(authors)
    }

    async fn list_books_by_author(&self, name: &str) -> Result<Vec<Book>, StoreError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|b| b.author == name)
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Every call fails as if the database had gone away.
pub struct FailingStore;

fn unavailable(op: &'static str) -> StoreError {
    StoreError::query(op)(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl BookStore for FailingStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        Err(unavailable("list_books"))
    }

    async fn get_book(&self, _isbn: &str) -> Result<Book, StoreError> {
        Err(unavailable("get_book"))
    }

    async fn add_book(&self, _book: &Book) -> Result<u64, StoreError> {
        Err(unavailable("add_book"))
    }

    async fn delete_book(&self, _isbn: &str) -> Result<u64, StoreError> {
        Err(unavailable("delete_book"))
    }

    async fn list_authors(&self) -> Result<Vec<String>, StoreError> {
        Err(unavailable("list_authors"))
    }

    async fn list_books_by_author(&self, _name: &str) -> Result<Vec<Book>, StoreError> {
        Err(unavailable("list_books_by_author"))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable("ping"))
    }
}

pub fn book(isbn: &str, title: &str, author: &str, pub_year: i32) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        summary: format!("About {}", title),
        pub_year,
    }
}

pub fn app(store: Arc<dyn BookStore>) -> Router {
    catalog_router(AppState::new(store))
}

/// Sends one request with a JSON content type; the body is `Value::Null` when
/// the response has none.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let content_type = body.map(|_| "application/json");
    send_as(app, method, uri, content_type, body).await
}

/// Like [`send`], with an explicit `Content-Type` (or none at all).
pub async fn send_as(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let body = match body {
        Some(raw) => Body::from(raw.to_string()),
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
