//! Book handlers: list, read, create, delete.

use crate::error::ApiError;
use crate::extractors::BookPayload;
use crate::model::Book;
use crate::response::IndentedJson;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub const NO_BOOKS_STORED: &str = "no books are stored";
pub const RETRIEVAL_FAILED: &str = "Error retrieving data";
pub const NO_BOOK_WITH_ISBN: &str = "There is no book with this ISBN";
pub const DUPLICATE_ENTRY: &str = "Duplicate entry";
pub const STORE_REJECTED: &str = "Could not store the book";
pub const NO_ENTITY: &str = "No entity";

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<IndentedJson<Vec<Book>>, ApiError> {
    let books = state.store.list_books().await.map_err(|e| {
        tracing::error!(error = %e, "listing books failed");
        ApiError::Internal(RETRIEVAL_FAILED)
    })?;
    if books.is_empty() {
        return Err(ApiError::NotFound(NO_BOOKS_STORED));
    }
    Ok(IndentedJson(books))
}

/// GET /books/:isbn. Not-found and store failures both answer 404; only the log tells them apart.
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<IndentedJson<Book>, ApiError> {
    match state.store.get_book(&isbn).await {
        Ok(book) => Ok(IndentedJson(book)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(isbn = %isbn, "no such book");
            Err(ApiError::NotFound(NO_BOOK_WITH_ISBN))
        }
        Err(e) => {
            tracing::error!(isbn = %isbn, error = %e, "reading book failed");
            Err(ApiError::NotFound(NO_BOOK_WITH_ISBN))
        }
    }
}

/// POST /books. Echoes the accepted body.
pub async fn add_book(
    State(state): State<AppState>,
    BookPayload(book): BookPayload,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.add_book(&book).await {
        Ok(id) => {
            tracing::info!(isbn = %book.isbn, insert_id = id, "book added");
            Ok((StatusCode::CREATED, IndentedJson(book)))
        }
        Err(e) if e.is_unique_violation() => {
            tracing::warn!(isbn = %book.isbn, error = %e, "duplicate book rejected");
            Err(ApiError::BadRequest(DUPLICATE_ENTRY))
        }
        Err(e) => {
            tracing::error!(isbn = %book.isbn, error = %e, "adding book failed");
            Err(ApiError::BadRequest(STORE_REJECTED))
        }
    }
}

/// DELETE /books/:isbn. A missing ISBN still answers 204.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, ApiError> {
    let affected = state.store.delete_book(&isbn).await.map_err(|e| {
        tracing::error!(isbn = %isbn, error = %e, "deleting book failed");
        ApiError::BadRequest(NO_ENTITY)
    })?;
    tracing::info!(isbn = %isbn, affected, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
