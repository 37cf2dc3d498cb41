//! Author handlers. Authors are the distinct `author` values of stored books.

use crate::error::ApiError;
use crate::handlers::books::{NO_BOOKS_STORED, RETRIEVAL_FAILED};
use crate::model::Book;
use crate::response::IndentedJson;
use crate::state::AppState;
use axum::extract::{Path, State};

pub const NO_BOOKS_BY_AUTHOR: &str = "There are no books by this author";

/// GET /authors
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<IndentedJson<Vec<String>>, ApiError> {
    let authors = state.store.list_authors().await.map_err(|e| {
        tracing::error!(error = %e, "listing authors failed");
        ApiError::Internal(RETRIEVAL_FAILED)
    })?;
    if authors.is_empty() {
        return Err(ApiError::NotFound(NO_BOOKS_STORED));
    }
    Ok(IndentedJson(authors))
}

/// GET /authors/:name
pub async fn list_books_by_author(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<IndentedJson<Vec<Book>>, ApiError> {
    let books = state.store.list_books_by_author(&name).await.map_err(|e| {
        tracing::error!(author = %name, error = %e, "listing books by author failed");
        ApiError::NotFound(NO_BOOKS_BY_AUTHOR)
    })?;
    if books.is_empty() {
        return Err(ApiError::NotFound(NO_BOOKS_BY_AUTHOR));
    }
    Ok(IndentedJson(books))
}
