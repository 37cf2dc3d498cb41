//! Extract a complete [`Book`] from a JSON request body.

use crate::error::ApiError;
use crate::model::Book;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

/// Reply for a body that is malformed, mistyped, or missing a field. Kept
/// word for word from the service this one replaces, since clients match on it.
pub const INVALID_BOOK_BODY: &str =
    "make sure to fill of required field as well as to use the correct type";

/// A request body that deserialized into a [`Book`] with every field present.
/// The body is decoded as JSON whatever its `Content-Type` says.
/// Rejections happen before any store call.
#[derive(Debug, Clone)]
pub struct BookPayload(pub Book);

#[async_trait]
impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "book body unreadable");
            ApiError::BadRequest(INVALID_BOOK_BODY)
        })?;
        let book: Book = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "book body rejected");
            ApiError::BadRequest(INVALID_BOOK_BODY)
        })?;
        if let Some(field) = book.missing_field() {
            tracing::debug!(field, "book body has an empty required field");
            return Err(ApiError::BadRequest(INVALID_BOOK_BODY));
        }
        Ok(BookPayload(book))
    }
}
