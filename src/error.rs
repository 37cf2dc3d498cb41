//! Typed errors and HTTP mapping.

use crate::response::{IndentedJson, MessageBody};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported by a [`BookStore`](crate::store::BookStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connect: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("get_book {isbn}: no such book")]
    NotFound { isbn: String },
    #[error("{op}: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Wraps a driver error with the name of the operation that produced it.
    pub fn query(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StoreError::Query { op, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// True when the store rejected a write because of a unique key (duplicate ISBN).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Query {
                source: sqlx::Error::Database(db),
                ..
            } => db.is_unique_violation(),
            _ => false,
        }
    }
}

/// Error returned by handlers. Every variant renders as `{"message": ...}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody::new(self.to_string());
        (self.status(), IndentedJson(body)).into_response()
    }
}
