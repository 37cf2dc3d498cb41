//! Author routes: /authors and /authors/:name.

use crate::handlers::{list_authors, list_books_by_author};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn author_routes(state: AppState) -> Router {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/authors/:name", get(list_books_by_author))
        .with_state(state)
}
