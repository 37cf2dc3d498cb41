//! Book routes: /books and /books/:isbn.

use crate::handlers::{add_book, delete_book, get_book, list_books};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:isbn", get(get_book).delete(delete_book))
        .with_state(state)
}
