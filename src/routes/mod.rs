//! Route registration.

mod authors;
mod books;
mod common;

pub use authors::author_routes;
pub use books::book_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// The full service: catalog routes plus health/readiness, with request
/// logging and panic recovery.
pub fn catalog_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state.clone()))
        .merge(author_routes(state))
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
