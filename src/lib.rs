//! Library catalog: a small REST service over a MySQL `book` table.
//!
//! [`store`] holds the data access layer, [`handlers`] and [`routes`] the HTTP
//! layer. The binary in `server/` wires them together.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{CatalogConfig, DatabaseConfig, ServerConfig};
pub use error::{ApiError, StoreError};
pub use model::Book;
pub use response::{IndentedJson, MessageBody};
pub use routes::{author_routes, book_routes, catalog_router, common_routes};
pub use state::AppState;
pub use store::{BookStore, MySqlBookStore};
