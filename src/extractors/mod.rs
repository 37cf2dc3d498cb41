//! Request extractors.

mod book;

pub use book::{BookPayload, INVALID_BOOK_BODY};
