//! HTTP handlers for books and authors.

pub mod authors;
pub mod books;

pub use authors::*;
pub use books::*;
