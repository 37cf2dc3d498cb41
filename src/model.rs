//! Catalog records as stored in the `book` table and exchanged over HTTP.

use serde::{Deserialize, Serialize};

/// One row of the `book` table. `isbn` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub pub_year: i32,
}

impl Book {
    /// Required-field check applied to request bodies: every text field must be
    /// non-empty and `pub_year` must be non-zero. Returns the first offending field.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("isbn", self.isbn.is_empty()),
            ("title", self.title.is_empty()),
            ("author", self.author.is_empty()),
            ("summary", self.summary.is_empty()),
            ("pub_year", self.pub_year == 0),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}
