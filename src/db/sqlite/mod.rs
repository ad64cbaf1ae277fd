//! SQLite implementation of the database traits.

mod connection;
mod content;

#[cfg(test)]
mod content_test;

pub use connection::SqliteDatabase;
pub use content::SqliteContentRepository;
