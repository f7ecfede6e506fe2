//! Repository layer for database operations

pub mod books;

use mongodb::Database;

/// Main repository struct holding per-collection repositories
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository backed by the given database handle
    pub fn new(database: &Database) -> Self {
        Self {
            books: books::BooksRepository::new(database),
        }
    }
}
