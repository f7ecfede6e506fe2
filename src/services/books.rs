//! Books service

use bson::oid::ObjectId;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book
    pub async fn create(&self, mut data: CreateBook) -> AppResult<Book> {
        data.normalize();
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.create(&data).await
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by id
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let id = parse_id(id)?;
        self.repository.books.find_by_id(id).await
    }

    /// Update a book, replacing only the provided fields
    pub async fn update(&self, id: &str, mut data: UpdateBook) -> AppResult<Book> {
        let id = parse_id(id)?;

        data.normalize();
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.update(id, &data).await
    }

    /// Delete a book permanently
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;
        self.repository.books.delete(id).await
    }
}

/// Parse a path identifier into an ObjectId
///
/// A non-canonical identifier is rejected with a 400 rather than treated as
/// an absent document.
fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", id)))
}
