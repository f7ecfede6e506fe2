//! Books repository

use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::{options::ReturnDocument, Collection, Database};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDocument, CreateBook, UpdateBook},
};

const COLLECTION: &str = "books";

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<BookDocument>,
}

impl BooksRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// Insert a new book document
    ///
    /// Caller is expected to have normalized and validated `data`.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let now = bson::DateTime::now();
        let document = BookDocument {
            id: ObjectId::new(),
            title: data.title.clone(),
            author: data.author.clone(),
            published_year: data.published_year,
            pages: data.pages,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut books = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            books.push(document.into());
        }

        Ok(books)
    }

    /// Find a book by id
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Book> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        Ok(document.into())
    }

    /// Apply a partial update to a book and return the updated document
    pub async fn update(&self, id: ObjectId, data: &UpdateBook) -> AppResult<Book> {
        let document = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": build_update(data) })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        Ok(document.into())
    }

    /// Delete a book permanently
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        self.collection
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        Ok(())
    }
}

/// Build the `$set` document for a partial update
///
/// Absent fields are left untouched; `updated_at` is always refreshed.
fn build_update(data: &UpdateBook) -> Document {
    let mut set = doc! { "updated_at": bson::DateTime::now() };

    if let Some(title) = data.title.as_deref() {
        set.insert("title", title);
    }
    if let Some(author) = data.author.as_deref() {
        set.insert("author", author);
    }
    if let Some(published_year) = data.published_year {
        set.insert("published_year", published_year);
    }
    if let Some(pages) = data.pages {
        set.insert("pages", pages);
    }

    set
}
