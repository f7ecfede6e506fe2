//! Book model

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book document as stored in the `books` collection
///
/// Field names follow the collection's snake_case convention; the storage
/// engine owns `_id` generation and the canonical copy of every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// Book as exposed by the REST API
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier assigned by the storage engine (24 hex characters)
    #[schema(example = "65f0c4e2a5b4c3d2e1f00001")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            author: doc.author,
            published_year: doc.published_year,
            pages: doc.pages,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

/// Create book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    pub published_year: Option<i32>,
    pub pages: Option<i32>,
}

impl CreateBook {
    /// Strip leading/trailing whitespace from string fields
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.author = self.author.trim().to_string();
    }
}

/// Update book request (partial or full field replacement)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "author cannot be empty"))]
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub pages: Option<i32>,
}

impl UpdateBook {
    /// Strip leading/trailing whitespace from provided string fields
    pub fn normalize(&mut self) {
        if let Some(title) = self.title.as_mut() {
            *title = title.trim().to_string();
        }
        if let Some(author) = self.author.as_mut() {
            *author = author.trim().to_string();
        }
    }
}
