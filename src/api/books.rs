//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed book ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(&id).await?;
    Ok(Json(book))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Malformed book ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
