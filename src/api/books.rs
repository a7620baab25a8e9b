//! Book endpoints

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{BookView, CreateBook, UpdateBook},
    AppState,
};

use super::{pages, BookId, Payload};

/// Where successful HTML form submissions land
const BOOKS_PAGE: &str = "/books/";

/// All books, JSON view
#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookView>,
}

/// Snapshot used to pre-fill the edit form
#[derive(Serialize, ToSchema)]
pub struct BookEditData {
    pub success: bool,
    pub book: BookView,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetails {
    pub book: BookView,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Book route table
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/", get(list_books))
        .route("/books/json", get(list_books_json))
        .route("/books/create", post(create_book))
        .route("/books/:id/edit-data", get(get_book_for_edit))
        .route("/books/:id/edit", post(edit_book))
        .route("/books/:id/delete", post(delete_book))
        .route("/books/details/:name", get(get_book_details))
}

/// HTML list of books
pub async fn list_books(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    tracing::debug!("Books page accessed");
    Ok(Html(pages::render_books(&books)))
}

/// List books as JSON
#[utoipa::path(
    get,
    path = "/books/json",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BookList)
    )
)]
pub async fn list_books_json(State(state): State<AppState>) -> AppResult<Json<BookList>> {
    let books = state.services.books.list().await?;
    Ok(Json(BookList {
        books: books.iter().map(BookView::from).collect(),
    }))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books/create",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 303, description = "Book created, redirect to the book list"),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 500, description = "Book could not be stored", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Payload(data): Payload<CreateBook>,
) -> AppResult<Redirect> {
    state.services.books.create(data).await?;
    Ok(Redirect::to(BOOKS_PAGE))
}

/// Current values of a book, for editing
#[utoipa::path(
    get,
    path = "/books/{id}/edit-data",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book data", body = BookEditData),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book_for_edit(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<BookEditData>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(BookEditData {
        success: true,
        book: BookView::from(&book),
    }))
}

/// Partially update a book
#[utoipa::path(
    post,
    path = "/books/{id}/edit",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Book could not be stored", body = ErrorResponse)
    )
)]
pub async fn edit_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    Payload(patch): Payload<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(id, patch).await?;
    Ok(Json(MessageResponse {
        message: "Book updated successfully".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    post,
    path = "/books/{id}/delete",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 303, description = "Book deleted, redirect to the book list"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Redirect> {
    state.services.books.delete(id).await?;
    Ok(Redirect::to(BOOKS_PAGE))
}

/// Look a book up by name
#[utoipa::path(
    get,
    path = "/books/details/{name}",
    tag = "books",
    params(("name" = String, Path, description = "Exact book name")),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<BookDetails>> {
    let book = state.services.books.find_by_name(&name).await?;
    Ok(Json(BookDetails {
        book: BookView::from(&book),
    }))
}
