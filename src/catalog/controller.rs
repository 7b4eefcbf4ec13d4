use axum::{
    body::{Bytes, HttpBody},
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    BoxError,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, Envelope, json_to_server_error, ServerResponse};

/// Builds the book routes for any request body, so the same router can be
/// served by hyper locally and by the Lambda runtime.
pub fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> ServerResponse<AddBookCommandResponse> {
    let req: AddBookCommandRequest = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(Envelope::success(Some("Book added successfully"), Some(res)))))
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>) -> ServerResponse<ListBooksCommandResponse> {
    let req = ListBooksCommandRequest::from_pairs(pairs);
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::OK, Json(Envelope::success(None, Some(res)))))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> ServerResponse<GetBookCommandResponse> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::OK, Json(Envelope::success(None, Some(res)))))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Bytes) -> ServerResponse<()> {
    let book = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest { book_id, book };
    let _ = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::OK, Json(Envelope::success(Some("Book updated successfully"), None))))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> ServerResponse<()> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::OK, Json(Envelope::success(Some("Book deleted successfully"), None))))
}
