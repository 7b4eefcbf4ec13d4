pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookPayload, BookSummaryDto};
use crate::books::repository::BookFilter;
use crate::core::library::ShelfResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // validates and stores a new book, returning its id
    async fn add_book(&self, payload: &BookPayload) -> ShelfResult<String>;
    async fn list_books(&self, filter: &BookFilter) -> ShelfResult<Vec<BookSummaryDto>>;
    async fn find_book_by_id(&self, id: &str) -> ShelfResult<BookDto>;
    async fn update_book(&self, id: &str, payload: &BookPayload) -> ShelfResult<()>;
    async fn remove_book(&self, id: &str) -> ShelfResult<()>;
}
