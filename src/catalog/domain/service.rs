use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookPayload, BookSummaryDto};
use crate::books::repository::{BookFilter, BookRepository};
use crate::catalog::domain::CatalogService;
use crate::core::library::{ShelfError, ShelfResult};
use crate::utils::clock::Clock;
use crate::utils::ids::IdGenerator;

// attempts at drawing an unused id before add_book gives up
const MAX_ID_ATTEMPTS: usize = 5;

pub const ADD_FAILED: &str = "Failed to add book";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const UPDATE_NOT_FOUND: &str = "Failed to update book. Id not found";
pub const DELETE_NOT_FOUND: &str = "Failed to delete book. Id not found";

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    clock: Arc<dyn Clock>,
    id_generator: Box<dyn IdGenerator>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Arc<dyn BookRepository>,
               clock: Arc<dyn Clock>,
               id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            book_repository,
            clock,
            id_generator,
        }
    }

    async fn insert_with_fresh_id(&self, book: &mut BookEntity) -> ShelfResult<()> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            book.id = self.id_generator.next_id();
            match self.book_repository.create(book).await {
                Ok(_) => return Ok(()),
                Err(ShelfError::DuplicateKey { message }) => {
                    tracing::warn!("id collision on attempt {}: {}", attempt, message);
                }
                Err(err) => return Err(err),
            }
        }
        Err(ShelfError::consistency(ADD_FAILED))
    }
}

// Repository lookups report their own not-found text; callers replace it with
// the message meant for the client.
fn replace_not_found(err: ShelfError, message: &str) -> ShelfError {
    match err {
        ShelfError::NotFound { .. } => ShelfError::not_found(message),
        other => other,
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, payload: &BookPayload) -> ShelfResult<String> {
        let details = payload.validate("add")?;
        let mut book = BookEntity::new("", &details, self.clock.now());
        self.insert_with_fresh_id(&mut book).await?;

        let matches = self.book_repository.count_by_id(book.id.as_str()).await?;
        if matches != 1 {
            tracing::error!("book {} not stored exactly once after insert ({} matches)", book.id, matches);
            return Err(ShelfError::consistency(ADD_FAILED));
        }
        tracing::info!("added book {} {:?}", book.id, book.name);
        Ok(book.id)
    }

    async fn list_books(&self, filter: &BookFilter) -> ShelfResult<Vec<BookSummaryDto>> {
        let books = self.book_repository.query(filter).await?;
        tracing::debug!("listing {} books for {:?}", books.len(), filter);
        Ok(books.iter().map(BookSummaryDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> ShelfResult<BookDto> {
        self.book_repository.get(id).await
            .map(|b| BookDto::from(&b))
            .map_err(|err| replace_not_found(err, BOOK_NOT_FOUND))
    }

    async fn update_book(&self, id: &str, payload: &BookPayload) -> ShelfResult<()> {
        let details = payload.validate("update")?;
        let book = BookEntity::new(id, &details, self.clock.now());
        self.book_repository.update(&book).await
            .map_err(|err| replace_not_found(err, UPDATE_NOT_FOUND))?;
        tracing::info!("updated book {}", id);
        Ok(())
    }

    async fn remove_book(&self, id: &str) -> ShelfResult<()> {
        self.book_repository.delete(id).await
            .map_err(|err| replace_not_found(err, DELETE_NOT_FOUND))?;
        tracing::info!("removed book {}", id);
        Ok(())
    }
}
