pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::{parse_flag, ShelfResult};
use crate::core::repository::Repository;

// BookFilter narrows a listing; every present criterion must match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    // Builds a filter from raw query values. An empty name and any flag that
    // is not a recognized boolean leave that criterion off.
    pub fn from_query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            reading: reading.and_then(|r| {
                let flag = parse_flag(r);
                if flag.is_none() {
                    tracing::debug!("ignoring unrecognized reading filter {:?}", r);
                }
                flag
            }),
            finished: finished.and_then(|f| {
                let flag = parse_flag(f);
                if flag.is_none() {
                    tracing::debug!("ignoring unrecognized finished filter {:?}", f);
                }
                flag
            }),
        }
    }

    pub fn matches<B: Book>(&self, book: &B) -> bool {
        if let Some(ref name) = self.name {
            if !book.title().to_lowercase().contains(name.to_lowercase().as_str()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.is_reading() != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.is_finished() != finished {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn query(&self, filter: &BookFilter) -> ShelfResult<Vec<BookEntity>>;

    // number of stored books carrying exactly this id
    async fn count_by_id(&self, id: &str) -> ShelfResult<usize>;
}
