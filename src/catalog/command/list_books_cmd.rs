use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookSummaryDto;
use crate::books::repository::BookFilter;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Raw query-string values; see BookFilter::from_query for how they are read.
#[derive(Debug, Default, PartialEq)]
pub struct ListBooksCommandRequest {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            reading: reading.map(str::to_string),
            finished: finished.map(str::to_string),
        }
    }

    /// Collects the filter keys from decoded query pairs. A repeated key keeps
    /// its last value and unknown keys are skipped.
    pub fn from_pairs<I>(pairs: I) -> Self
        where I: IntoIterator<Item=(String, String)> {
        let mut req = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => req.name = Some(value),
                "reading" => req.reading = Some(value),
                "finished" => req.finished = Some(value),
                _ => tracing::debug!("ignoring query key {}", key),
            }
        }
        req
    }

    pub fn build_filter(&self) -> BookFilter {
        BookFilter::from_query(self.name.as_deref(), self.reading.as_deref(), self.finished.as_deref())
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookSummaryDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookSummaryDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(&req.build_filter())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
