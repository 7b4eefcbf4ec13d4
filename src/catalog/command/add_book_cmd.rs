use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookPayload;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddBookCommandRequest {
    pub book: BookPayload,
}

impl AddBookCommandRequest {
    pub fn new(book: BookPayload) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandResponse {
    pub book_id: String,
}

impl AddBookCommandResponse {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
