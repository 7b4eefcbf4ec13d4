use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RemoveBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookPayload;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = factory::create_catalog_service(&Configuration::default(), create_book_repository());
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new(BookPayload::new("test book", 10, 1)))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(res.book_id.to_string())).await.expect("should remove book");
        let err = remove_cmd.execute(RemoveBookCommandRequest::new(res.book_id)).await.expect_err("should not remove twice");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
