use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookPayload;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub book: BookPayload,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, book: BookPayload) -> Self {
        Self {
            book_id: book_id.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateBookCommandResponse {}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for UpdateBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.book).await
            .map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookPayload;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::default(), create_book_repository());
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new(BookPayload::new("test book", 100, 10)))
            .await.expect("should add book");
        let req = UpdateBookCommandRequest::new(res.book_id.as_str(), BookPayload::new("new title", 100, 100));
        let _ = update_cmd.execute(req).await.expect("should update book");

        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book_id)).await.expect("should get book");
        assert_eq!("new title", loaded.book.name.as_str());
        assert!(loaded.book.finished);
        assert!(loaded.book.updated_at >= loaded.book.inserted_at);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_book() {
        let svc = factory::create_catalog_service(&Configuration::default(), create_book_repository());
        let err = UpdateBookCommand::new(svc)
            .execute(UpdateBookCommandRequest::new("nonexistent", BookPayload::new("title", 1, 1)))
            .await.expect_err("should not update book");
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert_eq!("Failed to update book. Id not found", err.message());
    }
}
