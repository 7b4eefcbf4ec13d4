use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::ShelfError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            catalog: factory::create_catalog_service(config, book_repository),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Fail,
}

// Envelope is the JSON body of every response
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: Option<&str>, data: Option<T>) -> Self {
        Envelope {
            status: EnvelopeStatus::Success,
            message: message.map(str::to_string),
            data,
        }
    }

    pub fn fail(message: &str) -> Self {
        Envelope {
            status: EnvelopeStatus::Fail,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

pub type ServerError = (StatusCode, Json<Envelope<()>>);

pub type ServerResponse<T> = Result<(StatusCode, Json<Envelope<T>>), ServerError>;

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    tracing::warn!("rejecting request payload: {}", err);
    ServerError::from(CommandError::from(ShelfError::from(err)))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let code = match err {
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
            CommandError::Consistency { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if code.is_server_error() {
            tracing::error!("{:?}", err);
        } else {
            tracing::debug!("{:?}", err);
        }
        (code, Json(Envelope::fail(err.message())))
    }
}
