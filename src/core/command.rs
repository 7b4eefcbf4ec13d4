use async_trait::async_trait;
use crate::core::library::ShelfError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Consistency {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Validation { message, .. } => message,
            CommandError::NotFound { message } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::Consistency { message } => message,
            CommandError::Serialization { message } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<ShelfError> for CommandError {
    fn from(other: ShelfError) -> Self {
        match other {
            ShelfError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            ShelfError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            ShelfError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            ShelfError::Consistency { message } => {
                CommandError::Consistency { message }
            }
            ShelfError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::ShelfError;

    #[tokio::test]
    async fn test_should_convert_shelf_error() {
        let err = CommandError::from(ShelfError::validation("missing", Some("missing_name".to_string())));
        assert!(matches!(err, CommandError::Validation { ref reason_code, .. } if reason_code.as_deref() == Some("missing_name")));
        assert!(matches!(CommandError::from(ShelfError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(ShelfError::duplicate_key("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(ShelfError::consistency("x")), CommandError::Consistency { .. }));
        assert!(matches!(CommandError::from(ShelfError::serialization("x")), CommandError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_should_keep_message() {
        let err = CommandError::from(ShelfError::not_found("Book not found"));
        assert_eq!("Book not found", err.message());
    }
}
