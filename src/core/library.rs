use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum ShelfError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // Raised by the repository when a generated id is already taken; the
    // catalog service retries with a fresh id before surfacing it.
    DuplicateKey {
        message: String,
    },
    // An operation that passed validation did not leave the collection in the
    // expected state.
    Consistency {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl ShelfError {
    pub fn validation(message: &str, reason_code: Option<String>) -> ShelfError {
        ShelfError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> ShelfError {
        ShelfError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> ShelfError {
        ShelfError::DuplicateKey { message: message.to_string() }
    }

    pub fn consistency(message: &str) -> ShelfError {
        ShelfError::Consistency { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> ShelfError {
        ShelfError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            ShelfError::Validation { message, .. } => message,
            ShelfError::NotFound { message } => message,
            ShelfError::DuplicateKey { message } => message,
            ShelfError::Consistency { message } => message,
            ShelfError::Serialization { message } => message,
        }
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::serialization(
            format!("Invalid request payload: {}", err).as_str())
    }
}

impl Display for ShelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShelfError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            ShelfError::NotFound { message } => {
                write!(f, "{}", message)
            }
            ShelfError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            ShelfError::Consistency { message } => {
                write!(f, "{}", message)
            }
            ShelfError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for ShelfError {}

/// A specialized Result type for the book collection.
pub type ShelfResult<T> = Result<T, ShelfError>;

// Maps a query-string flag to a boolean. Only "1"/"true" and "0"/"false" are
// recognized; anything else yields None so the caller can leave the filter off.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{parse_flag, ShelfError};

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(ShelfError::validation("test", None), ShelfError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(ShelfError::not_found("test"), ShelfError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(ShelfError::duplicate_key("test"), ShelfError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_consistency_error() {
        assert!(matches!(ShelfError::consistency("test"), ShelfError::Consistency{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("nope").expect_err("should not parse");
        let err = ShelfError::from(err);
        assert!(matches!(err, ShelfError::Serialization{ message: _ }));
        assert!(err.message().starts_with("Invalid request payload: "));
    }

    #[tokio::test]
    async fn test_should_expose_message() {
        assert_eq!("Book not found", ShelfError::not_found("Book not found").message());
        assert_eq!("bad", ShelfError::validation("bad", Some("code".to_string())).message());
    }

    #[tokio::test]
    async fn test_should_parse_flags() {
        assert_eq!(Some(true), parse_flag("1"));
        assert_eq!(Some(true), parse_flag("TRUE"));
        assert_eq!(Some(false), parse_flag("0"));
        assert_eq!(Some(false), parse_flag(" false "));
        assert_eq!(None, parse_flag(""));
        assert_eq!(None, parse_flag("2"));
        assert_eq!(None, parse_flag("yes"));
    }
}
