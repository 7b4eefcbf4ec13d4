use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::model::{BookDetails, BookEntity};
use crate::core::library::{ShelfError, ShelfResult};
use crate::utils::date::serializer;

pub const MISSING_NAME: &str = "missing_name";
pub const READ_PAGE_EXCEEDS_PAGE_COUNT: &str = "read_page_exceeds_page_count";

// BookPayload is the body accepted when adding or updating a book. Only the
// name is optional on the wire so that a missing name is reported as a
// validation failure; other absent or null fields take their zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_page: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: Default + Deserialize<'de> {
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookPayload {
    pub fn new(name: &str, page_count: i64, read_page: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            page_count,
            read_page,
            ..Default::default()
        }
    }

    /// Checks the payload in order (name first, then page counts) and returns
    /// the details to store. `action` names the operation in the error message,
    /// e.g. "add" or "update".
    pub fn validate(&self, action: &str) -> ShelfResult<BookDetails> {
        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ShelfError::validation(
                    format!("Failed to {} book. Please provide the book name", action).as_str(),
                    Some(MISSING_NAME.to_string())));
            }
        };
        if self.read_page > self.page_count {
            return Err(ShelfError::validation(
                format!("Failed to {} book. readPage must not be greater than pageCount", action).as_str(),
                Some(READ_PAGE_EXCEEDS_PAGE_COUNT.to_string())));
        }
        Ok(BookDetails {
            name: name.to_string(),
            year: self.year,
            author: self.author.to_string(),
            summary: self.summary.to_string(),
            publisher: self.publisher.to_string(),
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

// BookDto is the full book as returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "serializer")]
    pub inserted_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            year: other.year,
            author: other.author.to_string(),
            summary: other.summary.to_string(),
            publisher: other.publisher.to_string(),
            page_count: other.page_count,
            read_page: other.read_page,
            finished: other.finished,
            reading: other.reading,
            inserted_at: other.inserted_at,
            updated_at: other.updated_at,
        }
    }
}

// BookSummaryDto is the projection used when listing books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummaryDto {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&BookEntity> for BookSummaryDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            publisher: other.publisher.to_string(),
        }
    }
}
