use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDetails holds the caller-supplied fields of a book, i.e. everything an
// update is allowed to replace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookDetails {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub reading: bool,
}

impl BookDetails {
    pub fn new(name: &str, page_count: i64, read_page: i64) -> Self {
        Self {
            name: name.to_string(),
            page_count,
            read_page,
            ..Default::default()
        }
    }
}

// BookEntity is a single book in the personal collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(id: &str, details: &BookDetails, now: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            name: details.name.to_string(),
            year: details.year,
            author: details.author.to_string(),
            summary: details.summary.to_string(),
            publisher: details.publisher.to_string(),
            page_count: details.page_count,
            read_page: details.read_page,
            finished: details.read_page == details.page_count,
            reading: details.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    pub fn details(&self) -> BookDetails {
        BookDetails {
            name: self.name.to_string(),
            year: self.year,
            author: self.author.to_string(),
            summary: self.summary.to_string(),
            publisher: self.publisher.to_string(),
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        }
    }

    // Replaces every mutable field. id and inserted_at are kept, and
    // updated_at never moves backwards.
    pub fn apply(&mut self, details: &BookDetails, now: NaiveDateTime) {
        self.name = details.name.to_string();
        self.year = details.year;
        self.author = details.author.to_string();
        self.summary = details.summary.to_string();
        self.publisher = details.publisher.to_string();
        self.page_count = details.page_count;
        self.read_page = details.read_page;
        self.finished = details.read_page == details.page_count;
        self.reading = details.reading;
        self.updated_at = self.updated_at.max(now);
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.name.as_str()
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn is_reading(&self) -> bool {
        self.reading
    }
}
