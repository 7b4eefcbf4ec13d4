use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::{BookFilter, BookRepository};
use crate::core::domain::Identifiable;
use crate::core::library::{ShelfError, ShelfResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order for the lifetime of the
// process. Each operation holds the lock for its whole check-then-write span.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> ShelfResult<usize> {
        let mut books = self.books.write().await;
        let id = entity.id();
        if books.iter().any(|b| b.id == id) {
            return Err(ShelfError::duplicate_key(format!("book already exists for {}", id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    // Replaces the mutable fields of the stored book with those of `entity`,
    // using its updated_at as the modification time.
    async fn update(&self, entity: &BookEntity) -> ShelfResult<usize> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == entity.id) {
            Some(existing) => {
                existing.apply(&entity.details(), entity.updated_at);
                Ok(1)
            }
            None => Err(ShelfError::not_found(format!("book not found for {}", entity.id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> ShelfResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id == id).cloned()
            .ok_or_else(|| ShelfError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> ShelfResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(1)
            }
            None => Err(ShelfError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn find_all(&self) -> ShelfResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn query(&self, filter: &BookFilter) -> ShelfResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| filter.matches(*b)).cloned().collect())
    }

    async fn count_by_id(&self, id: &str) -> ShelfResult<usize> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.id == id).count())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::books::domain::model::{BookDetails, BookEntity};
    use crate::books::repository::{BookFilter, BookRepository};
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::ShelfError;
    use crate::core::repository::Repository;

    fn new_book(id: &str, name: &str) -> BookEntity {
        BookEntity::new(id, &BookDetails::new(name, 100, 10), Utc::now().naive_utc())
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = new_book("id1", "test book");
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.id.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
        assert_eq!(1, books_repo.count_by_id("id1").await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_ids() {
        let books_repo = MemoryBookRepository::new();
        let _ = books_repo.create(&new_book("id1", "first")).await.expect("should create book");
        let err = books_repo.create(&new_book("id1", "second")).await.expect_err("should reject duplicate");
        assert!(matches!(err, ShelfError::DuplicateKey { .. }));
        assert_eq!(1, books_repo.len().await);
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let book = new_book("id1", "test book");
        let _ = books_repo.create(&book).await.expect("should create book");

        let later = book.updated_at + Duration::seconds(30);
        let mut changed = BookEntity::new("id1", &BookDetails::new("new title", 100, 100), later);
        changed.inserted_at = later;
        let size = books_repo.update(&changed).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get("id1").await.expect("should return book");
        assert_eq!("new title", loaded.name.as_str());
        assert!(loaded.finished);
        assert_eq!(book.inserted_at, loaded.inserted_at);
        assert_eq!(later, loaded.updated_at);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_books() {
        let books_repo = MemoryBookRepository::new();
        let err = books_repo.update(&new_book("missing", "x")).await.expect_err("should fail");
        assert!(matches!(err, ShelfError::NotFound { .. }));
        assert!(books_repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_should_query_books_in_order() {
        let books_repo = MemoryBookRepository::new();
        for (i, name) in ["Dunia Sophie", "Laskar Pelangi", "dunia kecil"].iter().enumerate() {
            let _ = books_repo.create(&new_book(format!("id{}", i).as_str(), name)).await.expect("should create book");
        }
        let res = books_repo.query(&BookFilter::from_query(Some("Dunia"), None, None)).await.expect("should query");
        let ids: Vec<&str> = res.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(vec!["id0", "id2"], ids);

        let all = books_repo.find_all().await.expect("should list");
        assert_eq!(3, all.len());
        assert_eq!("Laskar Pelangi", all[1].name.as_str());
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let book = new_book("id1", "test book");
        let _ = books_repo.create(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.id.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.id.as_str()).await;
        assert!(loaded.is_err());
        let again = books_repo.delete(book.id.as_str()).await;
        assert!(matches!(again, Err(ShelfError::NotFound { .. })));
    }
}
