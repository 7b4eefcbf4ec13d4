use async_trait::async_trait;
use crate::core::library::ShelfResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, failing with DuplicateKey if its id is taken
    async fn create(&self, entity: &Entity) -> ShelfResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> ShelfResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> ShelfResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> ShelfResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> ShelfResult<Vec<Entity>>;
}
