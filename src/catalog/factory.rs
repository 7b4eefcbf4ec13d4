use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::utils::clock::SystemClock;
use crate::utils::ids::create_id_generator;

pub fn create_catalog_service(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(book_repository,
                                     Arc::new(SystemClock),
                                     create_id_generator(config.id_scheme)))
}
