//! In-memory implementation of ProductRepository

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::instrument;

use market_core::entities::Product;
use market_core::error::DomainError;
use market_core::traits::{ProductRepository, RepoResult};
use market_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<Snowflake, usize>,
}

/// Product directory in publication order
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: Snowflake) -> Option<Product> {
        let catalog = self.inner.read();
        catalog.by_id.get(&id).map(|&idx| catalog.products[idx].clone())
    }

    fn find_by_seller(&self, seller_id: Snowflake) -> Vec<Product> {
        self.inner
            .read()
            .products
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect()
    }

    #[instrument(level = "trace", skip(self, product), fields(product_id = %product.id))]
    fn create(&self, product: &Product) {
        let mut catalog = self.inner.write();
        let idx = catalog.products.len();
        catalog.by_id.insert(product.id, idx);
        catalog.products.push(product.clone());
    }

    #[instrument(level = "trace", skip(self, product), fields(product_id = %product.id))]
    fn update(&self, product: &Product) -> RepoResult<()> {
        let mut catalog = self.inner.write();
        let idx = *catalog
            .by_id
            .get(&product.id)
            .ok_or(DomainError::ProductNotFound(product.id))?;
        catalog.products[idx] = product.clone();
        Ok(())
    }

    fn list(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }
}
