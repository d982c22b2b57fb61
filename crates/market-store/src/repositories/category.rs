//! In-memory implementation of CategoryRepository

use std::collections::HashMap;

use parking_lot::RwLock;

use market_core::entities::Category;
use market_core::traits::CategoryRepository;

#[derive(Debug, Default)]
struct CategoryDirectory {
    categories: Vec<Category>,
    by_name: HashMap<String, usize>,
}

/// Category directory. Names map one-to-one onto categories.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: RwLock<CategoryDirectory>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn get_or_insert(&self, candidate: Category) -> Category {
        let mut dir = self.inner.write();
        if let Some(&idx) = dir.by_name.get(&candidate.name) {
            return dir.categories[idx].clone();
        }

        let idx = dir.categories.len();
        dir.by_name.insert(candidate.name.clone(), idx);
        dir.categories.push(candidate.clone());
        candidate
    }

    fn list(&self) -> Vec<Category> {
        self.inner.read().categories.clone()
    }
}
