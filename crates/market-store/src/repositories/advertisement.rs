//! In-memory implementation of AdvertisementRepository

use parking_lot::RwLock;

use market_core::entities::Advertisement;
use market_core::traits::AdvertisementRepository;

#[derive(Debug, Default)]
pub struct InMemoryAdvertisementRepository {
    ads: RwLock<Vec<Advertisement>>,
}

impl InMemoryAdvertisementRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdvertisementRepository for InMemoryAdvertisementRepository {
    fn create(&self, ad: &Advertisement) {
        self.ads.write().push(ad.clone());
    }

    fn find_by_position(&self, position: &str) -> Vec<Advertisement> {
        self.ads
            .read()
            .iter()
            .filter(|ad| ad.position == position)
            .cloned()
            .collect()
    }
}
