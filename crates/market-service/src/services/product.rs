//! Product service
//!
//! Catalog operations: categories, listings, search, favorites and advertisements.

use market_core::entities::{Advertisement, Category, Favorite, Product, User};
use market_core::Snowflake;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Categories ===

    /// Return the category with this exact name, creating a root category if needed
    #[instrument(skip(self))]
    pub fn get_or_create_category(&self, name: &str) -> Category {
        let candidate = Category::new(self.ctx.generate_id(), name.to_string());
        let candidate_id = candidate.id;
        let category = self.ctx.category_repo().get_or_insert(candidate);

        if category.id == candidate_id {
            info!(category_id = %category.id, name = %category.name, "Category created");
        }
        category
    }

    /// All categories in creation order
    pub fn get_categories(&self) -> Vec<Category> {
        self.ctx.category_repo().list()
    }

    // === Products ===

    /// Publish a listing for `seller` under the category named `category_name`
    #[instrument(skip(self, seller, description), fields(seller_id = %seller.id))]
    pub fn publish_product(
        &self,
        seller: &User,
        name: &str,
        description: &str,
        price: f64,
        category_name: &str,
    ) -> Product {
        let category = self.get_or_create_category(category_name);
        let product = Product::new(
            self.ctx.generate_id(),
            seller.id,
            name.to_string(),
            description.to_string(),
            price,
            category.id,
        );
        self.ctx.product_repo().create(&product);

        info!(
            product_id = %product.id,
            seller_id = %seller.id,
            category_id = %category.id,
            "Product published"
        );
        product
    }

    /// Look up a product by ID
    pub fn find_product_by_id(&self, product_id: Snowflake) -> Option<Product> {
        self.ctx.product_repo().find_by_id(product_id)
    }

    /// Products published by `seller`, in publication order
    pub fn get_products_by_seller(&self, seller: &User) -> Vec<Product> {
        self.ctx.product_repo().find_by_seller(seller.id)
    }

    /// Case-insensitive substring search over name and description.
    /// An empty query returns every product.
    #[instrument(skip(self))]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let products = self.ctx.product_repo().list();
        if query.is_empty() {
            return products;
        }

        let needle = query.to_lowercase();
        let hits: Vec<Product> = products.into_iter().filter(|p| p.matches(&needle)).collect();
        debug!(hits = hits.len(), "Product search finished");
        hits
    }

    /// Change name, description and/or price. Empty strings are ignored.
    ///
    /// Returns the stored product, or `None` if the ID is unknown.
    #[instrument(skip(self, name, description))]
    pub fn update_product(
        &self,
        product_id: Snowflake,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> Option<Product> {
        let mut product = self.ctx.product_repo().find_by_id(product_id)?;

        if product.update(name, description, price) {
            if let Err(e) = self.ctx.product_repo().update(&product) {
                warn!(product_id = %product_id, error = %e, "Product update failed");
                return None;
            }
            info!(product_id = %product_id, "Product updated");
        }

        Some(product)
    }

    /// Attach an image to a product. Returns `None` if the ID is unknown.
    #[instrument(skip(self))]
    pub fn add_product_image(&self, product_id: Snowflake, image_url: &str) -> Option<Product> {
        let mut product = self.ctx.product_repo().find_by_id(product_id)?;
        product.add_image(self.ctx.generate_id(), image_url.to_string());

        if let Err(e) = self.ctx.product_repo().update(&product) {
            warn!(product_id = %product_id, error = %e, "Adding product image failed");
            return None;
        }

        info!(product_id = %product_id, images = product.images.len(), "Product image added");
        Some(product)
    }

    // === Favorites ===

    /// Favorite `product` for `user`. Returns `false` if it was already a favorite.
    #[instrument(skip(self, user, product), fields(user_id = %user.id, product_id = %product.id))]
    pub fn add_to_favorites(&self, user: &User, product: &Product) -> bool {
        match self.ctx.favorite_repo().add(&Favorite::new(user.id, product.id)) {
            Ok(()) => {
                info!(user_id = %user.id, product_id = %product.id, "Product added to favorites");
                true
            }
            Err(e) => {
                debug!(user_id = %user.id, product_id = %product.id, error = %e, "Favorite ignored");
                false
            }
        }
    }

    /// Favorited products of `user`, in the order they were favorited
    pub fn get_user_favorites(&self, user: &User) -> Vec<Product> {
        self.ctx
            .favorite_repo()
            .find_by_user(user.id)
            .into_iter()
            .filter_map(|f| self.ctx.product_repo().find_by_id(f.product_id))
            .collect()
    }

    // === Advertisements ===

    /// Register a banner at `position`
    #[instrument(skip(self, image_url, target_url))]
    pub fn add_advertisement(
        &self,
        title: &str,
        image_url: &str,
        target_url: &str,
        position: &str,
    ) -> Advertisement {
        let ad = Advertisement::new(
            self.ctx.generate_id(),
            title.to_string(),
            image_url.to_string(),
            target_url.to_string(),
            position.to_string(),
        );
        self.ctx.advertisement_repo().create(&ad);

        info!(ad_id = %ad.id, position = %ad.position, "Advertisement added");
        ad
    }

    /// Ads placed at exactly `position`
    pub fn get_advertisements_by_position(&self, position: &str) -> Vec<Advertisement> {
        self.ctx.advertisement_repo().find_by_position(position)
    }
}
