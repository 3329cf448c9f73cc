use std::sync::Arc;

use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use vitrine_core::{
    Banner, BannerUpdate, Brand, BrandUpdate, Category, CategoryUpdate, Product, ProductUpdate,
    SocialMedia, SocialMediaUpdate, StoreConfig, StoreConfigUpdate, TeamAccount,
};
use vitrine_storage::{StorageError, StorefrontStorage};

/// In-memory storefront storage backend using papaya lock-free HashMaps.
///
/// Each collection lives in its own map keyed by id; the singleton store
/// configuration sits behind an async `RwLock`. Uniqueness rules (slugs,
/// active platform, email) are enforced by scanning the collection at write
/// time, which is adequate at back-office collection sizes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    banners: Arc<PapayaHashMap<Uuid, Banner>>,
    brands: Arc<PapayaHashMap<Uuid, Brand>>,
    categories: Arc<PapayaHashMap<Uuid, Category>>,
    products: Arc<PapayaHashMap<Uuid, Product>>,
    social_media: Arc<PapayaHashMap<Uuid, SocialMedia>>,
    store_config: Arc<RwLock<StoreConfig>>,
    team_accounts: Arc<PapayaHashMap<Uuid, TeamAccount>>,
}

impl InMemoryStorage {
    /// Creates a new, empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn slug_taken_in_products(&self, slug: &str, except: Option<Uuid>) -> bool {
        let guard = self.products.pin();
        guard
            .iter()
            .any(|(id, p)| p.slug == slug && Some(*id) != except)
    }

    fn slug_taken_in_brands(&self, slug: &str, except: Option<Uuid>) -> bool {
        let guard = self.brands.pin();
        guard
            .iter()
            .any(|(id, b)| b.slug == slug && Some(*id) != except)
    }

    fn slug_taken_in_categories(&self, slug: &str, except: Option<Uuid>) -> bool {
        let guard = self.categories.pin();
        guard
            .iter()
            .any(|(id, c)| c.slug == slug && Some(*id) != except)
    }

    fn active_platform_taken(&self, social: &SocialMedia) -> bool {
        if !social.active {
            return false;
        }
        let guard = self.social_media.pin();
        guard
            .iter()
            .any(|(id, s)| s.active && s.platform == social.platform && *id != social.id)
    }
}

#[async_trait]
impl StorefrontStorage for InMemoryStorage {
    // ==================== Banners ====================

    async fn list_banners(&self) -> Result<Vec<Banner>, StorageError> {
        let guard = self.banners.pin();
        let mut banners: Vec<Banner> = guard.iter().map(|(_, b)| b.clone()).collect();
        banners.sort_by_key(|b| b.position);
        Ok(banners)
    }

    async fn get_banner(&self, id: Uuid) -> Result<Option<Banner>, StorageError> {
        let guard = self.banners.pin();
        Ok(guard.get(&id).cloned())
    }

    async fn create_banner(&self, banner: Banner) -> Result<Banner, StorageError> {
        let guard = self.banners.pin();
        guard.insert(banner.id, banner.clone());
        Ok(banner)
    }

    async fn update_banner(&self, id: Uuid, update: BannerUpdate) -> Result<Banner, StorageError> {
        let guard = self.banners.pin();
        let mut banner = guard
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Banner", id.to_string()))?;
        banner.apply(update);
        guard.insert(id, banner.clone());
        Ok(banner)
    }

    async fn delete_banner(&self, id: Uuid) -> Result<(), StorageError> {
        let guard = self.banners.pin();
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found("Banner", id.to_string()))
    }

    // ==================== Brands ====================

    async fn list_brands(&self) -> Result<Vec<Brand>, StorageError> {
        let guard = self.brands.pin();
        let mut brands: Vec<Brand> = guard.iter().map(|(_, b)| b.clone()).collect();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }

    async fn get_brand(&self, id: Uuid) -> Result<Option<Brand>, StorageError> {
        let guard = self.brands.pin();
        Ok(guard.get(&id).cloned())
    }

    async fn create_brand(&self, brand: Brand) -> Result<Brand, StorageError> {
        if self.slug_taken_in_brands(&brand.slug, None) {
            return Err(StorageError::duplicate_slug(&brand.slug));
        }
        let guard = self.brands.pin();
        guard.insert(brand.id, brand.clone());
        Ok(brand)
    }

    async fn update_brand(&self, id: Uuid, update: BrandUpdate) -> Result<Brand, StorageError> {
        let mut brand = {
            let guard = self.brands.pin();
            guard
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("Brand", id.to_string()))?
        };
        brand.apply(update);
        if self.slug_taken_in_brands(&brand.slug, Some(id)) {
            return Err(StorageError::duplicate_slug(&brand.slug));
        }
        let guard = self.brands.pin();
        guard.insert(id, brand.clone());
        Ok(brand)
    }

    async fn delete_brand(&self, id: Uuid) -> Result<(), StorageError> {
        let guard = self.brands.pin();
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found("Brand", id.to_string()))
    }

    // ==================== Categories ====================

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let guard = self.categories.pin();
        let mut categories: Vec<Category> = guard.iter().map(|(_, c)| c.clone()).collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StorageError> {
        let guard = self.categories.pin();
        Ok(guard.get(&id).cloned())
    }

    async fn create_category(&self, category: Category) -> Result<Category, StorageError> {
        if self.slug_taken_in_categories(&category.slug, None) {
            return Err(StorageError::duplicate_slug(&category.slug));
        }
        let guard = self.categories.pin();
        guard.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        update: CategoryUpdate,
    ) -> Result<Category, StorageError> {
        let mut category = {
            let guard = self.categories.pin();
            guard
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("Category", id.to_string()))?
        };
        category.apply(update);
        if self.slug_taken_in_categories(&category.slug, Some(id)) {
            return Err(StorageError::duplicate_slug(&category.slug));
        }
        let guard = self.categories.pin();
        guard.insert(id, category.clone());
        Ok(category)
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), StorageError> {
        {
            let guard = self.categories.pin();
            guard
                .remove(&id)
                .ok_or_else(|| StorageError::not_found("Category", id.to_string()))?;
        }
        // Drop the membership from products that referenced the category.
        let products = self.products.pin();
        let affected: Vec<Product> = products
            .iter()
            .filter(|(_, p)| p.category_ids.contains(&id))
            .map(|(_, p)| p.clone())
            .collect();
        for mut product in affected {
            product.category_ids.retain(|c| *c != id);
            products.insert(product.id, product);
        }
        Ok(())
    }

    // ==================== Products ====================

    async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        let guard = self.products.pin();
        let mut products: Vec<Product> = guard.iter().map(|(_, p)| p.clone()).collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, StorageError> {
        let guard = self.products.pin();
        Ok(guard.get(&id).cloned())
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StorageError> {
        let guard = self.products.pin();
        Ok(guard.iter().find(|(_, p)| p.slug == slug).map(|(_, p)| p.clone()))
    }

    async fn related_products(&self, id: Uuid) -> Result<Vec<Product>, StorageError> {
        let guard = self.products.pin();
        let subject = guard
            .get(&id)
            .ok_or_else(|| StorageError::not_found("Product", id.to_string()))?;
        let mut related: Vec<Product> = guard
            .iter()
            .filter(|(_, p)| subject.is_related_to(p))
            .map(|(_, p)| p.clone())
            .collect();
        related.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(related)
    }

    async fn create_product(&self, product: Product) -> Result<Product, StorageError> {
        if self.slug_taken_in_products(&product.slug, None) {
            return Err(StorageError::duplicate_slug(&product.slug));
        }
        let guard = self.products.pin();
        guard.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: Uuid,
        update: ProductUpdate,
    ) -> Result<Product, StorageError> {
        let mut product = {
            let guard = self.products.pin();
            guard
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("Product", id.to_string()))?
        };
        product.apply(update);
        if self.slug_taken_in_products(&product.slug, Some(id)) {
            return Err(StorageError::duplicate_slug(&product.slug));
        }
        let guard = self.products.pin();
        guard.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), StorageError> {
        let guard = self.products.pin();
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found("Product", id.to_string()))
    }

    // ==================== Social media ====================

    async fn list_social_media(&self) -> Result<Vec<SocialMedia>, StorageError> {
        let guard = self.social_media.pin();
        let mut records: Vec<SocialMedia> = guard.iter().map(|(_, s)| s.clone()).collect();
        records.sort_by_key(|s| s.platform.to_string());
        Ok(records)
    }

    async fn get_social_media(&self, id: Uuid) -> Result<Option<SocialMedia>, StorageError> {
        let guard = self.social_media.pin();
        Ok(guard.get(&id).cloned())
    }

    async fn create_social_media(&self, social: SocialMedia) -> Result<SocialMedia, StorageError> {
        if self.active_platform_taken(&social) {
            return Err(StorageError::duplicate_platform(social.platform.to_string()));
        }
        let guard = self.social_media.pin();
        guard.insert(social.id, social.clone());
        Ok(social)
    }

    async fn update_social_media(
        &self,
        id: Uuid,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, StorageError> {
        let mut social = {
            let guard = self.social_media.pin();
            guard
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::not_found("SocialMedia", id.to_string()))?
        };
        social.apply(update);
        if self.active_platform_taken(&social) {
            return Err(StorageError::duplicate_platform(social.platform.to_string()));
        }
        let guard = self.social_media.pin();
        guard.insert(id, social.clone());
        Ok(social)
    }

    async fn delete_social_media(&self, id: Uuid) -> Result<(), StorageError> {
        let guard = self.social_media.pin();
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found("SocialMedia", id.to_string()))
    }

    // ==================== Store configuration ====================

    async fn get_store_config(&self) -> Result<StoreConfig, StorageError> {
        Ok(self.store_config.read().await.clone())
    }

    async fn update_store_config(
        &self,
        update: StoreConfigUpdate,
    ) -> Result<StoreConfig, StorageError> {
        let mut config = self.store_config.write().await;
        config.apply(update);
        Ok(config.clone())
    }

    // ==================== Team accounts ====================

    async fn list_team_accounts(&self) -> Result<Vec<TeamAccount>, StorageError> {
        let guard = self.team_accounts.pin();
        let mut accounts: Vec<TeamAccount> = guard.iter().map(|(_, a)| a.clone()).collect();
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(accounts)
    }

    async fn find_team_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<TeamAccount>, StorageError> {
        let guard = self.team_accounts.pin();
        Ok(guard
            .iter()
            .find(|(_, a)| a.email.eq_ignore_ascii_case(email))
            .map(|(_, a)| a.clone()))
    }

    async fn create_team_account(
        &self,
        account: TeamAccount,
    ) -> Result<TeamAccount, StorageError> {
        {
            let guard = self.team_accounts.pin();
            if guard
                .iter()
                .any(|(_, a)| a.email.eq_ignore_ascii_case(&account.email))
            {
                return Err(StorageError::duplicate_email(&account.email));
            }
            guard.insert(account.id, account.clone());
        }
        Ok(account)
    }

    async fn delete_team_account(&self, id: Uuid) -> Result<(), StorageError> {
        let guard = self.team_accounts.pin();
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found("TeamAccount", id.to_string()))
    }

    // ==================== Metadata ====================

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
