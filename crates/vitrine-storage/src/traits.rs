//! Storage traits for the storefront storage abstraction layer.
//!
//! The storefront has a closed set of collections, so the trait exposes
//! typed per-collection operations rather than a generic document API.

use async_trait::async_trait;
use uuid::Uuid;

use vitrine_core::{
    Banner, BannerUpdate, Brand, BrandUpdate, Category, CategoryUpdate, Product, ProductUpdate,
    SocialMedia, SocialMediaUpdate, StoreConfig, StoreConfigUpdate, TeamAccount,
};

use crate::error::StorageError;

/// The main storage trait every storefront backend must implement.
///
/// Implementations must be thread-safe (`Send + Sync`) and must enforce the
/// cross-entity uniqueness rules at write time:
///
/// - product/category/brand slugs are unique within their collection;
/// - at most one **active** social-media record per platform;
/// - team-account emails are unique.
///
/// Reads return `Ok(None)`/empty collections for missing data; errors are
/// reserved for infrastructure failures and constraint violations.
#[async_trait]
pub trait StorefrontStorage: Send + Sync {
    // ==================== Banners ====================

    /// Lists all banners ordered by `position`.
    async fn list_banners(&self) -> Result<Vec<Banner>, StorageError>;

    /// Reads a banner by id.
    async fn get_banner(&self, id: Uuid) -> Result<Option<Banner>, StorageError>;

    /// Inserts a banner.
    async fn create_banner(&self, banner: Banner) -> Result<Banner, StorageError>;

    /// Applies a partial update to a banner.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the banner does not exist.
    async fn update_banner(&self, id: Uuid, update: BannerUpdate) -> Result<Banner, StorageError>;

    /// Deletes a banner.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the banner does not exist.
    async fn delete_banner(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Brands ====================

    /// Lists all brands ordered by name.
    async fn list_brands(&self) -> Result<Vec<Brand>, StorageError>;

    /// Reads a brand by id.
    async fn get_brand(&self, id: Uuid) -> Result<Option<Brand>, StorageError>;

    /// Inserts a brand.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateSlug` on a slug collision.
    async fn create_brand(&self, brand: Brand) -> Result<Brand, StorageError>;

    /// Applies a partial update to a brand.
    async fn update_brand(&self, id: Uuid, update: BrandUpdate) -> Result<Brand, StorageError>;

    /// Deletes a brand.
    async fn delete_brand(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Categories ====================

    /// Lists all categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Reads a category by id.
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StorageError>;

    /// Inserts a category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateSlug` on a slug collision.
    async fn create_category(&self, category: Category) -> Result<Category, StorageError>;

    /// Applies a partial update to a category.
    async fn update_category(
        &self,
        id: Uuid,
        update: CategoryUpdate,
    ) -> Result<Category, StorageError>;

    /// Deletes a category. Products referencing it keep their remaining
    /// category memberships.
    async fn delete_category(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Products ====================

    /// Lists all products, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, StorageError>;

    /// Reads a product by id.
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, StorageError>;

    /// Reads a product by slug.
    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StorageError>;

    /// Lists active products sharing at least one category with the given
    /// product, excluding the product itself.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the subject product does not exist.
    async fn related_products(&self, id: Uuid) -> Result<Vec<Product>, StorageError>;

    /// Inserts a product.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateSlug` on a slug collision.
    async fn create_product(&self, product: Product) -> Result<Product, StorageError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        id: Uuid,
        update: ProductUpdate,
    ) -> Result<Product, StorageError>;

    /// Deletes a product.
    async fn delete_product(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Social media ====================

    /// Lists all social-media records.
    async fn list_social_media(&self) -> Result<Vec<SocialMedia>, StorageError>;

    /// Reads a social-media record by id.
    async fn get_social_media(&self, id: Uuid) -> Result<Option<SocialMedia>, StorageError>;

    /// Inserts a social-media record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicatePlatform` if the record is active and
    /// an active record for the platform already exists.
    async fn create_social_media(&self, social: SocialMedia) -> Result<SocialMedia, StorageError>;

    /// Applies a partial update to a social-media record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicatePlatform` when the updated record
    /// would be the second active record for its platform.
    async fn update_social_media(
        &self,
        id: Uuid,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, StorageError>;

    /// Deletes a social-media record.
    async fn delete_social_media(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Store configuration ====================

    /// Reads the singleton store configuration.
    async fn get_store_config(&self) -> Result<StoreConfig, StorageError>;

    /// Applies a partial update to the store configuration.
    async fn update_store_config(
        &self,
        update: StoreConfigUpdate,
    ) -> Result<StoreConfig, StorageError>;

    // ==================== Team accounts ====================

    /// Lists all team accounts.
    async fn list_team_accounts(&self) -> Result<Vec<TeamAccount>, StorageError>;

    /// Finds a team account by email (exact, case-insensitive).
    async fn find_team_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<TeamAccount>, StorageError>;

    /// Inserts a team account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateEmail` on an email collision.
    async fn create_team_account(&self, account: TeamAccount)
    -> Result<TeamAccount, StorageError>;

    /// Deletes a team account.
    async fn delete_team_account(&self, id: Uuid) -> Result<(), StorageError>;

    // ==================== Metadata ====================

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

// Ensure the trait is object-safe by using it as a trait object
#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that StorefrontStorage is object-safe
    fn _assert_storage_object_safe(_: &dyn StorefrontStorage) {}
}
