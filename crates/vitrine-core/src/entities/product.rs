use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::default_true;
use crate::slug::slugify;

/// A catalog product.
///
/// Prices are integer cents to avoid floating point in money arithmetic.
/// `slug` is unique across the catalog and appears in public URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_cents: i64,
    pub image_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<Uuid>,
    pub category_ids: Vec<Uuid>,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub brand_id: Option<Uuid>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub image_urls: Option<Vec<String>>,
    pub brand_id: Option<Uuid>,
    pub category_ids: Option<Vec<Uuid>>,
    pub active: Option<bool>,
}

impl Product {
    pub fn from_new(new: NewProduct) -> Self {
        let slug = new.slug.unwrap_or_else(|| slugify(&new.name));
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            slug,
            description: new.description,
            price_cents: new.price_cents,
            image_urls: new.image_urls,
            brand_id: new.brand_id,
            category_ids: new.category_ids,
            active: new.active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update in place, bumping `updated_at`.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(image_urls) = update.image_urls {
            self.image_urls = image_urls;
        }
        if let Some(brand_id) = update.brand_id {
            self.brand_id = Some(brand_id);
        }
        if let Some(category_ids) = update.category_ids {
            self.category_ids = category_ids;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = OffsetDateTime::now_utc();
    }

    /// True when both products are active and share at least one category.
    pub fn is_related_to(&self, other: &Product) -> bool {
        self.id != other.id
            && self.active
            && other.active
            && self
                .category_ids
                .iter()
                .any(|c| other.category_ids.contains(c))
    }
}
