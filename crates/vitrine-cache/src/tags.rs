//! Cache tag names.
//!
//! The tag taxonomy is part of the service's interoperability surface and
//! must stay byte-stable: collection tags for listings, `product-{key}` and
//! `product-related-{key}` for per-entity reads, where the key is whatever
//! the read route used to look the product up (id or slug).

/// Banner listing.
pub const BANNERS: &str = "banners";
/// Product listing.
pub const PRODUCTS: &str = "products";
/// Brand listing.
pub const BRANDS: &str = "brands";
/// Category listing.
pub const CATEGORIES: &str = "categories";
/// Store configuration, including the embedded social-media links.
pub const STORE_CONFIG: &str = "store-config";

/// Per-product tag for the given lookup key (id or slug).
pub fn product(key: &str) -> String {
    format!("product-{key}")
}

/// Related-products tag for the given lookup key (id or slug).
pub fn product_related(key: &str) -> String {
    format!("product-related-{key}")
}
