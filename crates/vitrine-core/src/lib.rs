//! Core entity model for the Vitrine storefront.
//!
//! This crate defines the catalog and back-office entities (banners, brands,
//! categories, products, social-media links, store configuration, team
//! accounts) together with the core error type shared across the workspace.
//! It carries no I/O: persistence lives behind the `vitrine-storage` traits
//! and HTTP shaping lives in `vitrine-server`.

pub mod entities;
pub mod error;
pub mod slug;

pub use entities::{
    Banner, BannerUpdate, Brand, BrandUpdate, Category, CategoryUpdate, NewBanner, NewBrand,
    NewCategory, NewProduct, NewSocialMedia, NewTeamAccount, Product, ProductUpdate, SocialMedia,
    SocialMediaUpdate, SocialPlatform, StoreConfig, StoreConfigUpdate, StoreConfigView,
    TeamAccount,
};
pub use error::{CoreError, ErrorCategory, Result};
