//! Storefront entity types.

mod banner;
mod brand;
mod category;
mod product;
mod social_media;
mod store_config;
mod team_account;

pub use banner::{Banner, BannerUpdate, NewBanner};
pub use brand::{Brand, BrandUpdate, NewBrand};
pub use category::{Category, CategoryUpdate, NewCategory};
pub use product::{NewProduct, Product, ProductUpdate};
pub use social_media::{NewSocialMedia, SocialMedia, SocialMediaUpdate, SocialPlatform};
pub use store_config::{StoreConfig, StoreConfigUpdate, StoreConfigView};
pub use team_account::{NewTeamAccount, TeamAccount};

pub(crate) fn default_true() -> bool {
    true
}
