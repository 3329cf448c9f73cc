use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::slugify;

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: String,
    /// Explicit slug; derived from `name` when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub logo_url: Option<String>,
}

impl Brand {
    pub fn from_new(new: NewBrand) -> Self {
        let slug = new.slug.unwrap_or_else(|| slugify(&new.name));
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            slug,
            logo_url: new.logo_url,
        }
    }

    pub fn apply(&mut self, update: BrandUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(logo_url) = update.logo_url {
            self.logo_url = Some(logo_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name() {
        let brand = Brand::from_new(NewBrand {
            name: "São Jorge Calçados".into(),
            slug: None,
            logo_url: None,
        });
        assert_eq!(brand.slug, "sao-jorge-calcados");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let brand = Brand::from_new(NewBrand {
            name: "São Jorge Calçados".into(),
            slug: Some("sjc".into()),
            logo_url: None,
        });
        assert_eq!(brand.slug, "sjc");
    }
}
