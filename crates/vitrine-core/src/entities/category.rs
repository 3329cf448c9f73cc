use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::slugify;

/// A catalog category. Products reference categories by id and may belong
/// to more than one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Category {
    pub fn from_new(new: NewCategory) -> Self {
        let slug = new.slug.unwrap_or_else(|| slugify(&new.name));
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            slug,
            description: new.description,
            image_url: new.image_url,
        }
    }

    pub fn apply(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
    }
}
