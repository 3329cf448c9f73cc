use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::default_true;

/// A promotional banner shown on the storefront home page.
///
/// Banners are ordered by `position` (ascending) and only `active` banners
/// are returned by the public listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub position: u32,
    pub active: bool,
}

/// Payload for creating a banner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBanner {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub position: u32,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Partial update for a banner. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerUpdate {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub position: Option<u32>,
    pub active: Option<bool>,
}

impl Banner {
    /// Materializes a banner from a create payload with a fresh id.
    pub fn from_new(new: NewBanner) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            image_url: new.image_url,
            link_url: new.link_url,
            position: new.position,
            active: new.active,
        }
    }

    /// Applies a partial update in place.
    pub fn apply(&mut self, update: BannerUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(link_url) = update.link_url {
            self.link_url = Some(link_url);
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_defaults() {
        let banner = Banner::from_new(
            serde_json::from_value(serde_json::json!({
                "title": "Liquidação",
                "imageUrl": "/uploads/banners/x.webp"
            }))
            .unwrap(),
        );
        assert!(banner.active);
        assert_eq!(banner.position, 0);
        assert!(banner.link_url.is_none());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut banner = Banner::from_new(NewBanner {
            title: "Old".into(),
            image_url: "/a.png".into(),
            link_url: None,
            position: 1,
            active: true,
        });
        banner.apply(BannerUpdate {
            title: Some("New".into()),
            active: Some(false),
            ..Default::default()
        });
        assert_eq!(banner.title, "New");
        assert!(!banner.active);
        assert_eq!(banner.image_url, "/a.png");
        assert_eq!(banner.position, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let banner = Banner::from_new(NewBanner {
            title: "B".into(),
            image_url: "/b.png".into(),
            link_url: None,
            position: 0,
            active: true,
        });
        let json = serde_json::to_value(&banner).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
        // linkUrl is omitted entirely when unset
        assert!(json.get("linkUrl").is_none());
    }
}
