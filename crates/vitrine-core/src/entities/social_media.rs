use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::default_true;

/// Social platforms the store can link to.
///
/// The wire form is the lowercase platform name. At most one **active**
/// record may exist per platform; the storage layer enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Whatsapp,
    Tiktok,
    Youtube,
    X,
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Whatsapp => "whatsapp",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::X => "x",
        };
        write!(f, "{name}")
    }
}

/// A social-media link shown in the storefront footer and embedded in the
/// store-configuration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub id: Uuid,
    pub platform: SocialPlatform,
    pub url: String,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSocialMedia {
    pub platform: SocialPlatform,
    pub url: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaUpdate {
    pub platform: Option<SocialPlatform>,
    pub url: Option<String>,
    pub active: Option<bool>,
}

impl SocialMedia {
    pub fn from_new(new: NewSocialMedia) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform: new.platform,
            url: new.url,
            active: new.active,
        }
    }

    pub fn apply(&mut self, update: SocialMediaUpdate) {
        if let Some(platform) = update.platform {
            self.platform = platform;
        }
        if let Some(url) = update.url {
            self.url = url;
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
    fn test_platform_wire_form() {
        let json = serde_json::to_string(&SocialPlatform::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");
        let parsed: SocialPlatform = serde_json::from_str("\"whatsapp\"").unwrap();
        assert_eq!(parsed, SocialPlatform::Whatsapp);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!(serde_json::from_str::<SocialPlatform>("\"orkut\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_form() {
        for p in [
            SocialPlatform::Instagram,
            SocialPlatform::Facebook,
            SocialPlatform::Whatsapp,
            SocialPlatform::Tiktok,
            SocialPlatform::Youtube,
            SocialPlatform::X,
        ] {
            let wire = serde_json::to_string(&p).unwrap();
            assert_eq!(wire.trim_matches('"'), p.to_string());
        }
    }
}
