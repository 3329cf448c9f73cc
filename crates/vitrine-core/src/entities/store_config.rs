use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::SocialMedia;

/// Singleton store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Vitrine".to_string(),
            contact_email: None,
            contact_phone: None,
            address: None,
            opening_hours: None,
            logo_url: None,
            updated_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfigUpdate {
    pub store_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub logo_url: Option<String>,
}

impl StoreConfig {
    /// Applies a partial update in place, bumping `updated_at`.
    pub fn apply(&mut self, update: StoreConfigUpdate) {
        if let Some(store_name) = update.store_name {
            self.store_name = store_name;
        }
        if let Some(contact_email) = update.contact_email {
            self.contact_email = Some(contact_email);
        }
        if let Some(contact_phone) = update.contact_phone {
            self.contact_phone = Some(contact_phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(opening_hours) = update.opening_hours {
            self.opening_hours = Some(opening_hours);
        }
        if let Some(logo_url) = update.logo_url {
            self.logo_url = Some(logo_url);
        }
        self.updated_at = OffsetDateTime::now_utc();
    }
}

/// The public store-configuration payload: the config itself with the
/// active social-media links embedded. Cached under the `store-config`
/// tag, which is why social-media writes invalidate that tag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfigView {
    #[serde(flatten)]
    pub config: StoreConfig,
    pub social_media: Vec<SocialMedia>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_embeds_social_media() {
        let view = StoreConfigView {
            config: StoreConfig::default(),
            social_media: vec![],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["storeName"], "Vitrine");
        assert!(json["socialMedia"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_apply_update() {
        let mut config = StoreConfig::default();
        config.apply(StoreConfigUpdate {
            store_name: Some("Loja do Zé".into()),
            contact_phone: Some("+55 11 99999-0000".into()),
            ..Default::default()
        });
        assert_eq!(config.store_name, "Loja do Zé");
        assert_eq!(config.contact_phone.as_deref(), Some("+55 11 99999-0000"));
        assert!(config.contact_email.is_none());
    }
}
