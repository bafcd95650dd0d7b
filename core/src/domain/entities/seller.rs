//! Seller store entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sm_shared::utils::image_url;
use sm_shared::Id;

/// Store owned by a seller account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Id,
    #[serde(alias = "name", alias = "shop_name")]
    pub store_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "logo")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Seller {
    /// Absolute logo URL
    pub fn logo(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, self.logo_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_aliases_and_logo() {
        let seller: Seller = serde_json::from_str(
            r#"{"id": 9, "name": "Toko Budi", "logo": "/stores/9.png"}"#,
        )
        .unwrap();
        assert_eq!(seller.store_name, "Toko Budi");
        assert_eq!(
            seller.logo("https://img.test/").as_deref(),
            Some("https://img.test/stores/9.png")
        );
    }
}
