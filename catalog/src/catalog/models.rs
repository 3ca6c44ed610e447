use serde::{Deserialize, Serialize};

/// A catalog as returned by `GET /{business_id}/owned_product_catalogs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
    /// Catalog vertical, e.g. `commerce`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
}
