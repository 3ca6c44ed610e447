use {
    crate::transport::RequestBody,
    serde::{de::Deserializer, Deserialize, Serialize},
};

/// Field selection requested when listing the products of a catalog.
pub const PRODUCT_FIELDS: &str = "id,name,price,currency,url,image_url,retailer_id,description";

/// Product fields supplied by the caller when creating or updating a product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    /// Amount in the currency's minor unit, e.g. cents
    pub price: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Product page on the merchant's website
    pub url: String,
    pub image_url: String,
    /// Merchant-assigned identifier (SKU)
    pub retailer_id: String,
    /// Empty means no description.
    #[serde(default)]
    pub description: String,
}

impl ProductInput {
    /// Body of a create request. Every field is sent except an empty
    /// description.
    pub fn create_body(&self) -> RequestBody {
        let mut body = RequestBody::from([
            ("name", self.name.clone()),
            ("price", format_price(self.price)),
            ("currency", self.currency.clone()),
            ("url", self.url.clone()),
            ("image_url", self.image_url.clone()),
            ("retailer_id", self.retailer_id.clone()),
        ]);

        if !self.description.is_empty() {
            body.insert("description", self.description.clone());
        }

        body
    }

    /// Body of a partial update. Empty strings and non-positive prices are
    /// left out, so neither can be set through an update. `retailer_id` is
    /// never updated.
    pub fn update_body(&self) -> RequestBody {
        let mut body = RequestBody::new();

        if !self.name.is_empty() {
            body.insert("name", self.name.clone());
        }
        if self.price > 0 {
            body.insert("price", format_price(self.price));
        }
        if !self.currency.is_empty() {
            body.insert("currency", self.currency.clone());
        }
        if !self.url.is_empty() {
            body.insert("url", self.url.clone());
        }
        if !self.image_url.is_empty() {
            body.insert("image_url", self.image_url.clone());
        }
        if !self.description.is_empty() {
            body.insert("description", self.description.clone());
        }

        body
    }
}

/// Prices go over the wire as base-10 integer strings.
pub fn format_price(price: i64) -> String {
    price.to_string()
}

/// A product as returned by `GET /{catalog_id}/products`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// As reported by the API, either the raw amount or a formatted one
    /// such as `$19.99`.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub retailer_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Integer(i64),
}

/// Accepts the price either as a JSON string or a JSON integer. `null`
/// becomes an empty string.
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<RawPrice> = Deserialize::deserialize(deserializer)?;

    Ok(match value {
        Some(RawPrice::Text(text)) => text,
        Some(RawPrice::Integer(amount)) => format_price(amount),
        None => String::new(),
    })
}
