//! # `commerce-catalog`
//!
//! Client for the product catalog endpoints of the WhatsApp commerce Graph
//! API. Catalogs are owned by a business account and hold products that can
//! be shared in conversations.
//!
//! The [CatalogClient] maps each method to exactly one HTTP request. The
//! actual HTTP call is delegated to a [Transport], [HttpTransport] being the
//! default one.
//!
//! ```ignore
//! use commerce_catalog::{Account, CatalogClient, CatalogClientConfig, ProductInput};
//!
//! let client = CatalogClient::new(&CatalogClientConfig::default())?;
//! let account = Account::new("v21.0", "1234567890", "EAAG...");
//!
//! let catalog_id = client.create_catalog(&account, "Summer").await?;
//! let product_id = client
//!     .create_product(
//!         &account,
//!         &catalog_id,
//!         &ProductInput {
//!             name: "Shirt".to_string(),
//!             price: 1999,
//!             currency: "USD".to_string(),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! ```

mod account;
mod catalog;
mod catalog_client;
mod config;
mod error;
mod product;
mod transport;

pub use {
    account::Account,
    catalog::models::CatalogInfo,
    catalog_client::CatalogClient,
    config::{CatalogClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS},
    error::{ApiErrorBody, ApiErrorDetail, CatalogError, CatalogErrorKind, RequestError},
    product::models::{format_price, ProductInfo, ProductInput, PRODUCT_FIELDS},
    reqwest::Method,
    transport::{HttpTransport, RequestBody, Transport},
};
