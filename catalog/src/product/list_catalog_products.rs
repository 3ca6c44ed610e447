//! # `GET /{version}/{catalog_id}/products?fields=...`
//!
//! Lists the products of a catalog with every field [ProductInfo] decodes.

use {
    crate::{
        account::Account,
        catalog_client::{CatalogClient, DataEnvelope},
        error::CatalogError,
        product::models::{ProductInfo, PRODUCT_FIELDS},
        transport::Transport,
    },
    reqwest::{Method, Url},
};

impl<T: Transport> CatalogClient<T> {
    pub async fn list_catalog_products(
        &self,
        account: &Account,
        catalog_id: &str,
    ) -> Result<Vec<ProductInfo>, CatalogError> {
        let url = products_query_url(&self.catalog_products_url(account, catalog_id));

        let envelope: DataEnvelope<ProductInfo> = self
            .send_and_decode(Method::GET, &url, None, account)
            .await?;

        Ok(envelope.data)
    }
}

/// Appends the URL-encoded `fields` selection to a product collection URL.
fn products_query_url(collection_url: &str) -> String {
    match Url::parse_with_params(collection_url, &[("fields", PRODUCT_FIELDS)]) {
        Ok(url) => url.into(),
        // Unparseable base URL, the transport reports it.
        Err(_) => format!("{}?fields={}", collection_url, PRODUCT_FIELDS),
    }
}
