//! # `POST /{version}/{catalog_id}/products`
//!
//! Adds a product to a catalog.

use {
    crate::{
        account::Account,
        catalog_client::{CatalogClient, CreatedResponse},
        error::CatalogError,
        product::models::ProductInput,
        transport::Transport,
    },
    log::info,
    reqwest::Method,
};

impl<T: Transport> CatalogClient<T> {
    /// Creates a product in `catalog_id` and returns the product ID assigned
    /// by the API.
    pub async fn create_product(
        &self,
        account: &Account,
        catalog_id: &str,
        product: &ProductInput,
    ) -> Result<String, CatalogError> {
        let url = self.catalog_products_url(account, catalog_id);
        let body = product.create_body();

        let created: CreatedResponse = self
            .send_and_decode(Method::POST, &url, Some(&body), account)
            .await?;

        info!(
            "Created product {} ({}) in catalog {}",
            created.id, product.retailer_id, catalog_id
        );

        Ok(created.id)
    }
}
