//! # `POST /{version}/{product_id}`
//!
//! Partially updates a product. Only the fields set in [ProductInput] are
//! sent, see [ProductInput::update_body].

use {
    crate::{
        account::Account,
        catalog_client::CatalogClient,
        error::CatalogError,
        product::models::ProductInput,
        transport::Transport,
    },
    log::{debug, info},
    reqwest::Method,
};

impl<T: Transport> CatalogClient<T> {
    pub async fn update_product(
        &self,
        account: &Account,
        product_id: &str,
        product: &ProductInput,
    ) -> Result<(), CatalogError> {
        let url = self.resource_url(account, product_id);
        let body = product.update_body();

        debug!(
            "Updating product {} fields: {:?}",
            product_id,
            body.keys().collect::<Vec<_>>()
        );

        self.send(Method::POST, &url, Some(&body), account).await?;

        info!("Updated product {}", product_id);

        Ok(())
    }
}
