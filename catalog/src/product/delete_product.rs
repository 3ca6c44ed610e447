//! # `DELETE /{version}/{product_id}`

use {
    crate::{
        account::Account,
        catalog_client::CatalogClient,
        error::CatalogError,
        transport::Transport,
    },
    log::info,
    reqwest::Method,
};

impl<T: Transport> CatalogClient<T> {
    pub async fn delete_product(
        &self,
        account: &Account,
        product_id: &str,
    ) -> Result<(), CatalogError> {
        let url = self.resource_url(account, product_id);

        self.send(Method::DELETE, &url, None, account).await?;

        info!("Deleted product {}", product_id);

        Ok(())
    }
}
