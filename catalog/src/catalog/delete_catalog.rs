//! # `DELETE /{version}/{catalog_id}`
//!
//! Deletes a catalog. The response body is not inspected.

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
    pub async fn delete_catalog(
        &self,
        account: &Account,
        catalog_id: &str,
    ) -> Result<(), CatalogError> {
        let url = self.resource_url(account, catalog_id);

        self.send(Method::DELETE, &url, None, account).await?;

        info!("Deleted catalog {}", catalog_id);

        Ok(())
    }
}
