//! # `GET /{version}/{business_id}/owned_product_catalogs`
//!
//! Lists the catalogs owned by the account's business.

use {
    crate::{
        account::Account,
        catalog::models::CatalogInfo,
        catalog_client::{CatalogClient, DataEnvelope},
        error::CatalogError,
        transport::Transport,
    },
    reqwest::Method,
};

impl<T: Transport> CatalogClient<T> {
    pub async fn list_catalogs(&self, account: &Account) -> Result<Vec<CatalogInfo>, CatalogError> {
        let url = self.catalogs_url(account);

        let envelope: DataEnvelope<CatalogInfo> = self
            .send_and_decode(Method::GET, &url, None, account)
            .await?;

        Ok(envelope.data)
    }
}
