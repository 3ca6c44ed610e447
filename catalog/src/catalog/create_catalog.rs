//! # `POST /{version}/{business_id}/owned_product_catalogs`
//!
//! Creates a new product catalog owned by the account's business.

use {
    crate::{
        account::Account,
        catalog_client::{CatalogClient, CreatedResponse},
        error::CatalogError,
        transport::{RequestBody, Transport},
    },
    log::info,
    reqwest::Method,
};

impl<T: Transport> CatalogClient<T> {
    /// Creates a catalog named `name` and returns its ID.
    pub async fn create_catalog(
        &self,
        account: &Account,
        name: &str,
    ) -> Result<String, CatalogError> {
        let url = self.catalogs_url(account);
        let body = RequestBody::from([("name", name.to_string())]);

        let created: CreatedResponse = self
            .send_and_decode(Method::POST, &url, Some(&body), account)
            .await?;

        info!(
            "Created catalog {} for business {}",
            created.id, account.business_id
        );

        Ok(created.id)
    }
}
