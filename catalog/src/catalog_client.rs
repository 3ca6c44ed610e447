//! Catalog API client implementation
//!
//! This module provides the client type, the URL layout of the catalog
//! endpoints and the response envelopes shared by all operations. The
//! operations themselves live in [crate::catalog] and [crate::product].

use {
    crate::{
        account::Account,
        config::CatalogClientConfig,
        error::CatalogError,
        transport::{HttpTransport, RequestBody, Transport},
    },
    reqwest::Method,
    serde::{de::DeserializeOwned, Deserialize},
};

/// Catalog API client. Holds no state between calls besides the transport
/// and the base URL, so a single instance can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct CatalogClient<T = HttpTransport> {
    /// Transport performing the HTTP calls
    transport: T,
    /// Base URL of the Graph API, without trailing slash
    base_url: String,
}

impl CatalogClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured Graph API host
    pub fn new(config: &CatalogClientConfig) -> Result<Self, CatalogError> {
        let transport = HttpTransport::new(config)?;

        Ok(Self::with_transport(transport, config.base_url.as_str()))
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Creates a client on top of any [Transport]
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            transport,
            base_url,
        }
    }

    /// Returns the base API URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/{version}/{business_id}/owned_product_catalogs`
    pub(crate) fn catalogs_url(&self, account: &Account) -> String {
        format!(
            "{}/{}/{}/owned_product_catalogs",
            self.base_url, account.api_version, account.business_id
        )
    }

    /// `{base}/{version}/{catalog_id}/products`
    pub(crate) fn catalog_products_url(&self, account: &Account, catalog_id: &str) -> String {
        format!(
            "{}/{}/{}/products",
            self.base_url, account.api_version, catalog_id
        )
    }

    /// `{base}/{version}/{id}` for a single catalog or product
    pub(crate) fn resource_url(&self, account: &Account, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, account.api_version, id)
    }

    /// Sends a request and returns the raw successful response body
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&RequestBody>,
        account: &Account,
    ) -> Result<Vec<u8>, CatalogError> {
        let bytes = self
            .transport
            .do_request(method, url, body, &account.access_token)
            .await?;

        Ok(bytes)
    }

    /// Sends a request and decodes the response body into `R`
    pub(crate) async fn send_and_decode<R>(
        &self,
        method: Method,
        url: &str,
        body: Option<&RequestBody>,
        account: &Account,
    ) -> Result<R, CatalogError>
    where
        R: DeserializeOwned,
    {
        let bytes = self.send(method, url, body, account).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// `{"id": "..."}` returned when a catalog or product is created
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedResponse {
    pub id: String,
}

/// `{"data": [...]}` returned by collection endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<D> {
    pub data: Vec<D>,
}
