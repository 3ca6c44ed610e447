//! HTTP plumbing behind [crate::CatalogClient].
//!
//! The client only builds URLs and bodies and decodes responses. Sending the
//! request, attaching the access token and turning non-2xx statuses into
//! errors is the job of a [Transport].

use {
    crate::{
        config::CatalogClientConfig,
        error::{ApiErrorBody, RequestError},
    },
    log::{debug, warn},
    reqwest::{Client, Method},
    std::{collections::BTreeMap, future::Future, sync::Arc, time::Duration},
};

/// Flat string-keyed request payload, serialized as a JSON object.
pub type RequestBody = BTreeMap<&'static str, String>;

/// Performs a single authenticated HTTP call and returns the raw response
/// body of a successful (2xx) response.
///
/// Cancelling is done by dropping the returned future.
pub trait Transport: Send + Sync {
    fn do_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&RequestBody>,
        access_token: &str,
    ) -> impl Future<Output = Result<Vec<u8>, RequestError>> + Send;
}

/// [Transport] backed by a shared [reqwest::Client].
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Arc<Client>,
}

impl HttpTransport {
    pub fn new(config: &CatalogClientConfig) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Transport for HttpTransport {
    async fn do_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&RequestBody>,
        access_token: &str,
    ) -> Result<Vec<u8>, RequestError> {
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url).bearer_auth(access_token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        warn!("Catalog request to {} failed with status {}", url, status);

        match serde_json::from_slice::<ApiErrorBody>(&bytes) {
            Ok(ApiErrorBody { error }) => Err(RequestError::Api { status, error }),
            Err(_) => Err(RequestError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ::{
            mockito::{Matcher, Server},
            reqwest::StatusCode,
            serde_json::json,
        },
    };

    fn transport() -> HttpTransport {
        HttpTransport::new(&CatalogClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bearer_token_and_json_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/v21.0/biz/owned_product_catalogs")
            .match_header("authorization", "Bearer token_123")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "name": "Summer" })))
            .with_status(200)
            .with_body(r#"{"id":"cat_1"}"#)
            .create_async()
            .await;

        let body = RequestBody::from([("name", "Summer".to_string())]);
        let url = format!("{}/v21.0/biz/owned_product_catalogs", server.url());

        let bytes = transport()
            .do_request(Method::POST, &url, Some(&body), "token_123")
            .await
            .unwrap();

        assert_eq!(bytes, br#"{"id":"cat_1"}"#.to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_maps_graph_error_envelope() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v21.0/cat_1/products")
            .with_status(400)
            .with_body(
                json!({
                    "error": {
                        "message": "Invalid OAuth access token.",
                        "type": "OAuthException",
                        "code": 190,
                        "fbtrace_id": "A1b2"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let url = format!("{}/v21.0/cat_1/products", server.url());
        let err = transport()
            .do_request(Method::GET, &url, None, "bad")
            .await
            .unwrap_err();

        match err {
            RequestError::Api { status, error } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(error.code, 190);
                assert_eq!(error.message, "Invalid OAuth access token.");
            }
            other => panic!("Expected API error, got: {}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_maps_plain_status_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("DELETE", "/v21.0/cat_1")
            .with_status(502)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let url = format!("{}/v21.0/cat_1", server.url());
        let err = transport()
            .do_request(Method::DELETE, &url, None, "token")
            .await
            .unwrap_err();

        match err {
            RequestError::Status { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream unavailable");
            }
            other => panic!("Expected status error, got: {}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_network_error() {
        let err = transport()
            .do_request(Method::GET, "http://127.0.0.1:1/v21.0/x", None, "token")
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::Network(_)));
    }
}
