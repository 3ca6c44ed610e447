use {
    serde::{Deserialize, Serialize},
    std::path::Path,
    thiserror::Error,
};

/// Graph API host the catalog endpoints live on.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";
/// Request timeout applied by [crate::HttpTransport].
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read catalog client config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid catalog client config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for [crate::CatalogClient::new].
///
/// Every key is optional when loading from TOML:
///
/// ```toml
/// base_url = "https://graph.facebook.com"
/// timeout_ms = 30000
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl CatalogClientConfig {
    pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::tempdir};

    #[tokio::test]
    async fn test_conf_loads_with_defaults() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("catalog.toml");

        tokio::fs::write(&path, "timeout_ms = 1500\n")
            .await
            .expect("Failed to write catalog.toml");

        let conf = CatalogClientConfig::load_from_path(&path).await.unwrap();

        assert_eq!(conf.base_url, DEFAULT_BASE_URL);
        assert_eq!(conf.timeout_ms, 1500);
    }

    #[tokio::test]
    async fn test_conf_loads_base_url() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("catalog.toml");

        tokio::fs::write(&path, "base_url = \"http://localhost:9000\"\n")
            .await
            .expect("Failed to write catalog.toml");

        let conf = CatalogClientConfig::load_from_path(&path).await.unwrap();

        assert_eq!(conf.base_url, "http://localhost:9000");
        assert_eq!(conf.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[tokio::test]
    async fn test_conf_missing_file() {
        let tempdir = tempdir().unwrap();

        let err = CatalogClientConfig::load_from_path(tempdir.path().join("nope.toml"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[tokio::test]
    async fn test_conf_invalid_toml() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("catalog.toml");

        tokio::fs::write(&path, "timeout_ms = \"soon\"\n")
            .await
            .expect("Failed to write catalog.toml");

        let err = CatalogClientConfig::load_from_path(&path).await.unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_builder_overrides() {
        let conf = CatalogClientConfig::default()
            .with_base_url("http://127.0.0.1:1234")
            .with_timeout_ms(10);

        assert_eq!(conf.base_url, "http://127.0.0.1:1234");
        assert_eq!(conf.timeout_ms, 10);
    }
}
