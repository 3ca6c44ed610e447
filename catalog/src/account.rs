use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Business context every catalog call is made on behalf of.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    /// Graph API version, e.g. `v21.0`
    pub api_version: String,
    /// Business account that owns the catalogs
    pub business_id: String,
    /// Access token sent as a bearer token
    pub access_token: String,
}

impl Account {
    pub fn new(
        api_version: impl Into<String>,
        business_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            business_id: business_id.into(),
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("api_version", &self.api_version)
            .field("business_id", &self.business_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
