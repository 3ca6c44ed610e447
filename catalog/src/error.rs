use {
    reqwest::StatusCode,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Error kind enumeration for catalog operations
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogErrorKind {
    /// Network-related error
    Network,
    /// Connection error
    Connection,
    /// Timeout error
    Timeout,
    /// Error parsing response
    Parse,
    /// Invalid or expired access token
    Auth,
    /// Token lacks the permission for this business or catalog
    Forbidden,
    /// Resource not found
    NotFound,
    /// Rate limit exceeded
    RateLimit,
    /// Server error
    Server,
    /// Graph API rejected the request
    Api,
    /// Unknown error
    Unknown,
}

impl CatalogErrorKind {
    /// Maps a Graph API error code to an error kind, if the code is a
    /// well-known one.
    pub fn from_api_code(code: i64) -> Option<Self> {
        match code {
            102 | 190 => Some(Self::Auth),
            4 | 17 | 32 | 613 => Some(Self::RateLimit),
            10 | 200..=299 => Some(Self::Forbidden),
            _ => None,
        }
    }

    /// Maps HTTP status code to an error kind
    pub fn from_status_code(status_code: u16) -> Self {
        match status_code {
            401 => Self::Auth,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 => Self::Timeout,
            429 => Self::RateLimit,
            400..=499 => Self::Api,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Maps network error to an error kind
    pub fn from_network_error(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connection
        } else {
            Self::Network
        }
    }
}

/// Error envelope the Graph API returns alongside non-2xx statuses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fbtrace_id: Option<String>,
}

/// Transport-level failure or non-success HTTP status.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(
        "Graph API error ({status}): {} (type: {}, code: {})",
        .error.message,
        .error.error_type,
        .error.code
    )]
    Api {
        status: StatusCode,
        error: ApiErrorDetail,
    },

    #[error("Graph API status error: {status}")]
    Status { status: StatusCode, body: String },
}

/// Error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::Request(RequestError::Network(e)) => {
                CatalogErrorKind::from_network_error(e)
            }
            CatalogError::Request(RequestError::Api { status, error }) => {
                CatalogErrorKind::from_api_code(error.code)
                    .unwrap_or_else(|| CatalogErrorKind::from_status_code(status.as_u16()))
            }
            CatalogError::Request(RequestError::Status { status, .. }) => {
                CatalogErrorKind::from_status_code(status.as_u16())
            }
            CatalogError::Decode(_) => CatalogErrorKind::Parse,
        }
    }

    /// HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CatalogError::Request(RequestError::Network(e)) => e.status().map(|s| s.as_u16()),
            CatalogError::Request(RequestError::Api { status, .. })
            | CatalogError::Request(RequestError::Status { status, .. }) => Some(status.as_u16()),
            CatalogError::Decode(_) => None,
        }
    }
}
