//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body did not decode into the expected type.
    #[error("Failed to parse response with status {status}: {source}")]
    Parse {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    /// The body decoded as JSON but not into the expected structure.
    #[error("Unexpected response shape: expected {expected}")]
    UnexpectedShape { expected: &'static str, body: String },
    /// A product listing the caller relied on came back as not found.
    #[error("Product list not found")]
    ProductListMissing,
    /// A category listing had no products to take an image from.
    #[error("Category {category} has no products")]
    EmptyCategory { category: String },
}

impl Error {
    /// Returns the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Parse { status, .. } => Some(*status),
            Error::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
