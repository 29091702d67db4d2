//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection failure, timeout,
    /// or the body could not be read).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The configured base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("Cannot parse response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server rejected the authentication token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
