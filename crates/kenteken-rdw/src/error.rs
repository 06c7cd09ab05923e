use thiserror::Error;

/// Errors returned by the RDW registry client.
#[derive(Debug, Error)]
pub enum RdwError {
    /// Network or TLS failure, or a non-2xx HTTP status, from the underlying
    /// HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Pattern search was invoked with an empty term list.
    #[error("pattern search requires at least one non-empty term")]
    EmptyQuery,
}
