use thiserror::Error;

/// Errors returned by the blob store client.
///
/// A remote 404 is not an error; both operations normalize it before this
/// type comes into play.
#[derive(Debug, Error)]
pub enum KvError {
    /// Network/TLS failure, or a non-success HTTP status from the store.
    #[error("key-value store error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse.
    #[error("invalid key-value store base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
