use thiserror::Error;

/// Errors surfaced by the repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The blob store call failed (transport or non-success status).
    #[error(transparent)]
    Kv(#[from] infoportal_kv::KvError),

    /// The stored value under `key` is not the JSON the portal expects.
    #[error("malformed stored value under '{key}': {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
