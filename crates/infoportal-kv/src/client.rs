use std::time::Duration;

use reqwest::{
    header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE},
    Client, StatusCode, Url,
};

use crate::error::KvError;

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Client for the hosted key-value store.
///
/// Holds the HTTP client, bearer token, and the account/namespace the two
/// portal documents live under. Use [`KvClient::new`] for production or
/// [`KvClient::with_base_url`] to point at a mock server in tests.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct KvClient {
    client: Client,
    api_token: String,
    account_id: String,
    namespace_id: String,
    base_url: Url,
}

impl KvClient {
    /// Creates a client pointed at the production store endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        account_id: &str,
        namespace_id: &str,
        api_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, KvError> {
        Self::with_base_url(account_id, namespace_id, api_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`KvError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        account_id: &str,
        namespace_id: &str,
        api_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, KvError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("infoportal/0.1 (article-portal)")
            .build()?;

        let normalised = base_url.trim_end_matches('/');
        let base_url = Url::parse(normalised).map_err(|e| KvError::InvalidBaseUrl {
            url: normalised.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_token: api_token.to_owned(),
            account_id: account_id.to_owned(),
            namespace_id: namespace_id.to_owned(),
            base_url,
        })
    }

    /// Fetches the raw string value stored under `key`.
    ///
    /// Returns `Ok(None)` when the store reports the key as absent (404).
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Http`] on transport failure or any other
    /// non-success status.
    pub async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let url = self.value_url(key)?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.bearer())
            // Always read the store of record, never an intermediary cache.
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.text().await?))
    }

    /// Overwrites the value stored under `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Http`] on transport failure or a non-success status.
    pub async fn put(&self, key: &str, value: String) -> Result<(), KvError> {
        let url = self.value_url(key)?;
        let response = self
            .client
            .put(url)
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, "text/plain")
            .body(value)
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token)
    }

    /// Builds `{base}/accounts/{a}/storage/kv/namespaces/{n}/values/{key}`
    /// with the key percent-encoded as a single path segment.
    fn value_url(&self, key: &str) -> Result<Url, KvError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| KvError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend([
                "accounts",
                &self.account_id,
                "storage",
                "kv",
                "namespaces",
                &self.namespace_id,
                "values",
                key,
            ]);
        Ok(url)
    }
}

impl std::fmt::Debug for KvClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvClient")
            .field("account_id", &self.account_id)
            .field("namespace_id", &self.namespace_id)
            .field("api_token", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> KvClient {
        KvClient::with_base_url("acct", "ns", "test-token", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn value_url_contains_account_namespace_and_key() {
        let client = test_client("https://api.cloudflare.com/client/v4");
        let url = client.value_url("articles").expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.cloudflare.com/client/v4/accounts/acct/storage/kv/namespaces/ns/values/articles"
        );
    }

    #[test]
    fn value_url_tolerates_trailing_slash_in_base() {
        let client = test_client("http://localhost:8787/");
        let url = client.value_url("adConfig").expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8787/accounts/acct/storage/kv/namespaces/ns/values/adConfig"
        );
    }

    #[test]
    fn value_url_encodes_unusual_keys() {
        let client = test_client("http://localhost:8787");
        let url = client.value_url("odd key/name").expect("url");
        assert!(
            url.as_str().ends_with("/values/odd%20key%2Fname"),
            "key should be encoded as one segment: {url}"
        );
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let client = test_client("http://localhost:8787");
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-token"));
        assert!(debug.contains("[redacted]"));
    }
}
