use infoportal_core::ads::{default_config, merge_with_defaults, AdConfigState};
use infoportal_kv::KvClient;

use crate::error::StoreError;

/// Blob store key holding the ad configuration as one JSON object.
pub const AD_CONFIG_KEY: &str = "adConfig";

/// Repository for the singleton ad configuration document.
#[derive(Debug, Clone)]
pub struct AdConfigRepository {
    kv: KvClient,
}

impl AdConfigRepository {
    #[must_use]
    pub fn new(kv: KvClient) -> Self {
        Self { kv }
    }

    /// The stored JSON value verbatim; `{}` when nothing is stored.
    ///
    /// This is what the HTTP boundary serves: no merging, no reshaping.
    ///
    /// # Errors
    ///
    /// [`StoreError::Kv`] on store failure, [`StoreError::Malformed`] when
    /// the stored value is not valid JSON.
    pub async fn load_raw(&self) -> Result<serde_json::Value, StoreError> {
        match self.kv.get(AD_CONFIG_KEY).await? {
            None => Ok(serde_json::Value::Object(serde_json::Map::new())),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: AD_CONFIG_KEY,
                source,
            }),
        }
    }

    /// The effective configuration: stored entries shallow-merged over the
    /// built-in defaults per top-level map. An absent or empty stored object
    /// yields the defaults verbatim.
    ///
    /// # Errors
    ///
    /// [`StoreError::Kv`] on store failure, [`StoreError::Malformed`] when
    /// the stored value does not parse as an ad configuration.
    pub async fn load(&self) -> Result<AdConfigState, StoreError> {
        match self.kv.get(AD_CONFIG_KEY).await? {
            None => Ok(default_config()),
            Some(raw) => {
                let stored: AdConfigState =
                    serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                        key: AD_CONFIG_KEY,
                        source,
                    })?;
                Ok(merge_with_defaults(stored))
            }
        }
    }

    /// Overwrites the stored configuration. Pure overwrite: the caller is
    /// responsible for the state it persists, no merge happens here.
    ///
    /// # Errors
    ///
    /// [`StoreError::Kv`] on store failure.
    pub async fn save(&self, config: &AdConfigState) -> Result<(), StoreError> {
        let raw = serde_json::to_string(config).map_err(|source| StoreError::Malformed {
            key: AD_CONFIG_KEY,
            source,
        })?;
        self.kv.put(AD_CONFIG_KEY, raw).await?;
        Ok(())
    }
}
