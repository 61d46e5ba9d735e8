//! Repositories over the remote blob store.
//!
//! Two singleton JSON documents back the whole portal: the article collection
//! under `articles` and the ad configuration under `adConfig`. Every mutation
//! is a read-modify-write of the full document; the last writer wins and
//! concurrent writers can lose updates. That race is inherent to the storage
//! model and accepted, not worked around here.

mod ad_config;
mod articles;
mod error;

pub use ad_config::{AdConfigRepository, AD_CONFIG_KEY};
pub use articles::{ArticleRepository, ARTICLES_KEY};
pub use error::StoreError;
