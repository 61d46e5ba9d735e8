use chrono::Utc;
use infoportal_core::article::{
    create_article, delete_article, increment_views, update_article, Article, ArticleDraft,
};
use infoportal_kv::KvClient;

use crate::error::StoreError;

/// Blob store key holding the full article collection as one JSON array.
pub const ARTICLES_KEY: &str = "articles";

/// Repository for the article collection.
///
/// There is no partial-update path: every mutation loads the full array,
/// applies a pure transformation from `infoportal_core::article`, and writes
/// the whole array back.
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    kv: KvClient,
}

impl ArticleRepository {
    #[must_use]
    pub fn new(kv: KvClient) -> Self {
        Self { kv }
    }

    /// Fetches the stored collection; an absent key is an empty collection.
    ///
    /// # Errors
    ///
    /// [`StoreError::Kv`] on store failure, [`StoreError::Malformed`] when
    /// the stored value is not a JSON array of articles.
    pub async fn list(&self) -> Result<Vec<Article>, StoreError> {
        match self.kv.get(ARTICLES_KEY).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: ARTICLES_KEY,
                source,
            }),
        }
    }

    /// Overwrites the stored collection with `articles`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Kv`] on store failure.
    pub async fn replace_all(&self, articles: &[Article]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(articles).map_err(|source| StoreError::Malformed {
            key: ARTICLES_KEY,
            source,
        })?;
        self.kv.put(ARTICLES_KEY, raw).await?;
        Ok(())
    }

    /// Creates an article from the draft, prepends it, and persists.
    ///
    /// The creation timestamp doubles as the id.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::list`] / [`ArticleRepository::replace_all`].
    pub async fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError> {
        let mut articles = self.list().await?;
        let article = create_article(&mut articles, draft, Utc::now().timestamp_millis());
        self.replace_all(&articles).await?;
        Ok(article)
    }

    /// Replaces the editable fields of the article with `id` and persists.
    ///
    /// Returns `Ok(None)` without writing when no article carries that id.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::list`] / [`ArticleRepository::replace_all`].
    pub async fn update(&self, id: i64, draft: ArticleDraft) -> Result<Option<Article>, StoreError> {
        let mut articles = self.list().await?;
        match update_article(&mut articles, id, draft) {
            Some(article) => {
                self.replace_all(&articles).await?;
                Ok(Some(article))
            }
            None => Ok(None),
        }
    }

    /// Removes the article with `id` and persists. A missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::list`] / [`ArticleRepository::replace_all`].
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut articles = self.list().await?;
        if delete_article(&mut articles, id) {
            self.replace_all(&articles).await?;
            Ok(true)
        } else {
            tracing::debug!(id, "delete for unknown article id ignored");
            Ok(false)
        }
    }

    /// Adds one view to the article with `id` and persists. A missing id is
    /// a no-op.
    ///
    /// Concurrent increments from different readers race on the final write;
    /// the last full write wins and increments can be lost.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::list`] / [`ArticleRepository::replace_all`].
    pub async fn increment_views(&self, id: i64) -> Result<bool, StoreError> {
        let mut articles = self.list().await?;
        if increment_views(&mut articles, id) {
            self.replace_all(&articles).await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
