//! Article collection model and its pure mutation operations.
//!
//! The stored representation is a single JSON array under the `articles` key,
//! newest-first. Every mutation is expressed as a transformation over the full
//! in-memory collection; the caller persists the result with one overwrite.
//! Field names follow the original camelCase JSON so existing stored data
//! parses unchanged.

use serde::{Deserialize, Serialize};

use crate::ads::AdSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    /// View counter; older stored records may omit it entirely.
    #[serde(default)]
    pub views: u64,
    pub created_at: i64,
    /// Per-article ad overrides. Omitted from JSON when absent so untouched
    /// records round-trip byte-for-byte.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_config: Option<ArticleAdOverrides>,
}

/// Article-level ad slot overrides, keyed to the two in-article placements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAdOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_rectangle: Option<AdSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_sidebar: Option<AdSlot>,
}

impl ArticleAdOverrides {
    /// Looks up an override by slot name. Names outside the two in-article
    /// placements have no article-level source.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&AdSlot> {
        match name {
            crate::ads::slot::ARTICLE_RECTANGLE => self.article_rectangle.as_ref(),
            crate::ads::slot::ARTICLE_SIDEBAR => self.article_sidebar.as_ref(),
            _ => None,
        }
    }
}

/// The admin form field set: everything the editor supplies directly.
///
/// `id`, `views`, and `created_at` are never taken from the form; they are
/// assigned on create and preserved on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_config: Option<ArticleAdOverrides>,
}

/// Creates a new article from the draft and prepends it (newest-first).
///
/// `now` is a millisecond timestamp and doubles as the article id, matching
/// the stored data produced by the original system.
pub fn create_article(articles: &mut Vec<Article>, draft: ArticleDraft, now: i64) -> Article {
    let article = Article {
        id: now,
        title: draft.title,
        category: draft.category,
        image: draft.image,
        excerpt: draft.excerpt,
        content: draft.content,
        read_time: draft.read_time,
        views: 0,
        created_at: now,
        ad_config: draft.ad_config,
    };
    articles.insert(0, article.clone());
    article
}

/// Replaces the editable fields of the article with the given id.
///
/// `id`, `views`, and `created_at` are preserved. Returns the updated article,
/// or `None` when no article carries that id.
pub fn update_article(articles: &mut [Article], id: i64, draft: ArticleDraft) -> Option<Article> {
    let existing = articles.iter_mut().find(|a| a.id == id)?;
    existing.title = draft.title;
    existing.category = draft.category;
    existing.image = draft.image;
    existing.excerpt = draft.excerpt;
    existing.content = draft.content;
    existing.read_time = draft.read_time;
    existing.ad_config = draft.ad_config;
    Some(existing.clone())
}

/// Removes the article with the given id. Returns `false` when absent.
pub fn delete_article(articles: &mut Vec<Article>, id: i64) -> bool {
    let before = articles.len();
    articles.retain(|a| a.id != id);
    articles.len() != before
}

/// Adds one view to the article with the given id. Returns `false` when
/// absent, leaving the collection untouched.
pub fn increment_views(articles: &mut [Article], id: i64) -> bool {
    match articles.iter_mut().find(|a| a.id == id) {
        Some(article) => {
            article.views += 1;
            true
        }
        None => false,
    }
}
