use axum::{extract::State, Extension, Json};
use infoportal_core::article::Article;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, AppState, MessageBody};

/// `GET /api/articles` — the full stored collection, empty array when none.
pub(super) async fn get_articles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .articles
        .list()
        .await
        .map_err(|e| map_store_error(&req_id.0, "Failed to fetch articles", &e))?;
    Ok(Json(articles))
}

/// `POST /api/articles` — overwrite the stored collection with the body.
///
/// This is the single write path for every mutation the dashboard and the
/// reader views perform (create, edit, delete, view-increment): the client
/// computes the new full collection and posts it back.
pub(super) async fn save_articles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(articles): Json<Vec<Article>>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .articles
        .replace_all(&articles)
        .await
        .map_err(|e| map_store_error(&req_id.0, "Failed to save articles", &e))?;
    Ok(Json(MessageBody {
        message: "Articles saved successfully",
    }))
}
