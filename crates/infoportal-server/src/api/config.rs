use axum::{extract::State, Extension, Json};
use infoportal_core::ads::AdConfigState;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, AppState, MessageBody};

/// `GET /api/config` — the stored ad configuration verbatim, `{}` when none.
///
/// The stored-over-default merge belongs to consumers of the configuration,
/// not to the boundary; serving the raw document keeps it a faithful echo of
/// what the dashboard last saved.
pub(super) async fn get_config(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let raw = state
        .ad_config
        .load_raw()
        .await
        .map_err(|e| map_store_error(&req_id.0, "Failed to fetch ad config", &e))?;
    Ok(Json(raw))
}

/// `POST /api/config` — overwrite the stored ad configuration.
pub(super) async fn save_config(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(config): Json<AdConfigState>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .ad_config
        .save(&config)
        .await
        .map_err(|e| map_store_error(&req_id.0, "Failed to save ad config", &e))?;
    Ok(Json(MessageBody {
        message: "Ad config saved successfully",
    }))
}
