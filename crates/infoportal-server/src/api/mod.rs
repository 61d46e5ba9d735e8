mod articles;
mod config;
mod login;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use infoportal_store::{AdConfigRepository, ArticleRepository, StoreError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::request_id;

pub use login::AuthState;

#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleRepository,
    pub ad_config: AdConfigRepository,
    pub auth: AuthState,
}

/// Success body for mutating endpoints: `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Failure body: `{"message", "error"}` with the human-readable summary and
/// the raw underlying error text.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
    pub error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unauthorized(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
            status: StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

pub(super) fn map_store_error(req_id: &str, message: &'static str, error: &StoreError) -> ApiError {
    tracing::error!(request_id = req_id, error = %error, "{message}");
    ApiError::internal(message, error.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/articles",
            get(articles::get_articles).post(articles::save_articles),
        )
        .route(
            "/api/config",
            get(config::get_config).post(config::save_config),
        )
        .route("/api/login", post(login::login))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
