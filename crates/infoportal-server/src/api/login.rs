use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use infoportal_core::auth::{Access, CredentialCheck, StaticSecret};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState, MessageBody};

/// The secret the portal shipped with; only ever used in development when no
/// secret is configured.
const DEV_FALLBACK_SECRET: &str = "admin123";

/// Admin credential check used by the login endpoint.
///
/// Holds the check behind a trait object so a real authentication mechanism
/// can replace the shared secret without touching the handlers.
#[derive(Clone)]
pub struct AuthState {
    check: Arc<dyn CredentialCheck>,
}

impl AuthState {
    /// Builds the check from the configured admin secret.
    ///
    /// In development a missing secret falls back to the historical default
    /// with a warning. In any other environment a missing secret fails
    /// startup.
    ///
    /// # Errors
    ///
    /// Returns an error when no secret is configured outside development.
    pub fn from_config(admin_secret: Option<&str>, is_development: bool) -> anyhow::Result<Self> {
        let secret = match admin_secret {
            Some(s) if !s.is_empty() => s.to_owned(),
            _ if is_development => {
                tracing::warn!(
                    "PORTAL_ADMIN_SECRET not set; using the development default secret"
                );
                DEV_FALLBACK_SECRET.to_owned()
            }
            _ => anyhow::bail!("PORTAL_ADMIN_SECRET is required outside development"),
        };
        Ok(Self::with_check(Arc::new(StaticSecret::new(secret))))
    }

    /// Wraps an arbitrary credential check.
    #[must_use]
    pub fn with_check(check: Arc<dyn CredentialCheck>) -> Self {
        Self { check }
    }

    fn authenticate(&self, credential: &str) -> Access {
        self.check.authenticate(credential)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginRequest {
    password: String,
}

/// `POST /api/login` — validate the admin credential.
///
/// Stateless by design: there is no session to create, the dashboard simply
/// gates itself on the answer.
pub(super) async fn login(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    match state.auth.authenticate(&body.password) {
        Access::Authorized => Ok(Json(MessageBody {
            message: "Login successful",
        })),
        Access::Denied => {
            tracing::warn!(request_id = %req_id.0, "admin login denied");
            Err(ApiError::unauthorized("Login failed", "invalid credentials"))
        }
    }
}
