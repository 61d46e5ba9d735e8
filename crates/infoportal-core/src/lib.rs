//! Domain types and pure logic for the InfoPortal backend.
//!
//! Everything here operates on explicit state passed by the caller; no I/O.
//! The persistence crates (`infoportal-kv`, `infoportal-store`) layer the
//! remote blob store underneath these operations.

pub mod ads;
pub mod article;
pub mod auth;

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_KV_BASE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
