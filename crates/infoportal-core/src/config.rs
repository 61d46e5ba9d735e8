use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Production endpoint of the hosted key-value store.
pub const DEFAULT_KV_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // All three store credentials are mandatory; fail before any network call.
    let kv_account_id = require("CLOUDFLARE_ACCOUNT_ID")?;
    let kv_namespace_id = require("CLOUDFLARE_NAMESPACE_ID")?;
    let kv_api_token = require("CLOUDFLARE_API_TOKEN")?;

    let env = parse_environment(&or_default("PORTAL_ENV", "development"));
    let bind_addr = parse_addr("PORTAL_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PORTAL_LOG_LEVEL", "info");
    let kv_base_url = or_default("PORTAL_KV_BASE_URL", DEFAULT_KV_BASE_URL);
    let kv_timeout_secs = parse_u64("PORTAL_KV_TIMEOUT_SECS", "30")?;
    let admin_secret = lookup("PORTAL_ADMIN_SECRET").ok();

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        kv_account_id,
        kv_namespace_id,
        kv_api_token,
        kv_base_url,
        kv_timeout_secs,
        admin_secret,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("CLOUDFLARE_ACCOUNT_ID", "acct-123");
        m.insert("CLOUDFLARE_NAMESPACE_ID", "ns-456");
        m.insert("CLOUDFLARE_API_TOKEN", "token-789");
        m
    }

    #[test]
    fn parse_environment_variants() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn fails_without_account_id() {
        let mut map = full_env();
        map.remove("CLOUDFLARE_ACCOUNT_ID");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CLOUDFLARE_ACCOUNT_ID"),
            "expected MissingEnvVar(CLOUDFLARE_ACCOUNT_ID), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_namespace_id() {
        let mut map = full_env();
        map.remove("CLOUDFLARE_NAMESPACE_ID");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CLOUDFLARE_NAMESPACE_ID"),
            "expected MissingEnvVar(CLOUDFLARE_NAMESPACE_ID), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_api_token() {
        let mut map = full_env();
        map.remove("CLOUDFLARE_API_TOKEN");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CLOUDFLARE_API_TOKEN"),
            "expected MissingEnvVar(CLOUDFLARE_API_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("PORTAL_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORTAL_BIND_ADDR"),
            "expected InvalidEnvVar(PORTAL_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn fails_with_invalid_kv_timeout() {
        let mut map = full_env();
        map.insert("PORTAL_KV_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORTAL_KV_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PORTAL_KV_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults_applied() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.kv_account_id, "acct-123");
        assert_eq!(cfg.kv_namespace_id, "ns-456");
        assert_eq!(cfg.kv_api_token, "token-789");
        assert_eq!(cfg.kv_base_url, DEFAULT_KV_BASE_URL);
        assert_eq!(cfg.kv_timeout_secs, 30);
        assert!(cfg.admin_secret.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let mut map = full_env();
        map.insert("PORTAL_ENV", "production");
        map.insert("PORTAL_BIND_ADDR", "127.0.0.1:8080");
        map.insert("PORTAL_KV_BASE_URL", "http://localhost:9999");
        map.insert("PORTAL_KV_TIMEOUT_SECS", "5");
        map.insert("PORTAL_ADMIN_SECRET", "s3cret");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.kv_base_url, "http://localhost:9999");
        assert_eq!(cfg.kv_timeout_secs, 5);
        assert_eq!(cfg.admin_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut map = full_env();
        map.insert("PORTAL_ADMIN_SECRET", "s3cret");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("token-789"));
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("[redacted]"));
    }
}
