use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub kv_account_id: String,
    pub kv_namespace_id: String,
    pub kv_api_token: String,
    pub kv_base_url: String,
    pub kv_timeout_secs: u64,
    pub admin_secret: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("kv_account_id", &self.kv_account_id)
            .field("kv_namespace_id", &self.kv_namespace_id)
            .field("kv_api_token", &"[redacted]")
            .field("kv_base_url", &self.kv_base_url)
            .field("kv_timeout_secs", &self.kv_timeout_secs)
            .field(
                "admin_secret",
                &self.admin_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
