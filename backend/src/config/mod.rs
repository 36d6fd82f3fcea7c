use ::config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    /// How far a login message timestamp may be from the server clock.
    pub login_window_secs: u64,
    /// JSON snapshot of the ledger; memory only when unset.
    pub ledger_snapshot_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Config::builder()
            .set_default("port", 3000)?
            .set_default("token_ttl_hours", 24)?
            .set_default("login_window_secs", 300)?
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("login_window_secs", &self.login_window_secs)
            .field("ledger_snapshot_path", &self.ledger_snapshot_path)
            .finish()
    }
}
