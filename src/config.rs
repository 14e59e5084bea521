use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::{info, warn};

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";
const DEV_JWT_SECRET: &str = "isletme-dev-secret-change-me";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// When unset the server runs on the seeded in-memory store.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub auto_migrate: bool,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Layered configuration: built-in defaults, then `config/default.toml` and
/// `config/<RUN_ENV>.toml` when present, then `APP__`-prefixed environment
/// variables (e.g. `APP__DATABASE_URL`, `APP__PORT`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "config directory '{}' not found; using built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let mut builder = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 5000)?
        .set_default("environment", run_env.clone())?
        .set_default("log_level", "info")?
        .set_default("log_json", false)?
        .set_default("auto_migrate", true)?
        .set_default("jwt_secret", DEV_JWT_SECRET)?
        .set_default("jwt_expiration", 86400)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false));

    // Bare DATABASE_URL is honoured the way the original deployment set it.
    if let Ok(url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database_url", url)?;
    }

    let config = builder
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let cfg: AppConfig = config.try_deserialize()?;

    if cfg.jwt_secret == DEV_JWT_SECRET {
        if cfg.is_production() {
            return Err(ConfigError::Message(
                "jwt_secret must be set in production (APP__JWT_SECRET)".to_string(),
            ));
        }
        warn!("using built-in development jwt_secret; set APP__JWT_SECRET for real deployments");
    }

    Ok(cfg)
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the configured
/// level; `log_json` switches to structured JSON output.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directive = format!("isletme_api={},tower_http=info", level);
    let filter = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(fmt::layer())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_files() {
        let cfg = load_config().expect("defaults should load");
        assert_eq!(cfg.port, 5000);
        assert!(!cfg.is_production());
        assert!(cfg.auto_migrate);
    }
}
