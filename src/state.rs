//! Application state shared by the HTTP and WebSocket handlers.
//!
//! The advisor is immutable after startup, so handlers only ever read it and
//! no locking is needed.

use tracing::{error, info, instrument};

use crate::advisor::Advisor;
use crate::config::{load_config_from_env, AppConfig, ConfigError};

#[derive(Clone, Debug)]
pub struct AppState {
    pub advisor: Advisor,
    pub config: AppConfig,
}

impl AppState {
    /// Build state from env: load config, then the advisor's engine table.
    #[instrument(level = "info", skip_all)]
    pub fn from_env() -> Self {
        Self::from_config(load_config_from_env()).unwrap_or_else(|e| {
            error!(target: "math_helper", error = %e, "Invalid search engine table; using defaults");
            Self::default()
        })
    }

    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let advisor = Advisor::from_config(&config)?;
        let engines: Vec<&str> = advisor.engines().iter().map(|e| e.id.as_str()).collect();
        info!(target: "math_helper", ?engines, "Search engine table ready");
        Ok(Self { advisor, config })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self { advisor: Advisor::default(), config: AppConfig::default() }
    }
}
