//! Loading application configuration (search-engine table + server settings) from TOML.
//!
//! Example:
//! ```toml
//! [server]
//! port = 8080
//!
//! [[search_engines]]
//! id = "wolfram"
//! base_url = "https://www.wolframalpha.com/input/?i="
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::search::{default_engines, SearchEngine, GOOGLE_ENGINE_ID};

pub const CONFIG_PATH_ENV: &str = "MATH_HELPER_CONFIG";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, #[source] source: std::io::Error },
  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, #[source] source: toml::de::Error },
  #[error("search engine id '{0}' is declared more than once")]
  DuplicateEngine(String),
  #[error("search engine id '{0}' is reserved")]
  ReservedEngine(String),
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub server: ServerConfig,
  /// Empty means "use the built-in table".
  #[serde(default)]
  pub search_engines: Vec<SearchEngine>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self { Self { port: DEFAULT_PORT } }
}

fn default_port() -> u16 { DEFAULT_PORT }

impl AppConfig {
  /// Parse and validate a TOML document.
  pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
    let cfg: AppConfig = toml::from_str(s)
      .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    cfg.validate()?;
    Ok(cfg)
  }

  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    Self::from_toml_str(&s, path)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    validate_engines(&self.search_engines)
  }

  /// Effective engine table.
  pub fn engines(&self) -> Vec<SearchEngine> {
    if self.search_engines.is_empty() {
      default_engines()
    } else {
      self.search_engines.clone()
    }
  }
}

/// Engine ids are map keys in the output: each must be unique, and `google`
/// belongs to the synthesized entry.
pub fn validate_engines(engines: &[SearchEngine]) -> Result<(), ConfigError> {
  let mut seen = HashSet::new();
  for engine in engines {
    if engine.id == GOOGLE_ENGINE_ID {
      return Err(ConfigError::ReservedEngine(engine.id.clone()));
    }
    if !seen.insert(engine.id.as_str()) {
      return Err(ConfigError::DuplicateEngine(engine.id.clone()));
    }
  }
  Ok(())
}

/// Load `AppConfig` from MATH_HELPER_CONFIG. Unset -> defaults; any IO/parse/validation
/// error is logged and the defaults are used.
pub fn load_config_from_env() -> AppConfig {
  let Some(path) = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) else {
    return AppConfig::default();
  };
  match AppConfig::load(&path) {
    Ok(cfg) => {
      info!(target: "math_helper", path = %path.display(), engines = cfg.engines().len(), "Loaded config (TOML)");
      cfg
    }
    Err(e) => {
      error!(target: "math_helper", path = %path.display(), error = %e, "Failed to load config; using defaults");
      AppConfig::default()
    }
  }
}
