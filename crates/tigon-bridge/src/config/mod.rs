//! Bridge config loader (strict parsing).

pub mod schema;

use std::fs;

use tigon_core::error::{Result, TigonError};

pub use schema::{LoggingSection, TigonConfig, ViewSection};

/// File the headless host looks for when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tigon.yaml";

pub fn load_from_file(path: &str) -> Result<TigonConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TigonError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TigonConfig> {
    let cfg: TigonConfig = serde_yaml::from_str(s)
        .map_err(|e| TigonError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
