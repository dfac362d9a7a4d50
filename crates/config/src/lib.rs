pub mod schema;
pub mod watcher;

pub use schema::{
    ChartConfig, ContractsConfig, NetworkConfig, RateConfig, SccsConfig, SwapConfig, ThemeConfig,
};
pub use watcher::ConfigWatcher;

use sccs_core::{Result, SccsError};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SCCS_CONFIG";

/// Load configuration from a TOML file.  Returns `SccsConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<SccsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SccsConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SccsError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<SccsConfig> {
    toml::from_str(raw).map_err(|e| SccsError::Config(format!("TOML parse error: {e}")))
}

/// Return the config path: `$SCCS_CONFIG` if set, otherwise
/// `$XDG_CONFIG_HOME/sccs/sccs.toml`.
pub fn default_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sccs").join("sccs.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/definitely/not/here/sccs.toml").unwrap();
        assert_eq!(cfg.network.chain_id, 31_337);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(parse("[chart\nwidth = "), Err(SccsError::Config(_))));
    }
}
