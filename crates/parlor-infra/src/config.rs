//! Global configuration loader for Parlor.
//!
//! Reads `config.toml` from the data directory (`~/.parlor/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing, malformed, or holds out-of-range values.

use std::path::Path;

use parlor_types::config::GlobalConfig;

use crate::filesystem::config_path;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse or validate, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    let config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return GlobalConfig::default();
        }
    };

    if let Err(err) = config.validate() {
        tracing::warn!("Invalid {}: {err}, using defaults", config_path.display());
        return GlobalConfig::default();
    }
    config
}

/// Resolve the reply endpoint URL.
///
/// Priority:
/// 1. Command-line / environment override (`--endpoint`, `PARLOR_ENDPOINT`)
/// 2. `endpoint.url` from `config.toml`
pub fn resolve_endpoint(global_config: &GlobalConfig, cli_override: Option<&str>) -> String {
    cli_override
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| global_config.endpoint.url.clone())
}

/// Resolve the pacing seed: the CLI value wins over the config file.
///
/// `None` means pacing is seeded from OS entropy.
pub fn resolve_seed(global_config: &GlobalConfig, cli_override: Option<u64>) -> Option<u64> {
    cli_override.or(global_config.seed)
}
