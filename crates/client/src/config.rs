//! Configuration loader
//!
//! Loads API configuration with automatic fallback:
//! 1. Environment variables (a `.env` file is honoured in development)
//! 2. A `lectern.toml` / `config.toml` probe in the working directory
//! 3. The documented local-development default
//!
//! ## Environment Variables
//! - `LECTERN_API_BASE_URL`: base URL of the admin API
//! - `LECTERN_API_TIMEOUT_SECS`: per-request timeout in seconds (optional)

use std::path::{Path, PathBuf};

use lectern_domain::{ApiConfig, LecternError};

const ENV_BASE_URL: &str = "LECTERN_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "LECTERN_API_TIMEOUT_SECS";

const CONFIG_FILE_CANDIDATES: &[&str] = &["lectern.toml", "config.toml"];

/// Load configuration with the fallback strategy above.
///
/// # Errors
/// Returns `LecternError::Config` when a source is present but malformed
/// (unparseable timeout, invalid TOML). A missing source is not an error;
/// the loader falls through to the next one.
pub fn load() -> Result<ApiConfig, LecternError> {
    // Pull in a developer .env if one exists; ignored in production images
    dotenvy::dotenv().ok();

    if let Some(config) = load_from_env()? {
        tracing::info!("configuration loaded from environment");
        return Ok(config);
    }

    if let Some(path) = probe_config_paths() {
        tracing::info!(path = %path.display(), "configuration loaded from file");
        return load_from_file(&path);
    }

    tracing::info!("no configuration source found, using local-development defaults");
    Ok(ApiConfig::default())
}

/// Load configuration from environment variables.
///
/// Returns `Ok(None)` when the base URL variable is unset.
///
/// # Errors
/// Returns `LecternError::Config` when the timeout variable is present but
/// not a positive integer.
pub fn load_from_env() -> Result<Option<ApiConfig>, LecternError> {
    let Ok(base_url) = std::env::var(ENV_BASE_URL) else {
        return Ok(None);
    };

    let mut config = ApiConfig::new(base_url);

    if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
        config.timeout_seconds = raw
            .parse::<u64>()
            .map_err(|err| LecternError::Config(format!("invalid {ENV_TIMEOUT_SECS}: {err}")))?;
    }

    Ok(Some(config))
}

/// Load configuration from a TOML file.
///
/// # Errors
/// Returns `LecternError::Config` when the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<ApiConfig, LecternError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| LecternError::Config(format!("failed to read {}: {err}", path.display())))?;

    let config: ApiConfig = toml::from_str(&contents)
        .map_err(|err| LecternError::Config(format!("failed to parse {}: {err}", path.display())))?;

    Ok(ApiConfig::new(config.base_url).with_timeout(config.timeout_seconds))
}

fn probe_config_paths() -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES.iter().copied().map(PathBuf::from).find(|path| path.exists())
}
