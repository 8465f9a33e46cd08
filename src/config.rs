use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENWEATHERMAP_API_KEY";
pub const BASE_URL_VAR: &str = "OPENWEATHERMAP_BASE_URL";
pub const TIMEOUT_VAR: &str = "WEATHER_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &format_args!("<{} chars>", self.api_key.len()))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` is the real one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

fn env_file_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env")];

    if let Ok(exe_path) = env::current_exe() {
        debug!("Executable path: {}", exe_path.display());
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join(".env"));
        }
    }

    if let Ok(home) = env::var("HOME") {
        let home = PathBuf::from(home);
        paths.push(home.join(".weather_panel.env"));
        paths.push(home.join(".env"));
    }

    paths
}

/// Loads the first `.env` file found next to the user or the binary. Variables
/// already present in the environment are left alone.
pub fn load_env_file() {
    let candidates = env_file_candidates();

    for path in &candidates {
        if !path.exists() {
            debug!("No .env at {}", path.display());
            continue;
        }
        match dotenv::from_path(path) {
            Ok(()) => {
                info!("Loaded environment from {}", path.display());
                report_api_key();
                return;
            }
            Err(e) => warn!("Error loading .env from {}: {}", path.display(), e),
        }
    }

    debug!("No .env file found in {:?}", candidates);
    dotenv::dotenv().ok();
    report_api_key();
}

fn report_api_key() {
    match env::var(API_KEY_VAR) {
        Ok(key) => info!("API key found (length: {})", key.len()),
        Err(_) => warn!("{} is not set", API_KEY_VAR),
    }
}
