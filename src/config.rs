use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const STORE_FILE_NAME: &str = "app_data.json";
pub const SYMBOL_IMAGES_DIR: &str = "symbol_images";

const ENV_SERVER_URL: &str = "TEXTIFY_SERVER_URL";
const ENV_DATA_DIR: &str = "TEXTIFY_DATA_DIR";
const ENV_REQUEST_TIMEOUT: &str = "TEXTIFY_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Client settings: where the recognition service lives and where local
/// state is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the recognition service, without trailing slash
    pub server_url: String,
    /// Directory holding the key-value store and the symbol images
    pub data_dir: PathBuf,
    /// `None` means requests wait as long as the server takes
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            data_dir: PathBuf::from("."),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn new(server_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            server_url: normalize_url(&server_url.into()),
            data_dir: data_dir.into(),
            request_timeout: None,
        }
    }

    /// Build a config from `TEXTIFY_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_SERVER_URL) {
            let url = normalize_url(&url);
            if url.is_empty() {
                return Err(ConfigError::Empty(ENV_SERVER_URL));
            }
            config.server_url = url;
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            if dir.trim().is_empty() {
                return Err(ConfigError::Empty(ENV_DATA_DIR));
            }
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                var: ENV_REQUEST_TIMEOUT,
                value: raw.clone(),
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn symbol_images_dir(&self) -> PathBuf {
        self.data_dir.join(SYMBOL_IMAGES_DIR)
    }

    /// Path of the n-th (1-based) sample image slot
    pub fn sample_image_path(&self, slot: usize) -> PathBuf {
        sample_image_path(&self.symbol_images_dir(), slot)
    }

    /// Full URL for an endpoint path such as `/textify/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

pub fn sample_image_name(slot: usize) -> String {
    format!("img-{}.png", slot)
}

pub fn sample_image_path(dir: &Path, slot: usize) -> PathBuf {
    dir.join(sample_image_name(slot))
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
