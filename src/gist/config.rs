//! # Configuration
//!
//! Two pieces of configuration feed one invocation:
//!
//! - [`Settings`]: optional `config.json` in the user config directory
//!   (or `$GIST_CONFIG_DIR`), holding the endpoint and request timeout.
//!   `$GIST_API_URL` overrides the endpoint.
//! - [`GistConfig`]: the immutable per-run options built from the command
//!   line (token, description, names, visibility, inputs) plus the settings.
//!
//! | Key | Default |
//! |-----|---------|
//! | `api_url` | `https://api.github.com/gists` |
//! | `timeout_secs` | `30` |

use crate::client::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::error::{GistError, Result};
use crate::model::{OverrideNames, Visibility};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "GIST_CONFIG_DIR";
pub const API_URL_ENV: &str = "GIST_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the given directory, or return defaults if absent
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| GistError::Config(format!("{}: {}", config_path.display(), e)))?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| GistError::Config(format!("{}: {}", config_path.display(), e)))?;

        // reqwest treats a zero timeout as "fail immediately"
        if settings.timeout_secs == 0 {
            return Err(GistError::Config(format!(
                "{}: timeout_secs must be at least 1",
                config_path.display()
            )));
        }
        Ok(settings)
    }

    /// Settings for this process: config file from the resolved directory,
    /// then environment overrides.
    pub fn from_env() -> Result<Self> {
        let mut settings = match config_dir() {
            Some(dir) => Self::load(dir)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                settings.api_url = url;
            }
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `$GIST_CONFIG_DIR` when set, else the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "gist", "gist").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Options for one upload, fixed once parsed.
#[derive(Debug, Clone)]
pub struct GistConfig {
    pub token: String,
    pub description: String,
    pub names: OverrideNames,
    pub visibility: Visibility,
    pub clipboard: bool,
    pub paths: Vec<String>,
}

impl GistConfig {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            token: String::new(),
            description: String::new(),
            names: OverrideNames::default(),
            visibility,
            clipboard: false,
            paths: Vec::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_names(mut self, names: OverrideNames) -> Self {
        self.names = names;
        self
    }

    pub fn with_clipboard(mut self, clipboard: bool) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_paths(mut self, paths: Vec<String>) -> Self {
        self.paths = paths;
        self
    }
}
