//! Backend configuration for the shopfront client
//!
//! Reads the backend base URL from a static `config.json` in the
//! XDG-compliant config directory (`~/.config/shopfront/` on Linux), with a
//! compiled-in default when no file is present.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Backend used when no config file or override is provided
const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// Shape of the `config.json` file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "backendURL")]
    backend_url: String,
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL all backend paths are resolved against, without a trailing slash
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the XDG config directory
    ///
    /// Falls back to the default backend URL when the directory cannot be
    /// determined, the file is missing, or it cannot be parsed.
    pub fn load() -> Self {
        let Some(project_dirs) = ProjectDirs::from("", "", "shopfront") else {
            return Self::default();
        };
        Self::load_from_path(&project_dirs.config_dir().join("config.json"))
    }

    /// Loads configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<ConfigFile>(&content).ok());

        match parsed {
            Some(file) => Self {
                backend_url: normalize_url(&file.backend_url),
            },
            None => Self::default(),
        }
    }

    /// Replaces the backend URL, normalizing trailing slashes
    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = normalize_url(backend_url);
        self
    }
}

/// Strips trailing slashes so `{backend_url}{path}` concatenation is exact
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
