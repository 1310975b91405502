use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Releases page layout
// =============================================================================

/// Default host serving the releases listing
pub const DEFAULT_BASE_URL: &str = "https://github.com/";

/// Path segment of the releases listing under `{owner}/{project}/`
pub const RELEASES_PATH: &str = "releases";

/// Query introducing the pagination cursor
pub const NEXT_PAGE_QUERY: &str = "?after=";

/// CSS selector of the elements holding a release's version
pub const DEFAULT_VERSION_SELECTOR: &str = "span.css-truncate-target";

pub const DEFAULT_USER_AGENT: &str = "release-versions";

const APP_NAME: &str = "release-versions";

/// Name of the log file inside [`data_dir`]
pub const LOG_FILE_NAME: &str = "release-versions.log";

/// Scraper configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScraperConfig {
    /// Base URL of the host, e.g. `https://github.com/`
    pub base_url: String,
    /// CSS selector for version elements on a releases page
    pub version_selector: String,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version_selector: DEFAULT_VERSION_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Returns the path to the data directory for release-versions.
/// Uses $XDG_DATA_HOME/release-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/release-versions,
/// or ./release-versions if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config directory for release-versions,
/// resolved like [`data_dir`] from XDG_CONFIG_HOME and ~/.config.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, fallback: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
