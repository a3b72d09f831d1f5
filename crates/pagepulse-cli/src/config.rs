//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the analytics export document.
    pub analytics_path: PathBuf,

    /// Path to the persisted watchlist slot.
    pub watchlist_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("analytics_path", &self.analytics_path)
            .field("watchlist_path", &self.watchlist_path)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        let state_dir = dirs_state_path().unwrap_or_else(|| data_dir.clone());
        Self {
            analytics_path: data_dir.join("analytics.json"),
            watchlist_path: state_dir.join("watchlist.json"),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PAGEPULSE_*)
        figment = figment.merge(Env::prefixed("PAGEPULSE_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for pagepulse.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pagepulse"))
}

/// Returns the platform-specific data directory for pagepulse.
///
/// On Linux: `~/.local/share/pagepulse`
fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("pagepulse"))
}

/// Returns the platform-specific state directory for pagepulse.
///
/// On Linux: `~/.local/state/pagepulse`
fn dirs_state_path() -> Option<PathBuf> {
    dirs::state_dir().map(|p| p.join("pagepulse"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_under_the_app_dirs() {
        let config = Config::default();
        assert_eq!(
            config.analytics_path.file_name().unwrap(),
            "analytics.json"
        );
        assert_eq!(config.watchlist_path.file_name().unwrap(), "watchlist.json");
        assert!(
            config
                .analytics_path
                .parent()
                .unwrap()
                .ends_with("pagepulse")
        );
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_file = temp.path().join("config.toml");
        std::fs::write(
            &config_file,
            "analytics_path = \"/tmp/custom.json\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&config_file)).unwrap();
        assert_eq!(config.analytics_path, PathBuf::from("/tmp/custom.json"));
        // Unset fields keep their defaults.
        assert_eq!(config.watchlist_path.file_name().unwrap(), "watchlist.json");
    }
}
