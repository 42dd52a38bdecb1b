//! Configuration loading and management.

use std::path::{Path, PathBuf};

use clash_core::DraftRules;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the events file.
    pub events_path: PathBuf,

    /// Shortest event the add and edit commands accept, in minutes.
    pub min_duration_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            events_path: data_dir.join("events.json"),
            min_duration_minutes: DraftRules::default().min_duration_minutes,
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

        // Load from environment variables (CLASH_*)
        figment = figment.merge(Env::prefixed("CLASH_"));

        figment.extract()
    }

    /// Replaces the events path when one was given on the command line.
    #[must_use]
    pub fn with_events_path(mut self, events_path: Option<PathBuf>) -> Self {
        if let Some(path) = events_path {
            self.events_path = path;
        }
        self
    }

    /// Validation rules for event drafts.
    pub const fn draft_rules(&self) -> DraftRules {
        DraftRules {
            min_duration_minutes: self.min_duration_minutes,
        }
    }
}

/// Returns the platform-specific config directory for clash.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clash"))
}

/// Returns the platform-specific data directory for clash.
///
/// On Linux: `~/.local/share/clash`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("clash"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_clash() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "clash");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_events() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.events_path, data_dir.join("events.json"));
        assert_eq!(config.min_duration_minutes, 15);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("clash.toml");
        std::fs::write(
            &config_path,
            "events_path = \"/tmp/custom-events.json\"\nmin_duration_minutes = 5\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.events_path, PathBuf::from("/tmp/custom-events.json"));
        assert_eq!(config.draft_rules().min_duration_minutes, 5);
    }

    #[test]
    fn test_command_line_events_path_wins() {
        let config = Config::default().with_events_path(Some(PathBuf::from("other.json")));
        assert_eq!(config.events_path, PathBuf::from("other.json"));

        let unchanged = Config::default().with_events_path(None);
        assert_eq!(unchanged, Config::default());
    }
}
