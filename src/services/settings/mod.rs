// Settings service
// Loads and saves selector configuration as TOML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SelectorSettings;

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory, or `None` when the
    /// platform has no home directory to resolve it from.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "TimePeriodSelector", "SelectorApp")
            .map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings; a missing file means defaults.
    pub fn load(&self) -> Result<SelectorSettings> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(SelectorSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", self.path.display()))?;

        log::info!(
            "Loaded config from {} (language={}, show_time={})",
            self.path.display(),
            settings.language,
            settings.show_time
        );
        Ok(settings)
    }

    pub fn save(&self, settings: &SelectorSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;

        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }

    pub fn parse(content: &str) -> Result<SelectorSettings> {
        Ok(toml::from_str(content)?)
    }
}
