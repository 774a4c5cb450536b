use crate::error::{RosterError, RosterResult};
use crate::locale::Locale;
use crate::store::ObserverPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SLOT_NAME: &str = "employee_records";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Roster settings, persisted as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Directory holding the durable slot file
    pub data_dir: PathBuf,
    /// Name of the durable slot (file stem)
    pub slot_name: String,
    /// Rows per listing page
    pub page_size: usize,
    /// Label language
    pub locale: Locale,
    /// What happens when a change observer panics
    pub observer_policy: ObserverPolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            slot_name: DEFAULT_SLOT_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            observer_policy: ObserverPolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> RosterResult<Self> {
        match Self::config_file_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: RosterConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> RosterResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/roster/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
    }

    pub fn validate(&self) -> RosterResult<()> {
        if self.page_size == 0 {
            return Err(RosterError::invalid_config("page_size must be at least 1"));
        }
        if self.slot_name.trim().is_empty() {
            return Err(RosterError::invalid_config("slot_name cannot be empty"));
        }
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
}
