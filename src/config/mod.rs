use crate::errors::AppResult;
use crate::utils::DateKey;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV with at least `App ID, Name, Year, Role`
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    /// Where the daily JSON logs and spreadsheets go
    #[serde(default = "default_lists_dir")]
    pub lists_dir: String,
    /// Root served as static files (form page and assets)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Spreadsheet name prefix: `<export_title> (DD-MM-YYYY).xlsx`
    #[serde(default = "default_export_title")]
    pub export_title: String,
}

fn default_roster_file() -> String {
    "Member-log.csv".to_string()
}
fn default_lists_dir() -> String {
    "lists".to_string()
}
fn default_static_dir() -> String {
    ".".to_string()
}
fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_export_title() -> String {
    "Exemption list".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: default_roster_file(),
            lists_dir: default_lists_dir(),
            static_dir: default_static_dir(),
            bind: default_bind(),
            port: default_port(),
            export_title: default_export_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("exemptlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".exemptlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("exemptlog.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write `self` to `path` as YAML, creating the parent directory
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Initialize the configuration file (kept if it already exists) and the
    /// lists directory. Returns the loaded configuration.
    pub fn init_all(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let cfg = Self::load_from(path)?;
        fs::create_dir_all(cfg.lists_path())?;
        Ok(cfg)
    }

    pub fn roster_path(&self) -> PathBuf {
        expand_tilde(&self.roster_file)
    }

    pub fn lists_path(&self) -> PathBuf {
        expand_tilde(&self.lists_dir)
    }

    pub fn static_path(&self) -> PathBuf {
        expand_tilde(&self.static_dir)
    }

    /// Spreadsheet regenerated after every submission of `date`
    pub fn xlsx_path(&self, date: &DateKey) -> PathBuf {
        self.lists_path()
            .join(format!("{} ({date}).xlsx", self.export_title))
    }
}
