//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const ADDRESS_ENV: &str = "CONSIGNMENT_BACKEND_ADDRESS";
const MOCK_ENV: &str = "CONSIGNMENT_MOCK_BACKEND";

/// Which backend the form talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    /// In-process development backend
    Mock,
    /// HTTP backend at the given address
    Http(String),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base address, e.g. `http://127.0.0.1:8080`
    pub backend_address: Option<String>,
    /// Force the in-process mock backend even when an address is set
    pub use_mock_backend: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "consignment", "consignment-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(address) = lookup(ADDRESS_ENV).filter(|a| !a.trim().is_empty()) {
            self.backend_address = Some(address);
        }
        if let Some(flag) = lookup(MOCK_ENV) {
            self.use_mock_backend = Some(matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
    }

    /// Resolve the backend; without an address the mock backend is used
    pub fn backend_choice(&self) -> BackendChoice {
        match (&self.backend_address, self.use_mock_backend) {
            (Some(address), Some(false) | None) => BackendChoice::Http(address.clone()),
            _ => BackendChoice::Mock,
        }
    }
}
