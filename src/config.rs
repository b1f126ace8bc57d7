//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_BUDGETS: [&str; 4] = ["<5k", "5k-10k", "10k-50k", "50k+"];
const DEFAULT_INTERESTS: [&str; 4] = ["branding", "web", "product", "content"];

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Budget ranges offered in the budget select
    pub budget_options: Option<Vec<String>>,
    /// Service interests offered as checkboxes
    pub interest_options: Option<Vec<String>>,
    /// Copy the mailto link to the clipboard after a successful submission
    pub copy_link_on_accept: Option<bool>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("studio", "brivity", "brivity-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: ContactConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn budget_options(&self) -> Vec<String> {
        non_empty_or(&self.budget_options, &DEFAULT_BUDGETS)
    }

    pub fn interest_options(&self) -> Vec<String> {
        non_empty_or(&self.interest_options, &DEFAULT_INTERESTS)
    }

    pub fn copy_link_on_accept(&self) -> bool {
        self.copy_link_on_accept.unwrap_or(true)
    }
}

/// Configured options with blank entries dropped, or the defaults if none remain
fn non_empty_or(configured: &Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    let options: Vec<String> = configured
        .iter()
        .flatten()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if options.is_empty() {
        defaults.iter().map(|d| d.to_string()).collect()
    } else {
        options
    }
}
