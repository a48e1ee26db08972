// Configuration loading and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};
use crate::models::workspace_config::WorkspaceConfig;
use crate::models::solution::DEFAULT_TEMPLATE;
use crate::utils::error::{LcError, Result};

/// Name of the per-workspace configuration file
pub const WORKSPACE_CONFIG_FILE: &str = "lcsharp.toml";

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Resolve the configuration for a workspace.
    ///
    /// An explicit path must exist. Otherwise `<root>/lcsharp.toml` is used,
    /// then the user config file, then built-in defaults.
    pub fn load_for_workspace(explicit: Option<&Path>, root: &Path) -> Result<WorkspaceConfig> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(LcError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_config(path);
        }

        let candidates = std::iter::once(root.join(WORKSPACE_CONFIG_FILE))
            .chain(Self::user_config_path());

        for candidate in candidates {
            if candidate.is_file() {
                return Self::load_config(&candidate);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(WorkspaceConfig::default())
    }

    /// Load and validate a configuration file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorkspaceConfig> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|e| LcError::ConfigError(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;

        let config = Self::parse_config(&content)
            .map_err(|e| match e {
                LcError::ConfigError(msg) => LcError::ConfigError(format!("{}: {}", path.display(), msg)),
                other => other,
            })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<WorkspaceConfig> {
        let config: WorkspaceConfig = toml::from_str(content)
            .map_err(|e| LcError::ConfigError(
                format!("Invalid TOML syntax: {}", e)
            ))?;

        config.validate()?;
        Ok(config)
    }

    /// User-level configuration file, e.g. ~/.config/lcsharp/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lcsharp").join("config.toml"))
    }

    /// Resolve the boilerplate template text for a workspace
    pub fn load_template(config: &WorkspaceConfig, root: &Path) -> Result<String> {
        if let Some(template) = &config.template {
            return Ok(template.clone());
        }

        if let Some(template_file) = &config.template_file {
            let path = root.join(template_file);
            return fs::read_to_string(&path).map_err(|e| LcError::ConfigError(
                format!("Failed to read template {}: {}", path.display(), e)
            ));
        }

        Ok(DEFAULT_TEMPLATE.to_string())
    }
}
