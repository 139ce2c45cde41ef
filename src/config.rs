//! Tool configuration.
//!
//! The reference workflow hardcodes its paths; here everything lives in an
//! explicit [`IconConfig`] passed into the scanner. Values come from an
//! optional `icon-manifest.toml` next to the working directory, overridden
//! by CLI flags. No config file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root_dir = "Icons"              # Directory to scan (one subdir per category)
//! output_path = "icons.json"      # Where the manifest is written
//! extension = ".svg"              # File suffix that qualifies as an icon
//! prefix_label = "-icon-service-" # Literal after the numeric prefix in file names
//! # root_label = "Icons"          # Leading path segment; defaults to root_dir's name
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the recognized extension
//! extension = ".png"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory when no
/// `--config` flag is given.
pub const CONFIG_FILE: &str = "icon-manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `icon-manifest.toml`.
///
/// All fields have defaults matching the reference icon-set layout. User
/// config files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Directory to scan; each immediate subdirectory is a category.
    pub root_dir: String,
    /// Path the JSON manifest is written to, replacing prior content.
    pub output_path: String,
    /// Case-sensitive file-name suffix that qualifies a file as an icon.
    pub extension: String,
    /// Literal expected after the numeric prefix when deriving display names
    /// (see [`crate::naming::strip_numbered_prefix`]).
    pub prefix_label: String,
    /// Leading segment of every record path. When absent, the root
    /// directory's own file name is used.
    pub root_label: Option<String>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            root_dir: "Icons".to_string(),
            output_path: "icons.json".to_string(),
            extension: ".svg".to_string(),
            prefix_label: "-icon-service-".to_string(),
            root_label: None,
        }
    }
}

impl IconConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::Validation(
                "extension must start with '.' and name a suffix".into(),
            ));
        }
        if self.prefix_label.is_empty() {
            return Err(ConfigError::Validation(
                "prefix_label must not be empty".into(),
            ));
        }
        if self.root_dir.is_empty() {
            return Err(ConfigError::Validation("root_dir must not be empty".into()));
        }
        if self.output_path.is_empty() {
            return Err(ConfigError::Validation(
                "output_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration.
///
/// With an explicit path, the file must exist and parse. With `None`,
/// `icon-manifest.toml` in the working directory is used if present,
/// otherwise stock defaults. The result is always validated.
pub fn load_config(path: Option<&Path>) -> Result<IconConfig, ConfigError> {
    let config = match path {
        Some(p) => parse_file(p)?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                parse_file(default_path)?
            } else {
                IconConfig::default()
            }
        }
    };
    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<IconConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// A stock `icon-manifest.toml` with every option documented.
///
/// Printed by the `gen-config` subcommand as a starting point.
pub fn stock_config_toml() -> String {
    r#"# icon-manifest configuration
# All options are optional - defaults shown below.

# Directory to scan. Each immediate subdirectory is a category; files
# inside it with the recognized extension become icon records.
root_dir = "Icons"

# Where the JSON manifest is written. Fully overwritten on every run.
output_path = "icons.json"

# Case-sensitive file-name suffix that qualifies a file as an icon.
extension = ".svg"

# Literal expected after the numeric prefix when deriving display names:
# "42-icon-service-compute.svg" -> "compute". File names that don't match
# the digits+label pattern keep their stem unchanged.
prefix_label = "-icon-service-"

# Leading segment of every record path. Defaults to the root directory's
# own name when omitted.
# root_label = "Icons"
"#
    .to_string()
}
