//! Project configuration loading.
//! The configuration carries the input file path and the scalar project
//! metadata copied verbatim onto the model; docforge performs no validation
//! of these values.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration section consumed by the build stage.
///
/// `input_file` decides the navigation branching: a `.sdnav` input switches
/// the resolver into recursive navigation parsing, anything else registers
/// the input itself as the single default repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Path to the project's input file
    pub input_file: PathBuf,

    #[serde(default)]
    pub doc_language: String,
    #[serde(default)]
    pub logo_path: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub version_number: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub author_url: String,
}

impl ProjectConfig {
    /// Loads a configuration file, trying JSON first and falling back to YAML.
    ///
    /// # Errors
    /// * `Error::ConfigError` if neither format parses
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yaml::from_str(&content).map_err(|e| {
                Error::ConfigError(format!("Invalid configuration format: {}", e))
            }),
        }
    }

    /// The directory all discovery phases scan: the input file's parent.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the input file path has no parent component
    pub fn root_dir(&self) -> Result<&Path> {
        self.input_file.parent().ok_or_else(|| {
            Error::ConfigError(format!(
                "Input file {} has no parent directory",
                self.input_file.display()
            ))
        })
    }
}
