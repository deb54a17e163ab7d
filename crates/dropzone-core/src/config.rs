//! Session configuration loaded from a TOML file.
//!
//! ```toml
//! multiple = true
//!
//! [constraints]
//! accepted_formats = ["image/", ".pdf"]
//! max_files = 5
//! max_size = 10485760
//!
//! [[validation_messages]]
//! kind = "file-too-large"
//! message = "Files must be 10 MB or smaller."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::error::{CoreError, CoreResult};
use crate::rules::FileError;

/// Everything a [`Session`](crate::session::Session) is configured with.
///
/// All fields have defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropzoneConfig {
    /// Whether the picker allows selecting several files.
    #[serde(default = "default_true")]
    pub multiple: bool,
    #[serde(default)]
    pub constraints: Constraints,
    /// Overrides for the default validation messages.
    #[serde(default)]
    pub validation_messages: Vec<FileError>,
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            multiple: true,
            constraints: Constraints::default(),
            validation_messages: Vec::new(),
        }
    }
}

impl DropzoneConfig {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    #[must_use]
    pub fn with_constraints(self, constraints: Constraints) -> Self {
        Self {
            constraints,
            ..self
        }
    }

    #[must_use]
    pub fn with_validation_messages(self, validation_messages: Vec<FileError>) -> Self {
        Self {
            validation_messages,
            ..self
        }
    }

    #[must_use]
    pub fn with_multiple(self, multiple: bool) -> Self {
        Self { multiple, ..self }
    }
}

fn default_true() -> bool {
    true
}
