//! Settings validation

use std::path::Path;

use crate::error::{ReadyError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(ReadyError::config_error("Output file path is empty"));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ReadyError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
