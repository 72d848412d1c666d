//! Command-line argument configuration source

use std::path::{Path, PathBuf};

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    settings: PartialSettings,
    config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a CLI configuration source from Args
    ///
    /// Flags that were not passed stay `None` so they never mask values
    /// coming from a config file.
    pub fn from_args(args: &Args) -> Self {
        let settings = PartialSettings {
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            use_colors: args.color.then_some(true),
            verbose: args.verbose.then_some(true),
        };

        Self {
            settings,
            config_path: args.config.clone(),
        }
    }

    /// Config file named with `--config`, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.settings.clone())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "command-line arguments"
    }

    fn priority(&self) -> u8 {
        30
    }
}
