//! Configuration management
//!
//! Settings are merged from defaults, an explicit config file and the
//! command line, in that order of precedence. No config file is read
//! unless one is named with `--config`.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use tracing::debug;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::CliConfig;
pub use file::{FileConfig, DEFAULT_CONFIG_FILE};
pub use parser::{create_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    ///
    /// A source that is not available is an error; callers only pass
    /// sources the user asked for.
    pub fn load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Result<Self> {
        debug!(source = source.name(), priority = source.priority(), "loading configuration");
        let partial = source.load()?;
        Ok(self.merge(partial))
    }

    /// Load several sources, lowest priority first
    pub fn load_all(mut self, sources: &mut [&dyn ConfigSource]) -> Result<Self> {
        sources.sort_by_key(|source| source.priority());
        for source in sources.iter() {
            self = self.load_from(*source)?;
        }
        Ok(self)
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the effective settings for a command-line invocation
pub fn load_config(cli_config: &CliConfig) -> Result<Settings> {
    let file_config = cli_config.config_path().map(FileConfig::with_path);

    let mut sources: Vec<&dyn ConfigSource> = Vec::new();
    sources.push(cli_config);
    if let Some(file_config) = &file_config {
        sources.push(file_config);
    }

    ConfigBuilder::new().load_all(&mut sources)?.build()
}
