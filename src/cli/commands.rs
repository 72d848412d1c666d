//! Command implementations

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Args;
use crate::config::{self, CliConfig, DEFAULT_CONFIG_FILE};
use crate::core::hotel_billing_report;
use crate::error::Result;
use crate::logging;
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer};
use crate::{NAME, VERSION};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Print the report
    Print(Args),
    /// Initialize a default configuration file
    Init { verbose: bool },
}

/// What `Command::Init` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init {
                verbose: args.verbose,
            };
        }

        Command::Print(args)
    }

    /// Execute the command
    ///
    /// Logging starts only once the settings are resolved, so `verbose`
    /// from a config file takes effect as well as the flag.
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Print(args) => {
                let settings = config::load_config(&CliConfig::from_args(args))?;
                logging::init_logging(settings.verbose);
                debug!("{} v{}", NAME, VERSION);
                debug!(?settings, "resolved settings");
                print_report(&settings)
            }
            Command::Init { verbose } => {
                logging::init_logging(*verbose);
                match init_config(Path::new(DEFAULT_CONFIG_FILE))? {
                    InitOutcome::Created(path) => {
                        println!("Created default configuration file at: {}", path.display());
                        println!("Every key is commented out; edit it and pass it with --config.");
                    }
                    InitOutcome::AlreadyExists(path) => {
                        println!("Configuration file already exists at: {}", path.display());
                        println!("To overwrite it, delete the file first and run this command again.");
                    }
                }
                Ok(())
            }
        }
    }
}

/// Render the report with the given settings and write it out
pub fn print_report(settings: &Settings) -> Result<()> {
    let report = hotel_billing_report();
    let formatter = create_formatter(settings.output_format, settings.use_colors);
    let content = formatter.format(&report)?;

    info!(
        format = %settings.output_format,
        bytes = content.len(),
        "writing report"
    );

    create_writer(settings.output_file.as_ref()).write(&content)
}

/// Write the default config template unless the file already exists
pub fn init_config(path: &Path) -> Result<InitOutcome> {
    if path.exists() {
        return Ok(InitOutcome::AlreadyExists(path.to_path_buf()));
    }

    config::create_default_config(path)?;
    Ok(InitOutcome::Created(path.to_path_buf()))
}
