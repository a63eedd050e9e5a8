use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{ConfigFormat, FilterConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Load and validate the configuration
    Validate,
}

pub fn execute(args: ConfigArgs, config_path: Option<&str>) -> Result<()> {
    let config = FilterConfig::load(config_path, None)?;

    match args.command {
        ConfigCommand::Show { format } => print!("{}", config.export(format)?),
        ConfigCommand::Validate => {
            println!(
                "Configuration valid: {} source(s), {} extension(s)",
                config.sources.len(),
                config.extensions.len()
            );
        }
    }
    Ok(())
}
