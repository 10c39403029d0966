pub mod commands;
pub mod repl;

pub use commands::CommandExecutor;
pub use repl::run_repl;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::common::Config;

#[derive(Parser)]
#[command(name = "euclid-cli")]
#[command(version)]
#[command(about = "GCD/LCM calculator for two positive integers", long_about = None)]
pub struct Cli {
    /// Print the result as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// LCM notation: "float" or "integer" (overrides the config file)
    #[arg(long)]
    pub notation: Option<String>,

    /// Path to a config file (skips the default search locations)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the GCD and LCM of two operands given on the command line
    Compute {
        /// First operand
        #[arg(allow_hyphen_values = true)]
        m: String,

        /// Second operand
        #[arg(allow_hyphen_values = true)]
        n: String,

        /// Print the result as a single JSON object
        #[arg(long)]
        json: bool,
    },

    /// Interactive calculator shell
    Repl,

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        /// Destination path
        #[arg(default_value = "config.toml")]
        path: PathBuf,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    if let Some(ref raw) = cli.notation {
        config.output.notation = raw.parse().map_err(anyhow::Error::msg)?;
    }

    match cli.command {
        Some(Commands::Compute { m, n, json }) => {
            let executor = CommandExecutor::new(config);
            executor.compute(&m, &n, json || cli.json)?;
        }

        Some(Commands::Repl) => {
            repl::run_repl(config)?;
        }

        Some(Commands::Config { action }) => {
            let executor = CommandExecutor::new(config);
            match action {
                ConfigCommands::Show => executor.config_show(),
                ConfigCommands::Init { path } => executor.config_init(&path)?,
            }
        }

        None => {
            // No subcommand - read the two operands from stdin
            let executor = CommandExecutor::new(config);
            executor.run_session(cli.json)?;
        }
    }

    Ok(())
}
