//! Author Bio CLI - renders author bio fragments.
//!
//! Reads `{ name, bio }` records and writes the `div.bio` markup for each.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::config as config_cmd;
use commands::render::{self, OutputFormat, RenderArgs};
use config::Config;

/// Author Bio CLI - render an author's name and biography as HTML.
///
/// Run `bio render --name "Ada Lovelace" --bio "Mathematician."` to get
/// the fragment on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "bio",
    author,
    version,
    about = "Render author bio fragments",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one or more authors.
    ///
    /// Without flags or input the author is treated as omitted and an
    /// empty container is written.
    Render {
        /// Author name. Overrides the name of every input record.
        #[arg(short, long)]
        name: Option<String>,

        /// Author biography. Overrides the bio of every input record.
        #[arg(short, long)]
        bio: Option<String>,

        /// JSON file with one record or an array of records (`-` for stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format: html or json (tree dump).
        #[arg(short, long)]
        format: Option<String>,

        /// Output file path, relative to the configured output directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Render {
            name,
            bio,
            input,
            format,
            output,
        } => {
            let format = format.map(|f| f.parse::<OutputFormat>()).transpose()?;
            render::execute(
                &config,
                RenderArgs {
                    name,
                    bio,
                    input,
                    format,
                    output,
                },
            )?;
        }

        Commands::Config(config_cmd_inner) => {
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    let mut file_config = Config::load_file()?;
                    config_cmd::set(&mut file_config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
