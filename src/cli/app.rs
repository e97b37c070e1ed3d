//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::commands;
use movie_rental::config::RentalConfig;
use movie_rental::core::models::MovieKind;
use movie_rental::output::OutputMode;

/// movie-rental - Track movie rentals, returns, and late fees
#[derive(Parser, Debug)]
#[command(
    name = "movie-rental",
    version,
    about = "Track movie rentals, returns, and late fees",
    long_about = "An interactive desk for renting digital and physical movies.\n\n\
                  Run without a command to open the menu. Fees are charged on return:\n\
                  a flat base fee per kind plus a late fee for each day past the grace period."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (fees, currency, seed data)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive rental menu (default)
    Shell,

    /// Print the fee for a rental of the given kind and length
    Quote {
        /// Movie kind: d (digital) or p (physical)
        kind: MovieKind,

        /// Days rented
        days: u32,
    },

    /// Print the starting catalog and exit
    Catalog,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = RentalConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => commands::shell(&config, output_mode),
        Command::Quote { kind, days } => commands::quote(&config, kind, days, output_mode),
        Command::Catalog => commands::catalog(&config, output_mode),
    }
}
