//! # glonav-cli
//!
//! Command-line front end for the Glonav retrieval engine.
//!
//! ```text
//! glonav retrieve "ozone standards" --corpus corpus.json --source EPA
//! glonav stats --corpus corpus.json
//! glonav config path | show | get <key> | init [--force]
//! ```
//!
//! A corpus is a JSON file of documents, entities and relations (see
//! [`corpus`]). It is loaded into the in-memory backends on every run.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod corpus;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction, OutputFormat, RetrieveArgs};
pub use config::GlonavConfig;
pub use corpus::Corpus;

use glonav_core::Result;

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
        command,
    } = cli;

    match command {
        Command::Config { action } => {
            if verbose {
                logging::init_logging("debug", true);
            }
            config_handlers::handle_config_command(config_path.as_deref(), action)
        }
        Command::Retrieve(args) => {
            let config = prepare(config_path.as_deref(), verbose)?;
            commands::run_retrieve(&args, &config).await
        }
        Command::Stats { corpus } => {
            let config = prepare(config_path.as_deref(), verbose)?;
            commands::run_stats(&corpus, &config).await
        }
    }
}

/// Load configuration and install logging for a corpus command.
fn prepare(config_path: Option<&str>, verbose: bool) -> Result<GlonavConfig> {
    let config = GlonavConfig::load(config_path)?;
    logging::init_logging(&config.logging.level, verbose);
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
