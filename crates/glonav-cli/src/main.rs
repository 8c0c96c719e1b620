#![forbid(unsafe_code)]

//! The `glonav` binary.

use anyhow::Result;
use clap::Parser;
use glonav_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    glonav_cli::run(cli).await?;
    Ok(())
}
