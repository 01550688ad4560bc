//! Binary crate for the `irrigation` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and validating inbound values
//! - Interactive credential configuration
//! - Serializing prediction output

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
