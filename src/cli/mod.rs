// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Skip starting the API server
    #[arg(long)]
    pub no_api: bool,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub api_port: Option<u16>,

    /// Run in API-only mode (no CLI)
    #[arg(long)]
    pub api_only: bool,
}
