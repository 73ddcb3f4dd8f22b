use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod api;
mod cli;
mod clipboard;
mod core;
mod generators;
mod models;

use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = cli::Args::parse();
    let config = Config::load();

    // Configure logging; optionally pipe to a file instead of stderr
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .filter_level(config.log_level)
        .format_timestamp_secs();
    if let Some(log_file) = &config.log_file {
        log_builder.target(env_logger::Target::Pipe(Box::new(
            std::fs::File::create(log_file)?,
        )));
    }
    log_builder.init();

    log::info!("🔐 Starting PassGen - Password Generator");

    // One-shot subcommand: run it and exit
    if let Some(command) = args.command {
        return cli::handlers::run_command(command, &config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        }).expect("Failed to set Ctrl+C handler");
    }

    let api_port = args.api_port.unwrap_or(config.web_port);

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("🔐 API-only mode active. CLI interface disabled.");
        let mut server_config = config.clone();
        server_config.web_port = api_port;
        return api::start_server(server_config).await;
    }

    // Start API server in background (separate thread with its own runtime,
    // so the interactive menu keeps the main thread)
    if !args.no_api && config.web_enabled {
        let mut server_config = config.clone();
        server_config.web_port = api_port;

        std::thread::spawn(move || {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => {
                    rt.block_on(async {
                        if let Err(e) = api::start_server(server_config).await {
                            log::error!("API server error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                }
            }
        });
        println!("🚀 API server started on port {}", api_port);
    }

    // CLI interactive menu
    cli::menu::run_cli_menu(&config, should_exit).map_err(|e| {
        log::error!("CLI menu error: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ PassGen shutdown complete.");

    Ok(())
}
