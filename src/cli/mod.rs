pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::config;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = match config::load_config(&source, cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return 1;
        }
    };

    let result = match &cli.command {
        types::Commands::Render(args) => commands::handle_render_command(args, &config),
        types::Commands::Outline { page } => commands::handle_outline_command(page, &config),
        types::Commands::Pages { prefix, reverse } => {
            commands::handle_pages_command(prefix.as_deref(), *reverse, &config)
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
