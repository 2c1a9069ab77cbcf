//! Fileschema CLI - validate file content against file schemas
//!
//! This is the main entry point for the fileschema CLI application,
//! providing commands for checking files and describing schemas.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => process::exit(0),
        Err(e) => {
            if !e.is_reported() {
                eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            }
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(command = ?cli.command))]
async fn run(cli: Cli) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let config = {
        let _config_timer = Timer::new("config_loading");
        Config::load_with_file(cli.config.as_deref())?
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);
    let mut output = OutputWriter::new(cli.output, use_color, cli.quiet);

    tracing::info!(verbosity = cli.verbosity_level(), "Executing command");

    match cli.command {
        Commands::Check(args) => handlers::handle_check(args, &config, &mut output).await,
        Commands::Describe(args) => handlers::handle_describe(args, &config, &mut output).await,
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
