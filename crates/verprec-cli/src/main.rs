//! Verprec CLI - Command-line interface for version identifier precedence
//!
//! This is the main entry point for the Verprec CLI application, providing
//! commands for comparing identifiers, inspecting how their segments are
//! classified, and checking batches of expected orderings.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod report;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Configuration is needed before logging, so load failures are reported
    // once logging is up
    let config = Config::load_with_file(cli.config.as_deref());

    // Set up colored output
    let use_color = cli.use_color() && config.as_ref().map_or(true, |c| c.output.color);
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    let result = config.and_then(|config| run(cli, &config, use_color));

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = ?e, exit_code = e.exit_code(), "Command failed");
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(&cli, config);
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        ?format,
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Compare(args) => handlers::handle_compare(args, &mut output),
        Commands::Parse(args) => handlers::handle_parse(args, &mut output),
        Commands::Check(args) => handlers::handle_check(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Output format from the command line, else the config file
fn resolve_output_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.output.unwrap_or(config.output.format)
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let verbosity = cli.verbosity_level();

    // Create logging configuration from CLI args, config file, and environment
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    if let Some(config) = config {
        logging_config.apply_file_config(&config.logging, verbosity);
    }
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
