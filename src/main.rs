//! mongo-export
//!
//! Exports MongoDB collections to pretty-printed JSON files, either through
//! one-shot subcommands or an interactive shell.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell
//! mongo-export mongodb://localhost:27017
//!
//! # Export one collection, or every collection of a database
//! mongo-export export shop orders
//! mongo-export export shop --all --output-dir exports
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use mongo_export::cli::CliInterface;
use mongo_export::error::Result;

/// Application entry point
#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive shell
async fn run() -> Result<ExitCode> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if let Some(code) = cli.handle_subcommand().await? {
        return Ok(code);
    }

    cli.print_banner();
    cli.run_shell().await?;

    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(ExitCode::SUCCESS)
}

/// Initialize logging from the effective configuration
///
/// `RUST_LOG` overrides the configured level. Log lines go to stderr so
/// listings on stdout stay machine-readable.
fn initialize_logging(cli: &CliInterface) {
    let logging = &cli.config().logging;
    let level = LevelFilter::from_level(logging.level.to_tracing_level());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
