//! Command-line interface for mongo-export
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI overrides
//! - One-shot subcommands and the interactive shell

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{Config, LogLevel};
use crate::connection::{ConnectionManager, sanitize_uri};
use crate::error::Result;
use crate::session::ExportSession;
use crate::shell::ExportShell;

pub mod commands;
pub mod completion;

/// Export MongoDB collections to JSON files
#[derive(Parser, Debug)]
#[command(
    name = "mongo-export",
    version,
    about = "Export MongoDB collections to JSON files",
    long_about = "Connects to a MongoDB server, lists databases and collections, and exports
one collection (<collection>.json) or every collection of a database
(<database>_all_collections.json) as pretty-printed JSON without the _id field."
)]
pub struct CliArgs {
    /// MongoDB connection URI
    ///
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    #[arg(value_name = "URI")]
    pub uri: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Directory export files are written to
    #[arg(short = 'o', long, value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Disable the progress bar for bulk exports
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Connection timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Start the shell without connecting
    #[arg(long)]
    pub no_connect: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for mongo-export
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List database names
    Databases,

    /// List collections of a database (preceded by All)
    Collections {
        /// Database name
        #[arg(value_name = "DATABASE")]
        database: String,
    },

    /// Export a collection, or all collections, of a database
    Export {
        /// Database name
        #[arg(value_name = "DATABASE")]
        database: String,

        /// Collection name, or All
        #[arg(value_name = "SELECTION", required_unless_present = "all")]
        selection: Option<String>,

        /// Export every collection into one file
        #[arg(long)]
        all: bool,
    },

    /// Start the interactive shell (default)
    Shell,

    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };

        if let Some(timeout) = args.timeout {
            config.connection.timeout = timeout;
        }

        if let Some(dir) = &args.output_dir {
            config.export.output_dir = dir.clone();
        }

        if args.no_progress || args.quiet {
            config.export.progress = false;
        }
    }

    /// Get the MongoDB connection URI
    ///
    /// The positional URI wins over the configured default.
    pub fn connection_uri(&self) -> String {
        self.config.connection.resolve_uri(self.args.uri.as_deref())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Create a disconnected session using the effective configuration
    fn new_session(&self) -> ExportSession<ConnectionManager> {
        let connector = ConnectionManager::new(self.config.connection.clone());
        ExportSession::new(connector, &self.config)
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<Option<ExitCode>>` - Exit code if a subcommand ran, `None` to start the shell
    pub async fn handle_subcommand(&self) -> Result<Option<ExitCode>> {
        let uri = self.connection_uri();

        let code = match &self.args.command {
            None | Some(Commands::Shell) => return Ok(None),
            Some(Commands::Databases) => {
                let mut session = self.new_session();
                commands::finish(commands::databases(&mut session, &uri).await)
            }
            Some(Commands::Collections { database }) => {
                let mut session = self.new_session();
                commands::finish(commands::collections(&mut session, &uri, database).await)
            }
            Some(Commands::Export {
                database,
                selection,
                all,
            }) => {
                let mut session = self.new_session();
                let output =
                    commands::export(&mut session, &uri, database, selection.as_deref(), *all)
                        .await;
                commands::finish(output)
            }
            Some(Commands::Version) => {
                self.show_version();
                ExitCode::SUCCESS
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell, &mut std::io::stdout())?;
                ExitCode::SUCCESS
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                ExitCode::SUCCESS
            }
        };

        Ok(Some(code))
    }

    /// Run the interactive shell
    pub async fn run_shell(&self) -> Result<()> {
        let uri = self.connection_uri();
        let initial_uri = (!self.args.no_connect).then_some(uri.as_str());

        ExportShell::new(self.new_session())
            .with_color(!self.args.no_color)
            .run(initial_uri)
            .await
    }

    /// Show version information
    fn show_version(&self) {
        println!("mongo-export version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }

    /// Print banner with version and connection target
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("mongo-export {}", env!("CARGO_PKG_VERSION"));
            if !self.args.no_connect {
                println!("Connecting to: {}", sanitize_uri(&self.connection_uri()));
            }
            println!("Type 'help' for a list of commands.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_URI;

    fn cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv.iter().copied()).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["mongo-export"]).unwrap();
        assert!(args.uri.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_uri() {
        let args = CliArgs::try_parse_from(["mongo-export", "mongodb://db:27017/"]).unwrap();
        assert_eq!(args.uri, Some("mongodb://db:27017/".to_string()));
    }

    #[test]
    fn test_export_subcommand() {
        let args =
            CliArgs::try_parse_from(["mongo-export", "export", "shop", "orders", "-o", "/tmp/out"])
                .unwrap();
        match args.command {
            Some(Commands::Export {
                database,
                selection,
                all,
            }) => {
                assert_eq!(database, "shop");
                assert_eq!(selection.as_deref(), Some("orders"));
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_export_requires_selection_or_all() {
        assert!(CliArgs::try_parse_from(["mongo-export", "export", "shop"]).is_err());
        assert!(CliArgs::try_parse_from(["mongo-export", "export", "shop", "--all"]).is_ok());
    }

    #[test]
    fn test_collections_subcommand() {
        let args = CliArgs::try_parse_from(["mongo-export", "collections", "shop"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Collections { ref database }) if database == "shop"
        ));
    }

    #[test]
    fn test_connection_uri_precedence() {
        assert_eq!(cli(&["mongo-export"]).connection_uri(), DEFAULT_URI);
        assert_eq!(
            cli(&["mongo-export", "mongodb://other:1/"]).connection_uri(),
            "mongodb://other:1/"
        );
    }

    #[test]
    fn test_args_override_config() {
        let cli = cli(&[
            "mongo-export",
            "--timeout",
            "5",
            "--output-dir",
            "exports",
            "--no-progress",
            "-v",
        ]);
        assert_eq!(cli.config().connection.timeout, 5);
        assert_eq!(cli.config().export.output_dir, PathBuf::from("exports"));
        assert!(!cli.config().export.progress);
        assert_eq!(cli.config().logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_quiet_lowers_log_level() {
        let cli = cli(&["mongo-export", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);
        assert!(!cli.config().export.progress);
    }

    #[test]
    fn test_from_args_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[connection]\ndefault_uri = \"mongodb://configured:27017/\"\n",
        )
        .unwrap();

        let args =
            CliArgs::try_parse_from(["mongo-export", "-c", path.to_str().unwrap()]).unwrap();
        let cli = CliInterface::from_args(args).unwrap();

        assert_eq!(cli.connection_uri(), "mongodb://configured:27017/");
    }

    #[tokio::test]
    async fn test_shell_is_default() {
        for argv in [&["mongo-export"][..], &["mongo-export", "shell"][..]] {
            let interface = cli(argv);
            assert!(interface.handle_subcommand().await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_version_is_handled() {
        let interface = cli(&["mongo-export", "version"]);
        assert!(interface.handle_subcommand().await.unwrap().is_some());
    }
}
