//! @ai:module:intent CLI entry point for the TODO checker
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on config, linter, output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use todocheck::{linter, output, LintConfig, OutputFormat, RuleRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todocheck")]
#[command(author, version, about = "Check TODO annotations for author, colon, text and issue link")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files, directories, or `-` for stdin
    Check {
        /// Paths to check
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Path to a todocheck.toml config file
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Rule codes to skip, e.g. --ignore 3,7
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<u32>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// List the rules a check would run
    Rules {
        /// Path to a todocheck.toml config file
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todocheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_registry(config: Option<PathBuf>, ignore: Vec<u32>) -> todocheck::Result<RuleRegistry> {
    let cwd = std::env::current_dir()?;
    let mut config = LintConfig::discover(config.as_deref(), &cwd)?;
    config.ignore.extend(ignore);
    config.registry()
}

fn config_error(e: todocheck::Error) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::from(2)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            paths,
            config,
            ignore,
            format,
        } => {
            let registry = match load_registry(config, ignore) {
                Ok(registry) => registry,
                Err(e) => return config_error(e),
            };

            let result = linter::lint_paths(&paths, &registry);
            println!("{}", output::format_lint_result(&result, format.into()));

            if !result.failures.is_empty() {
                ExitCode::from(2)
            } else if result.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }

        Commands::Rules { config, format } => {
            let registry = match load_registry(config, Vec::new()) {
                Ok(registry) => registry,
                Err(e) => return config_error(e),
            };

            println!("{}", output::format_rules(&registry, format.into()));
            ExitCode::SUCCESS
        }
    }
}
