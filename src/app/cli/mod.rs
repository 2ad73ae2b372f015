//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Select;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, CheckOptions, InitOptions};
use crate::domain::{AppError, ConfigFormat, DarkModeStrategy};

#[derive(Parser)]
#[command(name = "utilcfg")]
#[command(version)]
#[command(
    about = "Load, validate and resolve utility-class CSS build descriptors",
    long_about = None
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the descriptor and resolve its content globs
    #[clap(visible_alias = "c")]
    Check {
        /// Descriptor path (default: discover utilcfg.{toml,json,yaml,yml})
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Scan root for content globs (default: the descriptor's directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Also scan hidden files and directories
        #[arg(long)]
        hidden: bool,
    },
    /// Print the normalized descriptor with defaults filled in
    #[clap(visible_alias = "s")]
    Show {
        /// Descriptor path (default: discover utilcfg.{toml,json,yaml,yml})
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format (default: the descriptor's own format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Print the merged color token table as JSON
    #[clap(visible_alias = "t")]
    Tokens {
        /// Descriptor path (default: discover utilcfg.{toml,json,yaml,yml})
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only print this token category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the descriptor's SHA-256 fingerprint
    #[clap(visible_alias = "fp")]
    Fingerprint {
        /// Descriptor path (default: discover utilcfg.{toml,json,yaml,yml})
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a starter descriptor into the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// File format of the new descriptor
        #[arg(short, long, value_enum, default_value_t = FormatArg::Toml)]
        format: FormatArg,
        /// Dark-mode strategy (prompted when omitted in a terminal)
        #[arg(short, long, value_enum)]
        dark_mode: Option<DarkModeArg>,
        /// Overwrite an existing descriptor of the same format
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Toml,
    Json,
    Yaml,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => ConfigFormat::Toml,
            FormatArg::Json => ConfigFormat::Json,
            FormatArg::Yaml => ConfigFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DarkModeArg {
    Media,
    Class,
}

impl From<DarkModeArg> for DarkModeStrategy {
    fn from(arg: DarkModeArg) -> Self {
        match arg {
            DarkModeArg::Media => DarkModeStrategy::Media,
            DarkModeArg::Class => DarkModeStrategy::Class,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { config, root, strict, hidden } => {
            let options = CheckOptions { root, include_hidden: hidden };
            run_check(config, options, strict)
        }
        Commands::Show { config, format } => run_show(config, format).map(|_| 0),
        Commands::Tokens { config, category } => run_tokens(config, category).map(|_| 0),
        Commands::Fingerprint { config } => run_fingerprint(config).map(|_| 0),
        Commands::Init { format, dark_mode, force } => {
            run_init(format, dark_mode, force).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "utilcfg=debug" } else { "utilcfg=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_check(
    config: Option<PathBuf>,
    options: CheckOptions,
    strict: bool,
) -> Result<i32, AppError> {
    let outcome = api::check(config.as_deref(), options)?;

    outcome.diagnostics.emit();
    println!(
        "✅ {} is valid (dark mode: {}, {} content pattern(s), {} file(s) to scan)",
        outcome.path.display(),
        outcome.config.dark_mode,
        outcome.config.content.len(),
        outcome.report.unique_files().len()
    );
    println!("fingerprint: {}", outcome.fingerprint);

    let warnings = outcome.diagnostics.warning_count();
    if warnings > 0 {
        println!("⚠️  {} warning(s)", warnings);
    }
    Ok(outcome.exit_code(strict))
}

fn run_show(config: Option<PathBuf>, format: Option<FormatArg>) -> Result<(), AppError> {
    let rendered = api::show(config.as_deref(), format.map(ConfigFormat::from))?;
    print!("{}", rendered);
    Ok(())
}

fn run_tokens(config: Option<PathBuf>, category: Option<String>) -> Result<(), AppError> {
    let table = api::tokens(config.as_deref(), category.as_deref())?;
    let json = serde_json::to_string_pretty(&table)
        .map_err(|err| AppError::InternalError(format!("Failed to render tokens: {}", err)))?;
    println!("{}", json);
    Ok(())
}

fn run_fingerprint(config: Option<PathBuf>) -> Result<(), AppError> {
    println!("{}", api::fingerprint(config.as_deref())?);
    Ok(())
}

fn run_init(
    format: FormatArg,
    dark_mode: Option<DarkModeArg>,
    force: bool,
) -> Result<(), AppError> {
    let dark_mode = match dark_mode {
        Some(arg) => arg.into(),
        None => prompt_dark_mode()?,
    };
    let options = InitOptions { format: format.into(), dark_mode, force };
    let path = api::init(options)?;
    println!("✅ Created {}", path.display());
    Ok(())
}

fn prompt_dark_mode() -> Result<DarkModeStrategy, AppError> {
    if !std::io::stdin().is_terminal() {
        return Ok(DarkModeStrategy::default());
    }

    let items: Vec<String> = DarkModeStrategy::ALL
        .iter()
        .map(|strategy| format!("{} ({})", strategy.as_str(), strategy.description()))
        .collect();
    let selection = Select::new()
        .with_prompt("Select dark mode strategy")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select dark mode: {}", err)))?;

    selection
        .map(|index| DarkModeStrategy::ALL[index])
        .ok_or_else(|| AppError::Prompt("Dark mode selection cancelled".to_string()))
}
