//! SpecGate CLI
//!
//! Operator interface to the authorization gate:
//! - Verify a spec file and export the compliance report
//! - Explain a spec in plain English
//! - Run the demo tasks under enforcement

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use specgate_runtime::Enforcer;
use specgate_verify::{TracingObserver, VerificationOrchestrator};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::CliConfig;
use error::CliResult;

/// SpecGate CLI application
#[derive(Parser)]
#[command(name = "specgate")]
#[command(about = "SpecGate - verify-then-enforce authorization for autonomous tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SPECGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Statically verify a spec file (JSON or YAML)
    Verify {
        /// Path to spec file
        file: PathBuf,

        /// Print the compliance export as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe a spec file in plain English
    Explain {
        /// Path to spec file
        file: PathBuf,
    },

    /// Run compliant, violating and adversarial demo tasks
    Demo,

    /// Show effective configuration
    Config,
}

fn main() -> anyhow::Result<ExitCode> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    // A path typed on the command line must exist; one from the environment may not.
    let explicit_config = matches.value_source("config") == Some(ValueSource::CommandLine);
    let config = CliConfig::load(cli.config.as_deref(), explicit_config)?;

    // Initialize tracing; RUST_LOG wins over the config file.
    let fallback = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone().unwrap_or_else(|| "info".to_string())
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
    debug!(config = ?cli.config, "Configuration loaded");

    Ok(run(cli.command, config)?)
}

fn run(command: Commands, config: CliConfig) -> CliResult<ExitCode> {
    let orchestrator = VerificationOrchestrator::new()
        .with_risk_config(config.risk.clone())
        .with_observer(Arc::new(TracingObserver));

    let ok = match command {
        Commands::Verify { file, json } => commands::verify::execute(&file, json, &orchestrator)?,
        Commands::Explain { file } => {
            commands::explain::execute(&file)?;
            true
        }
        Commands::Demo => {
            let enforcer = Enforcer::with_orchestrator(orchestrator);
            commands::demo::execute(&enforcer).map_err(|source| error::CliError::Spec {
                path: PathBuf::from("<demo>"),
                source,
            })?
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
