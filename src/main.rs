//! Adaptive reasoner command-line entry point
//!
//! Thin adapter over the library. Executes with the simulated executor.

use adaptive_reasoning::config::ReasonerConfig;
use adaptive_reasoning::execution::SimulatedExecutor;
use adaptive_reasoning::observability::init_logging_with_level;
use adaptive_reasoning::orchestrator::{AdaptiveReasoner, BatchTask};
use adaptive_reasoning::ReasonerResult;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

const DEFAULT_CONFIG_PATH: &str = "reasoner.toml";

/// Route tasks to a reasoning mode by estimated complexity
#[derive(Parser)]
#[command(name = "adaptive-reasoner")]
#[command(about = "Heuristic task-complexity classifier and reasoning-mode router")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a task and print the selected mode
    Classify {
        /// Task text
        text: String,
    },
    /// Run a single task through the full pipeline
    Run {
        /// Task text
        text: String,
        /// Task id to use instead of a generated one
        #[arg(long)]
        id: Option<String>,
    },
    /// Process a JSON array of tasks from a file
    Batch {
        /// JSON file holding `[{"id": "...", "text": "..."}]`
        file: PathBuf,
    },
    /// Validate configuration
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };
    init_logging_with_level(level);

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Classify { text } => classify(config, &text).map_err(Into::into),
        Commands::Run { text, id } => run_task(config, &text, id).await.map_err(Into::into),
        Commands::Batch { file } => run_batch(config, &file).await.map_err(Into::into),
        Commands::Config { show } => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(path: Option<&Path>) -> ReasonerResult<ReasonerConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ReasonerConfig::load_from_file(path)?)
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                info!("Loading configuration from: {}", default_path.display());
                Ok(ReasonerConfig::load_from_file(default_path)?)
            } else {
                info!("No configuration file found, using defaults");
                Ok(ReasonerConfig::default())
            }
        }
    }
}

fn build_reasoner(config: &ReasonerConfig) -> ReasonerResult<AdaptiveReasoner> {
    Ok(AdaptiveReasoner::from_config(
        config,
        Arc::new(SimulatedExecutor::new()),
    )?)
}

fn classify(config: ReasonerConfig, text: &str) -> ReasonerResult<()> {
    let reasoner = build_reasoner(&config)?;
    let classification = reasoner.classify_and_select(text, None);
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}

async fn run_task(
    config: ReasonerConfig,
    text: &str,
    id: Option<String>,
) -> ReasonerResult<()> {
    let reasoner = build_reasoner(&config)?;
    let result = reasoner.process_task(text, id).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_batch(config: ReasonerConfig, file: &Path) -> ReasonerResult<()> {
    let tasks = BatchTask::load_from_file(file)?;

    info!(tasks = tasks.len(), "Loaded batch from {}", file.display());

    let reasoner = build_reasoner(&config)?;
    let results = reasoner.process_batch(tasks).await;
    println!("{}", serde_json::to_string_pretty(&results)?);

    match reasoner.report() {
        Some(report) => eprintln!("\n{report}"),
        None => eprintln!("\nNo tasks completed"),
    }
    Ok(())
}

fn handle_config_command(
    config: &ReasonerConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    info!("Configuration is valid");

    if show {
        println!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
