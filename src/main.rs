// CBT Diary - self-help journal back end with crisis text triage
// Main entry point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use cbt_diary::config::{load_config, Config};
use cbt_diary::crisis::{CrisisDetector, CrisisTables};
use cbt_diary::errors::{tables_invalid_error, UserFriendlyError};
use cbt_diary::journal::InMemoryJournal;
use cbt_diary::server::DiaryServer;
use cbt_diary::sessions::InMemorySessions;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "cbt-diary")]
#[command(about = "CBT diary back end with crisis text triage", version)]
struct Args {
    /// Run mode (defaults to serve)
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ~/.cbt-diary/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config and CBT_DIARY_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze text for crisis indicators and print the result as JSON
    Analyze {
        /// Text to analyze (read from stdin when omitted)
        text: Option<String>,

        /// Print the safety-check shape instead of the raw analysis
        #[arg(long)]
        safety_check: bool,
    },
    /// Print crisis resources, optionally for one category
    Resources {
        /// general, selfHarm, harmOthers, elderAbuse or childAbuse
        category: Option<String>,
    },
    /// Validate a crisis tables file (defaults to the configured tables)
    CheckTables {
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => run_server(config, bind).await,
        Command::Analyze { text, safety_check } => run_analyze(&config, text, safety_check),
        Command::Resources { category } => run_resources(&config, category.as_deref()),
        Command::CheckTables { path } => run_check_tables(&config, path),
    }
}

/// Initialize tracing to stderr
///
/// Default: INFO level, can be overridden with RUST_LOG env var.
/// Stdout stays clean for the JSON printed by CLI commands.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

/// Build the detector from the configured tables, or the built-in ones
fn build_detector(config: &Config) -> Result<CrisisDetector> {
    match &config.triage.tables_path {
        Some(path) => {
            let detector = CrisisDetector::load_from_file(path).map_err(|e| {
                anyhow::anyhow!(tables_invalid_error(
                    &path.display().to_string(),
                    format!("{:#}", e)
                ))
            })?;
            tracing::info!(path = %path.display(), "Loaded crisis tables");
            Ok(detector)
        }
        None => CrisisDetector::builtin().context("Built-in crisis tables are invalid"),
    }
}

async fn run_server(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let detector = build_detector(&config)?;
    tracing::info!(
        categories = detector.tables().categories().len(),
        "Crisis detector ready"
    );

    let journal = Arc::new(InMemoryJournal::new());
    let sessions = Arc::new(InMemorySessions::new());
    let server = DiaryServer::new(config.server, detector, journal, sessions);

    server.serve().await
}

fn run_analyze(config: &Config, text: Option<String>, safety_check: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None if !io::stdin().is_terminal() => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read text from stdin")?;
            input
        }
        None => bail!("No text given. Pass it as an argument or pipe it on stdin."),
    };

    if text.is_empty() {
        bail!("Text is required for analysis");
    }

    let detector = build_detector(config)?;
    let output = if safety_check {
        serde_json::to_string_pretty(&detector.safety_check(&text))?
    } else {
        serde_json::to_string_pretty(&detector.analyze(&text))?
    };
    println!("{}", output);

    Ok(())
}

fn run_resources(config: &Config, category: Option<&str>) -> Result<()> {
    let detector = build_detector(config)?;
    let tables = detector.tables();

    let output = match category {
        Some(key) => {
            let resources = tables
                .resources_by_key(key)
                .with_context(|| format!("Resource category not found: {}", key))?;
            serde_json::to_string_pretty(&serde_json::json!({
                "category": key,
                "resources": resources,
            }))?
        }
        None => serde_json::to_string_pretty(&tables.resource_table())?,
    };
    println!("{}", output);

    Ok(())
}

fn run_check_tables(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| config.triage.tables_path.clone()) else {
        CrisisTables::builtin().context("Built-in crisis tables are invalid")?;
        println!("Built-in crisis tables are valid");
        return Ok(());
    };

    let tables = CrisisTables::load_from_file(&path).user_context_with_suggestion(
        "Crisis tables failed validation",
        "every category needs at least one distinct, non-empty phrase",
    )?;

    println!("{} is valid", path.display());
    for definition in tables.categories() {
        println!(
            "  {:<11} {:>3} phrases, {:>2} resources",
            definition.category.as_str(),
            definition.keywords.len(),
            tables.resources_for(definition.category).len()
        );
    }
    println!("  {:<11} {:>2} resources", "general", tables.general().len());

    Ok(())
}
