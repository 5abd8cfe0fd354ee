//! CLI command definitions for bugforge.
//!
//! The `debug` subcommand stands in for the HTTP boundary of a full
//! deployment: it collects a `DebugTask` from flags, runs the
//! orchestration, and prints the report as JSON. A propagated provider
//! error surfaces as a nonzero exit with the error chain.

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::llm::GroqClient;
use crate::orchestrator::{DebugOrchestrator, DebugOrchestratorConfig};
use crate::types::{DebugTask, ExerciseLevel};

/// AI-assisted code debugging from the command line.
#[derive(Parser)]
#[command(name = "bugforge")]
#[command(about = "Debug code with an LLM and generate practice material")]
#[command(version)]
#[command(
    long_about = "bugforge sends buggy code to an LLM completion provider and parses the reply \
into corrected code, an error analysis and a fix explanation, optionally with practice \
exercises and a short course.\n\nExample usage:\n  bugforge debug --file broken.js --error \
\"x is not defined\" --exercises 3 --level beginner"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Debug a piece of code and optionally generate exercises and a course.
    Debug(DebugArgs),
}

/// Arguments for `bugforge debug`.
#[derive(Parser, Debug)]
pub struct DebugArgs {
    /// Path to the file containing the buggy code.
    #[arg(short, long, conflicts_with = "code")]
    pub file: Option<String>,

    /// Buggy code passed inline.
    #[arg(long)]
    pub code: Option<String>,

    /// Error message observed when running the code.
    #[arg(short, long, default_value = "")]
    pub error: String,

    /// Programming language of the code.
    #[arg(long, default_value = "javascript")]
    pub language: String,

    /// Number of practice exercises to generate (omit to skip exercises).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub exercises: Option<u8>,

    /// Developer level the exercises should target.
    #[arg(long, value_enum, default_value_t = ExerciseLevel::Beginner)]
    pub level: ExerciseLevel,

    /// Also generate a short course about the error pattern.
    #[arg(long)]
    pub course: bool,

    /// Model to use for all completion calls (defaults to the provider's).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Groq API key (can also be set via GROQ_API_KEY env var).
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the CLI with pre-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Debug(args) => run_debug(args).await,
    }
}

/// Executes the `debug` subcommand.
async fn run_debug(args: DebugArgs) -> anyhow::Result<()> {
    let code = match (&args.file, &args.code) {
        (Some(path), _) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        (None, Some(code)) => code.clone(),
        (None, None) => anyhow::bail!("either --file or --code is required"),
    };

    let client = match args.api_key {
        Some(key) => GroqClient::with_api_key(key),
        None => GroqClient::from_env().context("No API key configured")?,
    };

    let config = DebugOrchestratorConfig::new().with_model(args.model.unwrap_or_default());
    let orchestrator = DebugOrchestrator::new(Arc::new(client), config);

    let mut task = DebugTask::new(code)
        .with_error(args.error)
        .with_language(args.language);
    if let Some(count) = args.exercises {
        task = task.with_exercises(count, args.level);
    }
    if args.course {
        task = task.with_course();
    }

    let report = orchestrator
        .run(&task)
        .await
        .context("Debugging request failed")?;

    info!(
        exercises = report.exercises.len(),
        course_sections = report.course.as_ref().map(Vec::len),
        "Debug orchestration complete"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
