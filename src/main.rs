//! classify - batch feedback classification
//!
//! Reads rows from a JSON file, labels them through an OpenAI-compatible
//! endpoint and writes the labeled rows back out.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use feedback_classifier::config::{Config, Validate};
use feedback_classifier::core::sources::{JsonRowSink, JsonRowSource, RowSink, RowSource};
use feedback_classifier::utils::logging::init_logging;
use feedback_classifier::utils::mask_secret;
use feedback_classifier::{
    Classifier, ClassificationEngine, ProgressCallback, StaticTopicProvider, build_info,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "classify", version)]
#[command(about = "Classify customer feedback into hierarchical labels with an LLM")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short, long, global = true, value_name = "PATH", env = "CLASSIFIER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every row of a JSON file
    Run {
        /// JSON array of row objects
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Where to write the labeled rows
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Topic id; the `llm` section is used when omitted
        #[arg(short, long)]
        topic: Option<String>,

        /// Also write the batch report as JSON
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Forget cached labels before running
        #[arg(long)]
        clear_cache: bool,
    },

    /// Delete every cached label
    ClearCache,

    /// Show the resolved configuration and whether it is valid
    CheckConfig,

    /// Classify a single feedback text, bypassing the cache
    Probe {
        #[arg(short, long)]
        feedback: String,

        #[arg(short, long)]
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::CheckConfig => check_config(cli.config.as_deref()).await,
        Command::ClearCache => {
            let engine = engine(cli.config.as_deref()).await?;
            engine.clear_cache().await.context("Failed to clear label cache")?;
            println!("Label cache cleared");
            Ok(ExitCode::SUCCESS)
        }
        Command::Probe { feedback, topic } => {
            let engine = engine(cli.config.as_deref()).await?;
            let client = engine.classifier(topic.as_deref()).await?;

            match client.classify(&feedback).await {
                Some(label) => {
                    println!("{}", label);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No label obtained from {}", client.endpoint());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Run {
            input,
            output,
            topic,
            report,
            clear_cache,
        } => {
            let engine = engine(cli.config.as_deref()).await?;
            if clear_cache {
                engine.clear_cache().await.context("Failed to clear label cache")?;
            }

            let rows = JsonRowSource::new(&input)
                .read_rows()
                .await
                .with_context(|| format!("Failed to read rows from {}", input.display()))?;

            let outcome = engine
                .run(&rows, topic.as_deref(), Some(progress_logger()))
                .await?;

            JsonRowSink::new(&output)
                .write_rows(&outcome.rows)
                .await
                .with_context(|| format!("Failed to write rows to {}", output.display()))?;

            if let Some(path) = report {
                let json = serde_json::to_string_pretty(&outcome.report)?;
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
            }

            let stats = outcome.report.stats;
            println!("Batch {}", outcome.report.batch_id);
            println!("  rows:        {}", rows.len());
            println!("  tasks:       {}", stats.total);
            println!("  cache hits:  {}", stats.cache_hits);
            println!("  api calls:   {}", stats.api_calls);
            println!("  failed:      {}", stats.failed);
            println!("  success:     {:.1}%", outcome.report.success_rate);
            println!("  duration:    {} ms", outcome.report.duration_ms);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::from_env()
            .await
            .context("Failed to load configuration from environment"),
    }
}

async fn engine(config_path: Option<&Path>) -> anyhow::Result<ClassificationEngine> {
    let config = load_config(config_path).await?;
    init_logging(config.logging());
    info!("{}", build_info());

    let topics = Arc::new(StaticTopicProvider::from_config(&config));
    Ok(ClassificationEngine::new(config, topics).await)
}

/// Logs progress roughly every tenth of the batch
fn progress_logger() -> ProgressCallback {
    Arc::new(|done: usize, total: usize| {
        let step = (total / 10).max(1);
        if done % step == 0 || done == total {
            info!("Progress: {}/{}", done, total);
        }
    })
}

async fn check_config(path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let mut config = match path {
        Some(path) => Config::parse_file(path).await?,
        None => Config::from_env_unvalidated()?,
    };
    init_logging(config.logging());

    let template_status = config.load_prompt_templates().await;

    let mut shown = config.clone();
    for topic in std::iter::once(&mut shown.engine.llm).chain(shown.engine.topics.iter_mut()) {
        topic.api_key = mask_secret(&topic.api_key);
    }
    println!("{}", shown.to_yaml()?);

    let cache_path = &config.cache().path;
    println!(
        "cache file:      {} ({})",
        cache_path.display(),
        if cache_path.exists() { "exists" } else { "missing" }
    );
    for topic in std::iter::once(config.llm()).chain(config.topics()) {
        if let Some(file) = &topic.prompt_template_file {
            println!(
                "prompt file:     {} [{}] ({})",
                file.display(),
                topic.id,
                if file.exists() { "exists" } else { "missing" }
            );
        }
    }

    if let Err(e) = template_status {
        println!("status:          invalid");
        return Err(e.into());
    }
    match config.engine.validate() {
        Ok(()) => {
            println!("status:          valid");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("status:          invalid");
            println!("  {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
