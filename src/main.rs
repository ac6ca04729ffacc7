//! # HF Daily Newsletter
//!
//! Renders the Hugging Face daily paper digest into a Markdown and an HTML
//! newsletter from the translated paper data produced earlier in the
//! pipeline.
//!
//! ## Usage
//!
//! ```sh
//! hf_daily_newsletter --date 2025-05-06
//! ```
//!
//! ## Pipeline
//!
//! 1. **Loading**: read `HF-day-paper-deepseek/{date}_HF_deepseek_clean.json`
//! 2. **Extraction**: pull the translated title and summary out of each record
//! 3. **Rendering**: fill the Markdown template, convert it to HTML
//! 4. **Output**: write `newsletters/{date}_daily_paper.{md,html}`
//!
//! The process exits with `0` when both files were written and `1` otherwise,
//! including days without papers.

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod errors;
mod extract;
mod generator;
mod models;
mod outputs;
mod topics;
mod utils;

use cli::Cli;
use config::GeneratorConfig;
use errors::NewsletterError;
use generator::NewsletterGenerator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let generator = match build_generator(&args).await {
        Ok(generator) => generator,
        Err(e) => {
            error!(error = %e, "Failed to initialize newsletter generator");
            return ExitCode::FAILURE;
        }
    };

    let outcome = generator.generate(args.date_string().as_deref()).await;

    let elapsed = start_time.elapsed();
    info!(?outcome, millis = elapsed.as_millis() as u64, "Execution complete");

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Layer config file and CLI overrides, then build the generator.
#[instrument(level = "info", skip_all)]
async fn build_generator(args: &Cli) -> Result<NewsletterGenerator, NewsletterError> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path).await?,
        None => GeneratorConfig::default(),
    }
    .with_overrides(args);

    let generator = NewsletterGenerator::new(config)?;
    let config = generator.config();
    info!(
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        stats_file = %config.stats_file.display(),
        "Newsletter generator ready"
    );
    Ok(generator)
}
