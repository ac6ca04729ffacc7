//! Command-line interface definitions.
//!
//! Only `--date` is needed day to day; the directory flags exist for running
//! outside the repository layout the pipeline normally uses.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Generate the Hugging Face daily paper newsletter.
///
/// # Examples
///
/// ```sh
/// # Today's newsletter
/// hf_daily_newsletter
///
/// # A specific day
/// hf_daily_newsletter --date 2025-05-06
///
/// # Custom layout
/// hf_daily_newsletter -d 2025-05-06 --data-dir ./data --output-dir ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Date to generate the newsletter for (YYYY-MM-DD); defaults to today
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWSLETTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the dated paper JSON files
    #[arg(long, env = "NEWSLETTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output directory for the Markdown and HTML newsletters
    #[arg(long, env = "NEWSLETTER_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Stats report whose presence enables the image sections
    #[arg(long, env = "NEWSLETTER_STATS_FILE")]
    pub stats_file: Option<PathBuf>,
}

impl Cli {
    /// Requested date as `YYYY-MM-DD`, if one was given.
    pub fn date_string(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date in YYYY-MM-DD format: {e}"))
}
