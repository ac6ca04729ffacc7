//! Directory layout and topic settings for a run.
//!
//! Defaults follow the layout the rest of the daily-paper pipeline writes:
//!
//! ```text
//! HF-day-paper-deepseek/{date}_HF_deepseek_clean.json   input
//! stats/stats_report.json                               optional, existence only
//! newsletters/{date}_daily_paper.{md,html}              output
//! ```
//!
//! A YAML file may override any field; missing fields keep their defaults.
//! CLI flags are applied on top (see [`GeneratorConfig::with_overrides`]).

use crate::cli::Cli;
use crate::errors::NewsletterError;
use crate::topics::{DEFAULT_TOPIC_KEYWORDS, DEFAULT_TOPIC_LABEL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the dated paper JSON files.
    pub data_dir: PathBuf,
    /// Its presence enables the wordcloud and trend sections.
    pub stats_file: PathBuf,
    /// Where the newsletters are written; created when missing.
    pub output_dir: PathBuf,
    pub topic_keywords: Vec<String>,
    /// Shown when no keyword matches.
    pub default_topic: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("HF-day-paper-deepseek"),
            stats_file: PathBuf::from("stats").join("stats_report.json"),
            output_dir: PathBuf::from("newsletters"),
            topic_keywords: DEFAULT_TOPIC_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            default_topic: DEFAULT_TOPIC_LABEL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a YAML config document.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, NewsletterError> {
        serde_yaml::from_str(yaml).map_err(|source| NewsletterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, NewsletterError> {
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| NewsletterError::io(path, e))?;
        let config = Self::from_yaml(&yaml, path)?;
        info!("Loaded configuration");
        Ok(config)
    }

    /// Apply directory flags given on the command line.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(file) = &cli.stats_file {
            self.stats_file = file.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        self
    }

    /// `{data_dir}/{date}_HF_deepseek_clean.json`
    pub fn input_path(&self, date: &str) -> PathBuf {
        self.data_dir.join(format!("{date}_HF_deepseek_clean.json"))
    }

    /// `{output_dir}/{date}_daily_paper.md`
    pub fn markdown_path(&self, date: &str) -> PathBuf {
        self.output_dir.join(format!("{date}_daily_paper.md"))
    }

    /// `{output_dir}/{date}_daily_paper.html`
    pub fn html_path(&self, date: &str) -> PathBuf {
        self.output_dir.join(format!("{date}_daily_paper.html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.input_path("2025-05-06"),
            PathBuf::from("HF-day-paper-deepseek/2025-05-06_HF_deepseek_clean.json")
        );
        assert_eq!(config.stats_file, PathBuf::from("stats/stats_report.json"));
        assert_eq!(
            config.markdown_path("2025-05-06"),
            PathBuf::from("newsletters/2025-05-06_daily_paper.md")
        );
        assert_eq!(
            config.html_path("2025-05-06"),
            PathBuf::from("newsletters/2025-05-06_daily_paper.html")
        );
        assert_eq!(config.topic_keywords.len(), 10);
        assert_eq!(config.default_topic, "综合领域");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "output_dir: /srv/newsletters\ntopic_keywords: [Robotics, LLM]\n";
        let config = GeneratorConfig::from_yaml(yaml, Path::new("config.yaml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/newsletters"));
        assert_eq!(config.topic_keywords, vec!["Robotics", "LLM"]);
        assert_eq!(config.data_dir, PathBuf::from("HF-day-paper-deepseek"));
        assert_eq!(config.default_topic, "综合领域");
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = GeneratorConfig::from_yaml("topic_keywords: 3", Path::new("bad.yaml"))
            .unwrap_err();
        assert!(matches!(err, NewsletterError::Config { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "hf_daily_newsletter",
            "--data-dir",
            "/data/papers",
            "--output-dir",
            "/tmp/out",
        ]);
        let config = GeneratorConfig::default().with_overrides(&cli);
        assert_eq!(config.data_dir, PathBuf::from("/data/papers"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.stats_file, PathBuf::from("stats/stats_report.json"));
    }
}
