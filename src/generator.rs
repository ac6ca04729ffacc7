//! One newsletter run: load → extract → render → write.
//!
//! [`NewsletterGenerator::generate`] never returns an error. Every run ends
//! in one of three [`RunOutcome`]s:
//!
//! | Situation | Log level | Outcome |
//! |-----------|-----------|---------|
//! | both files written | info | `Success` |
//! | input is empty or not an array | info | `Skipped` |
//! | input file missing | error | `Failed` |
//! | no paper extracted | warn | `Failed` |
//! | malformed JSON, I/O or template error | error | `Failed` |
//!
//! Files already written when a later step fails are left in place.

use crate::config::GeneratorConfig;
use crate::errors::NewsletterError;
use crate::extract::extract_paper;
use crate::models::{ExtractedPaper, PaperRecord, RunOutcome, TemplateContext};
use crate::outputs::{html, markdown, template_env, write_newsletter};
use crate::topics::hot_topics;
use crate::utils::{looks_truncated, today};
use minijinja::Environment;
use serde_json::Value;
use tokio::fs;
use tracing::{error, info, instrument, warn};

const WORDCLOUD_PATH: &str = "images/keywords_wordcloud.png";
const TREND_PATH: &str = "images/daily_papers.png";

/// Renders the daily paper newsletter for a given date.
pub struct NewsletterGenerator {
    config: GeneratorConfig,
    env: Environment<'static>,
}

impl NewsletterGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, NewsletterError> {
        Ok(Self {
            config,
            env: template_env()?,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the newsletter for `date` (`YYYY-MM-DD`), or today when `None`.
    #[instrument(level = "info", skip(self))]
    pub async fn generate(&self, date: Option<&str>) -> RunOutcome {
        let date = date.map(str::to_string).unwrap_or_else(today);

        match self.try_generate(&date).await {
            Ok(outcome) => outcome,
            Err(e) => {
                if let NewsletterError::Json(ref json_err) = e {
                    if looks_truncated(json_err) {
                        warn!(%date, "Paper data ends abruptly; upstream may still be writing it");
                    }
                }
                error!(%date, error = %e, "Failed to generate newsletter");
                RunOutcome::Failed
            }
        }
    }

    async fn try_generate(&self, date: &str) -> Result<RunOutcome, NewsletterError> {
        let input_path = self.config.input_path(date);
        if !input_path.exists() {
            error!(path = %input_path.display(), %date, "No paper data file for date");
            return Ok(RunOutcome::Failed);
        }

        let raw = fs::read_to_string(&input_path)
            .await
            .map_err(|e| NewsletterError::io(&input_path, e))?;
        let items = match serde_json::from_str::<Value>(&raw)? {
            Value::Array(items) if !items.is_empty() => items,
            _ => {
                info!(%date, "No papers for date; skipping newsletter");
                return Ok(RunOutcome::Skipped);
            }
        };

        let records = items
            .into_iter()
            .map(serde_json::from_value::<PaperRecord>)
            .collect::<Result<Vec<_>, _>>()?;
        let papers: Vec<ExtractedPaper> = records.iter().map(extract_paper).collect();
        if papers.is_empty() {
            warn!(%date, "No paper information extracted");
            return Ok(RunOutcome::Failed);
        }
        info!(count = papers.len(), "Extracted papers");

        let has_stats = self.config.stats_file.exists();
        if !has_stats {
            warn!(
                path = %self.config.stats_file.display(),
                "Stats report not found; using simplified layout"
            );
        }

        let ctx = self.build_context(date, papers, has_stats);
        let newsletter_md = markdown::render_markdown(&self.env, &ctx)?;
        let newsletter_html = html::render_html(&self.env, &newsletter_md, date)?;

        let (markdown_path, html_path) =
            write_newsletter(&self.config, date, &newsletter_md, &newsletter_html).await?;
        info!(path = %markdown_path.display(), "Newsletter generated");

        Ok(RunOutcome::Success {
            markdown_path,
            html_path,
        })
    }

    fn build_context(
        &self,
        date: &str,
        papers: Vec<ExtractedPaper>,
        has_stats: bool,
    ) -> TemplateContext {
        TemplateContext {
            date: date.to_string(),
            total_papers: papers.len(),
            hot_topics: hot_topics(
                &papers,
                self.config.topic_keywords.as_slice(),
                &self.config.default_topic,
            ),
            wordcloud_path: has_stats.then(|| WORDCLOUD_PATH.to_string()),
            trend_path: has_stats.then(|| TREND_PATH.to_string()),
            audio_path: format!("audio/{date}_daily_papers.mp3"),
            papers,
        }
    }
}
