//! Data models for the daily paper digest.
//!
//! - [`PaperRecord`]: one entry of the upstream `{date}_HF_deepseek_clean.json` array
//! - [`ExtractedPaper`]: the fields shown in the newsletter for one paper
//! - [`TemplateContext`]: everything the Markdown template needs for one run
//! - [`RunOutcome`]: terminal state of a run
//!
//! Upstream data is loosely typed, so every string field of a record
//! tolerates being absent or `null`.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// A raw paper record as written by the collection/translation pipeline.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PaperRecord {
    /// Original (English) paper title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Hugging Face paper page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arxiv_url: String,
    /// Free text holding the translated "标题: … / 摘要: …" pair.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translation: String,
    #[serde(default)]
    pub paper: Option<PaperDetails>,
}

/// Nested `paper` object of a record. Only the code link is used.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PaperDetails {
    #[serde(default)]
    pub code: Option<String>,
}

impl PaperRecord {
    /// Code repository link, or empty when the record has none.
    pub fn code_url(&self) -> String {
        self.paper
            .as_ref()
            .and_then(|p| p.code.clone())
            .unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-paper fields rendered into the newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedPaper {
    /// Translated title, or the original one when none could be extracted.
    pub title: String,
    pub original_title: String,
    /// Translated summary; may be empty.
    pub summary: String,
    pub paper_url: String,
    pub arxiv_url: String,
    /// Empty when the paper has no code link.
    pub code_url: String,
}

/// Values substituted into the Markdown template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Target date, `YYYY-MM-DD`.
    pub date: String,
    pub total_papers: usize,
    /// Comma-joined topic labels.
    pub hot_topics: String,
    pub papers: Vec<ExtractedPaper>,
    /// Wordcloud image, relative to the project root. `None` hides the section.
    pub wordcloud_path: Option<String>,
    /// Trend chart, relative to the project root. `None` hides the section.
    pub trend_path: Option<String>,
    /// Audio narration, relative to the project root.
    pub audio_path: String,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both files were written.
    Success {
        markdown_path: PathBuf,
        html_path: PathBuf,
    },
    /// The input had no papers; nothing to publish today.
    Skipped,
    /// Missing input, nothing extracted, or an unexpected error.
    Failed,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "title": "Attention Is All You Need",
            "url": "https://huggingface.co/papers/1706.03762",
            "arxiv_url": "https://arxiv.org/abs/1706.03762",
            "translation": "标题: 注意力就是一切\n摘要: 我们提出了Transformer。",
            "paper": {"code": "https://github.com/example/transformer", "upvotes": 42}
        }"#;

        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Attention Is All You Need");
        assert_eq!(record.arxiv_url, "https://arxiv.org/abs/1706.03762");
        assert_eq!(record.code_url(), "https://github.com/example/transformer");
    }

    #[test]
    fn test_record_missing_and_null_fields() {
        let json = r#"{"title": null, "paper": {"code": null}}"#;

        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.url, "");
        assert_eq!(record.translation, "");
        assert_eq!(record.code_url(), "");
    }

    #[test]
    fn test_record_without_paper_object() {
        let record: PaperRecord = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert!(record.paper.is_none());
        assert_eq!(record.code_url(), "");
    }

    #[test]
    fn test_run_outcome_success() {
        let outcome = RunOutcome::Success {
            markdown_path: PathBuf::from("newsletters/2025-05-06_daily_paper.md"),
            html_path: PathBuf::from("newsletters/2025-05-06_daily_paper.html"),
        };
        assert!(outcome.is_success());
        assert!(!RunOutcome::Skipped.is_success());
        assert!(!RunOutcome::Failed.is_success());
    }
}
