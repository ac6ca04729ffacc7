//! Title and summary extraction from the translation blob.
//!
//! The upstream translation step writes a loosely formatted pair such as:
//!
//! ```text
//! 标题：基于扩散模型的视频生成
//! 摘要：我们提出了一种……
//! ```
//!
//! Extraction tries an ordered list of [`Strategy`] values per field and keeps
//! the first one that matches. Later strategies are never consulted once an
//! earlier one has matched. When no title strategy matches, the record's
//! original title is used; when no summary strategy matches, the summary is
//! empty.

use crate::models::{ExtractedPaper, PaperRecord};
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Literal marker for the summary tail fallback. Full-width colon only.
const SUMMARY_MARKER: &str = "摘要：";

// `标题:` + rest of the line, followed by a `摘要:` line or the end of text.
static LABELLED_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"标题[:：]\s*([^\n]+)(?:\s*\n\s*摘要[:：]|\z)").expect("valid regex")
});

// Any line directly followed by a line starting with `摘要:`.
static LINE_BEFORE_SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([^\n]+)\n\s*摘要[:：]").expect("valid regex"));

// `摘要:` + content up to the next `label:` line or the end of text.
static LABELLED_SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)摘要[:：]\s*([^\n].+?)\s*(?:\n\s*[^：\n]+[:：]|\z)").expect("valid regex")
});

/// A named way of pulling one field out of the translation text.
struct Strategy {
    name: &'static str,
    matcher: fn(&str) -> Option<String>,
}

const TITLE_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "labelled_title",
        matcher: labelled_title,
    },
    Strategy {
        name: "line_before_summary",
        matcher: line_before_summary,
    },
];

const SUMMARY_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "labelled_summary",
        matcher: labelled_summary,
    },
    Strategy {
        name: "text_after_marker",
        matcher: text_after_marker,
    },
];

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn labelled_title(text: &str) -> Option<String> {
    first_capture(&LABELLED_TITLE_RE, text)
}

fn line_before_summary(text: &str) -> Option<String> {
    first_capture(&LINE_BEFORE_SUMMARY_RE, text)
}

fn labelled_summary(text: &str) -> Option<String> {
    first_capture(&LABELLED_SUMMARY_RE, text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn text_after_marker(text: &str) -> Option<String> {
    text.split_once(SUMMARY_MARKER)
        .map(|(_, rest)| rest.trim().to_string())
}

/// Run `strategies` in order and return the name and value of the first hit.
fn first_match(strategies: &[Strategy], text: &str) -> Option<(&'static str, String)> {
    strategies
        .iter()
        .find_map(|s| (s.matcher)(text).map(|value| (s.name, value)))
}

/// Translated title, falling back to `original_title`.
pub fn extract_title(translation: &str, original_title: &str) -> String {
    match first_match(TITLE_STRATEGIES, translation) {
        Some((strategy, title)) => {
            debug!(strategy, "Title extracted");
            title.trim().to_string()
        }
        None => {
            debug!(
                original_title,
                translation = %truncate_for_log(translation, 80),
                "No title pattern matched; using original title"
            );
            original_title.trim().to_string()
        }
    }
}

/// Translated summary, or an empty string.
pub fn extract_summary(translation: &str) -> String {
    match first_match(SUMMARY_STRATEGIES, translation) {
        Some((strategy, summary)) => {
            debug!(strategy, "Summary extracted");
            summary
        }
        None => String::new(),
    }
}

/// Build the newsletter view of one record.
pub fn extract_paper(record: &PaperRecord) -> ExtractedPaper {
    ExtractedPaper {
        title: extract_title(&record.translation, &record.title),
        original_title: record.title.clone(),
        summary: extract_summary(&record.translation),
        paper_url: record.url.clone(),
        arxiv_url: record.arxiv_url.clone(),
        code_url: record.code_url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperDetails;

    fn record(title: &str, translation: &str) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            url: "https://huggingface.co/papers/2501.00001".to_string(),
            arxiv_url: "https://arxiv.org/abs/2501.00001".to_string(),
            translation: translation.to_string(),
            paper: None,
        }
    }

    #[test]
    fn test_well_formed_pair() {
        let text = "标题: 基于扩散模型的视频生成  \n摘要:   我们提出了一种新的视频生成方法。  ";
        assert_eq!(extract_title(text, "Video Diffusion"), "基于扩散模型的视频生成");
        assert_eq!(extract_summary(text), "我们提出了一种新的视频生成方法。");
    }

    #[test]
    fn test_full_width_colons() {
        let text = "标题：多模态大模型综述\n摘要：本文回顾了多模态大模型的发展。";
        assert_eq!(extract_title(text, "A Survey"), "多模态大模型综述");
        assert_eq!(extract_summary(text), "本文回顾了多模态大模型的发展。");
    }

    #[test]
    fn test_blank_line_between_labels() {
        let text = "标题：强化学习的新视角\n\n  摘要：我们重新审视了奖励设计。";
        assert_eq!(extract_title(text, "RL"), "强化学习的新视角");
        assert_eq!(extract_summary(text), "我们重新审视了奖励设计。");
    }

    #[test]
    fn test_title_as_last_line() {
        let text = "标题：只有标题";
        assert_eq!(extract_title(text, "Only Title"), "只有标题");
        assert_eq!(extract_summary(text), "");
    }

    #[test]
    fn test_multiline_summary_stops_at_next_label() {
        let text = "标题：长摘要\n摘要：第一段内容。\n第二段内容。\n关键词：LLM";
        assert_eq!(extract_summary(text), "第一段内容。\n第二段内容。");
    }

    #[test]
    fn test_line_before_summary_fallback() {
        let text = "视觉语言模型的高效训练\n摘要：我们提出了一种高效的训练方法。";
        assert_eq!(
            extract_title(text, "Efficient VLM Training"),
            "视觉语言模型的高效训练"
        );
        assert_eq!(extract_summary(text), "我们提出了一种高效的训练方法。");
    }

    #[test]
    fn test_original_title_fallback() {
        let text = "This translation has no labels at all.";
        assert_eq!(extract_title(text, "  Original Title "), "Original Title");
        assert_eq!(extract_summary(text), "");
    }

    #[test]
    fn test_empty_translation() {
        assert_eq!(extract_title("", "Fallback"), "Fallback");
        assert_eq!(extract_summary(""), "");
    }

    #[test]
    fn test_summary_marker_tail_fallback() {
        // A single character is too short for the labelled pattern.
        let text = "标题：短\n摘要：好";
        assert_eq!(extract_summary(text), "好");
    }

    #[test]
    fn test_ascii_colon_marker_has_no_tail_fallback() {
        let text = "摘要:x";
        assert_eq!(extract_summary(text), "");
    }

    #[test]
    fn test_extract_paper_fields() {
        let mut rec = record(
            "Scaling Laws for Diffusion",
            "标题：扩散模型的缩放定律\n摘要：我们研究了扩散模型的缩放行为。",
        );
        rec.paper = Some(PaperDetails {
            code: Some("https://github.com/example/scaling".to_string()),
        });

        let paper = extract_paper(&rec);
        assert_eq!(paper.title, "扩散模型的缩放定律");
        assert_eq!(paper.original_title, "Scaling Laws for Diffusion");
        assert_eq!(paper.summary, "我们研究了扩散模型的缩放行为。");
        assert_eq!(paper.paper_url, "https://huggingface.co/papers/2501.00001");
        assert_eq!(paper.arxiv_url, "https://arxiv.org/abs/2501.00001");
        assert_eq!(paper.code_url, "https://github.com/example/scaling");
    }

    #[test]
    fn test_extract_paper_without_code() {
        let paper = extract_paper(&record("T", "标题：标题\n摘要：内容内容"));
        assert_eq!(paper.code_url, "");
    }
}
