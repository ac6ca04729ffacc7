//! Coarse topic tagging by keyword containment.

use crate::models::ExtractedPaper;
use itertools::Itertools;

/// Keywords tagged when no list is configured.
pub const DEFAULT_TOPIC_KEYWORDS: &[&str] = &[
    "LLM",
    "Vision",
    "Audio",
    "MultiModal",
    "NLP",
    "RL",
    "Transformer",
    "GPT",
    "AIGC",
    "Diffusion",
];

/// Label used when no keyword matches ("general").
pub const DEFAULT_TOPIC_LABEL: &str = "综合领域";

/// Comma-joined keywords found in the papers' titles and summaries.
///
/// Matching is case-insensitive substring containment. Each keyword appears
/// once, in the order it is first seen walking the papers in order (and the
/// keyword list within one paper). Returns `default_label` when nothing matches.
pub fn hot_topics<S: AsRef<str>>(
    papers: &[ExtractedPaper],
    keywords: &[S],
    default_label: &str,
) -> String {
    let lowered: Vec<(&str, String)> = keywords
        .iter()
        .map(|k| (k.as_ref(), k.as_ref().to_lowercase()))
        .collect();

    let topics = papers
        .iter()
        .flat_map(|paper| {
            let content = format!("{} {}", paper.title, paper.summary).to_lowercase();
            lowered
                .iter()
                .filter(move |(_, needle)| content.contains(needle.as_str()))
                .map(|(keyword, _)| *keyword)
        })
        .unique()
        .join(", ");

    if topics.is_empty() {
        default_label.to_string()
    } else {
        topics
    }
}
