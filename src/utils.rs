//! Small helpers: dates, log truncation, JSON error classification and
//! output directory creation.

use chrono::Local;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

use crate::errors::NewsletterError;

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut at a character boundary and
/// get `"…(+N bytes)"` appended, `N` being the number of bytes dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("标题：测试", 2), "标题…(+9 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Detect if a serde_json error indicates truncated/incomplete JSON.
///
/// An input file cut off mid-write by the upstream pipeline fails with an
/// EOF error rather than a syntax error.
pub fn looks_truncated(e: &serde_json::Error) -> bool {
    use serde_json::error::Category;
    matches!(e.classify(), Category::Eof)
}

/// Create `path` and its parents if they do not exist yet.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_dir(path: &Path) -> Result<(), NewsletterError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| NewsletterError::io(path, e))?;
    debug!("Output directory ready");
    Ok(())
}
