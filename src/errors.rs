//! Error type for a newsletter run.
//!
//! Expected "no newsletter today" situations (missing input, empty input,
//! nothing extracted) are not errors; they are reported through
//! [`RunOutcome`](crate::models::RunOutcome). Everything here is an
//! unexpected failure that aborts the run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("I/O error at `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse paper data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to parse config `{}`: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl NewsletterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
