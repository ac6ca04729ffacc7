//! Newsletter rendering and output files.
//!
//! # Submodules
//!
//! - [`markdown`]: fills the newsletter template from a [`TemplateContext`](crate::models::TemplateContext)
//! - [`html`]: converts the Markdown to HTML and wraps it in the styled page shell
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── 2025-05-06_daily_paper.md
//! └── 2025-05-06_daily_paper.html
//! ```
//!
//! Both templates are embedded in the binary and registered once in a
//! [`minijinja::Environment`] built by [`template_env`].

pub mod html;
pub mod markdown;

use crate::config::GeneratorConfig;
use crate::errors::NewsletterError;
use crate::utils::ensure_dir;
use minijinja::{AutoEscape, Environment};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

pub(crate) const NEWSLETTER_TEMPLATE: &str = "newsletter.md";
pub(crate) const PAGE_TEMPLATE: &str = "page.html";

/// Build the template environment with both embedded templates.
///
/// Auto-escaping is off: the page shell receives already-rendered HTML.
pub fn template_env() -> Result<Environment<'static>, NewsletterError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(
        NEWSLETTER_TEMPLATE,
        include_str!("../../templates/newsletter.md.j2"),
    )?;
    env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html.j2"))?;
    Ok(env)
}

/// Write the Markdown and then the HTML newsletter for `date`.
///
/// The output directory is created when missing and existing files are
/// overwritten. Returns the Markdown and HTML paths.
#[instrument(level = "info", skip_all, fields(output_dir = %config.output_dir.display(), %date))]
pub async fn write_newsletter(
    config: &GeneratorConfig,
    date: &str,
    markdown: &str,
    html: &str,
) -> Result<(PathBuf, PathBuf), NewsletterError> {
    ensure_dir(&config.output_dir).await?;

    let md_path = config.markdown_path(date);
    fs::write(&md_path, markdown)
        .await
        .map_err(|e| NewsletterError::io(&md_path, e))?;
    info!(path = %md_path.display(), bytes = markdown.len(), "Wrote Markdown newsletter");

    let html_path = config.html_path(date);
    fs::write(&html_path, html)
        .await
        .map_err(|e| NewsletterError::io(&html_path, e))?;
    info!(path = %html_path.display(), bytes = html.len(), "Wrote HTML newsletter");

    Ok((md_path, html_path))
}
