//! Markdown newsletter rendering.
//!
//! Layout, top to bottom: header with the date, statistics (paper count and
//! hot topics), one section per paper, then the trailer. The wordcloud and
//! trend sections appear only when their path is set in the context; the
//! audio link is always present. Asset files are never checked for existence.

use super::NEWSLETTER_TEMPLATE;
use crate::errors::NewsletterError;
use crate::models::TemplateContext;
use minijinja::Environment;
use tracing::{debug, instrument};

/// Render the Markdown newsletter for `ctx`.
#[instrument(level = "debug", skip_all, fields(date = %ctx.date, papers = ctx.total_papers))]
pub fn render_markdown(
    env: &Environment<'_>,
    ctx: &TemplateContext,
) -> Result<String, NewsletterError> {
    let template = env.get_template(NEWSLETTER_TEMPLATE)?;
    let markdown = template.render(ctx)?;
    debug!(bytes = markdown.len(), "Rendered Markdown");
    Ok(markdown)
}
