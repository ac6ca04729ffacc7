//! HTML newsletter: CommonMark conversion plus the styled page shell.

use super::PAGE_TEMPLATE;
use crate::errors::NewsletterError;
use minijinja::{Environment, context};
use pulldown_cmark::{Options, Parser, html};
use tracing::{debug, instrument};

/// Convert Markdown to an HTML fragment. Raw inline HTML is passed through.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Wrap an HTML fragment in the page shell, with `date` in the `<title>`.
pub fn wrap_page(
    env: &Environment<'_>,
    fragment: &str,
    date: &str,
) -> Result<String, NewsletterError> {
    let template = env.get_template(PAGE_TEMPLATE)?;
    Ok(template.render(context! { content => fragment, date => date })?)
}

/// Full HTML page for a rendered Markdown newsletter.
#[instrument(level = "debug", skip_all, fields(%date))]
pub fn render_html(
    env: &Environment<'_>,
    markdown: &str,
    date: &str,
) -> Result<String, NewsletterError> {
    let page = wrap_page(env, &markdown_to_html(markdown), date)?;
    debug!(bytes = page.len(), "Rendered HTML");
    Ok(page)
}
