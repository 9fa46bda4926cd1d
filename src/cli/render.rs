//! `render` command: one landing page from a post export.

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::args::RenderArgs;
use super::common::{is_stdin, read_stdin};
use super::output::write_json;
use crate::config::{Config, ConfigError};
use crate::landing::{LandingOptions, LandingPage};
use crate::pagination::PageWindow;
use crate::post::PostSource;
use crate::utils::{date::DateTimeUtc, plural_count};
use crate::{debug, debug_do, log};

/// Load the export named by `args`, build the requested page and print it.
pub fn render_landing(args: &RenderArgs, config: &Config) -> Result<()> {
    let source = if is_stdin(&args.input) {
        PostSource::from_json_str(&read_stdin()?).context("failed to parse post export from stdin")?
    } else {
        PostSource::from_path(&args.input)
            .with_context(|| format!("failed to load {}", args.input.display()))?
    };

    let subject = resolve_subject(config, &source)?;
    let now = args.today.unwrap_or_else(DateTimeUtc::now);
    let page = build_page(&source, subject, args.page, config, now)?;

    write_json(&page, args.pretty, args.output.as_deref())
}

/// Subject from the command line or config, else the one the export names.
fn resolve_subject<'a>(config: &'a Config, source: &'a PostSource) -> Result<&'a str> {
    match config.subject().or_else(|| source.subject()) {
        Some(subject) => Ok(subject),
        None => bail!(ConfigError::Validation(
            "no subject: pass --subject, set `landing.subject` or name one in the export".into()
        )),
    }
}

/// Query one page of `subject` and assemble its landing page as JSON.
fn build_page(
    source: &PostSource,
    subject: &str,
    current_page: i64,
    config: &Config,
    now: DateTimeUtc,
) -> Result<JsonValue> {
    let page_size = config.page_size();
    let result = source.query(subject, PageWindow::for_page(current_page, page_size));

    let options = LandingOptions {
        subject,
        total_count: result.total_count,
        current_page,
        page_size,
        excerpt_length: config.excerpt_length(),
        now,
    };
    let landing = LandingPage::build(&result.posts, &options);

    log!(
        "render";
        "{}: {} of {} on page {}",
        landing.title,
        plural_count(landing.entry_count(), "post"),
        result.total_count,
        current_page
    );
    debug_do! {
        for group in &landing.groups {
            debug!("render"; "{}: {}", group.label, plural_count(group.entries.len(), "post"));
        }
    }

    Ok(serde_json::to_value(&landing)?)
}
