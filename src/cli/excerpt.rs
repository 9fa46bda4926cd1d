//! `excerpt` command: the excerpt of one document tree.

use anyhow::{Context, Result, bail};

use super::args::ExcerptArgs;
use super::common::read_input;
use crate::ast::ContentNode;
use crate::config::Config;
use crate::debug;
use crate::excerpt::excerpt;

/// Print the excerpt of the tree named by `args` as a single line.
pub fn print_excerpt(args: &ExcerptArgs, config: &Config) -> Result<()> {
    let content = read_input(&args.tree)?;
    let line = excerpt_of(&content, config.excerpt_length())
        .with_context(|| format!("invalid document tree in {}", args.tree.display()))?;
    println!("{line}");
    Ok(())
}

fn excerpt_of(content: &str, max_len: usize) -> Result<String> {
    let tree: ContentNode = serde_json::from_str(content)?;
    if !tree.kind.is_root() {
        bail!("tree must start at a `root` node, found `{}`", tree.kind);
    }

    let line = excerpt(&tree, max_len);
    debug!("excerpt"; "{} chars from {} top-level blocks", line.chars().count(), tree.children.len());
    Ok(line)
}
