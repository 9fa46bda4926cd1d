//! Short plain-text excerpts from document trees.
//!
//! An excerpt is built in three steps:
//!
//! 1. [`text_only`] drops every node that is not inline prose
//! 2. [`first_block`] keeps the first top-level block that is left
//! 3. [`to_text`] flattens it, then the result is truncated
//!
//! A release note that opens with a heading or a code block is excerpted
//! from its first paragraph or list instead.
//!
//! [`text_only`]: crate::ast::text_only
//! [`first_block`]: crate::ast::first_block

pub mod reduce;

pub use reduce::to_text;

use crate::ast::{ContentNode, first_block, text_only};

/// Default excerpt length in characters.
pub const EXCERPT_LENGTH: usize = 200;

/// Appended when an excerpt was cut short.
pub const ELLIPSIS: char = '…';

/// Build a best-guess excerpt of at most `max_len` characters.
///
/// If the reduced text is longer than `max_len` it is cut at `max_len`
/// characters and a single [`ELLIPSIS`] is appended, so the result may be
/// `max_len + 1` characters long. A document without any prose block
/// yields an empty string.
pub fn excerpt(tree: &ContentNode, max_len: usize) -> String {
    let text = to_text(&first_block(&text_only(tree)));
    truncate(text, max_len)
}

/// Cut `text` to `max_len` characters, marking the cut with [`ELLIPSIS`].
pub fn truncate(mut text: String, max_len: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_len) {
        text.truncate(cut);
        text.push(ELLIPSIS);
    }
    text
}
