//! Tree -> plain text reduction.
//!
//! Mirrors `mdast-util-to-string`, except list items are stitched together
//! as sentences instead of being glued end to end.

use crate::ast::ContentNode;

/// Separator placed between list items.
const LIST_ITEM_SEPARATOR: &str = ". ";

/// How sibling strings are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinMode {
    /// Concatenate with no separator.
    #[default]
    Plain,
    /// Siblings are the items of a `list`: strip one trailing period from
    /// each and join with `". "`.
    ListItems,
}

impl JoinMode {
    /// Join mode for the children of `parent`.
    #[inline]
    pub fn for_children_of(parent: &ContentNode) -> Self {
        if parent.kind.is_list() {
            Self::ListItems
        } else {
            Self::Plain
        }
    }

    fn join(self, parts: Vec<String>) -> String {
        match self {
            Self::Plain => parts.concat(),
            Self::ListItems => parts
                .iter()
                .map(|item| item.strip_suffix('.').unwrap_or(item.as_str()))
                .collect::<Vec<_>>()
                .join(LIST_ITEM_SEPARATOR),
        }
    }
}

/// Flatten a node into display text.
///
/// Precedence per node: `value`, `alt`, `title`, then the children's text.
pub fn to_text(node: &ContentNode) -> String {
    match node.inline_payload() {
        Some(payload) => payload.to_string(),
        None => join_children(&node.children, JoinMode::for_children_of(node)),
    }
}

/// Flatten a sibling sequence, combining the pieces per `mode`.
pub fn join_children(children: &[ContentNode], mode: JoinMode) -> String {
    let parts = children.iter().map(to_text).collect();
    mode.join(parts)
}
