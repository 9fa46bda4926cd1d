//! Predicate-driven tree pruning.

use super::{ContentNode, NodeKind};

/// Kinds that carry readable inline prose.
///
/// Headings, code blocks, images, tables and the like are structural noise
/// for a one-line summary.
pub const TEXT_KINDS: &[NodeKind] = &[
    NodeKind::Paragraph,
    NodeKind::List,
    NodeKind::ListItem,
    NodeKind::Text,
    NodeKind::Root,
    NodeKind::Link,
    NodeKind::InlineCode,
];

/// Where a node sits in the tree being filtered.
#[derive(Debug, Clone, Copy)]
pub struct NodeSite<'a> {
    /// Position among the parent's children, before filtering.
    pub index: usize,
    /// The parent node as it was before filtering.
    pub parent: &'a ContentNode,
}

/// Return a pruned copy of `tree`, keeping nodes for which `keep` holds.
///
/// Filtering is pre-order: a rejected node takes its whole subtree with it.
/// A container that had children but lost all of them is dropped too.
/// The top node and any `root` node are never tested and always survive,
/// so the result is still anchored even if every block was removed.
///
/// The input tree is left untouched.
pub fn filter<F>(tree: &ContentNode, keep: F) -> ContentNode
where
    F: Fn(&ContentNode, NodeSite<'_>) -> bool,
{
    let mut pruned = shallow_clone(tree);
    pruned.children = filter_children(tree, &keep);
    pruned
}

fn filter_children<F>(parent: &ContentNode, keep: &F) -> Vec<ContentNode>
where
    F: Fn(&ContentNode, NodeSite<'_>) -> bool,
{
    parent
        .children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| filter_node(child, NodeSite { index, parent }, keep))
        .collect()
}

fn filter_node<F>(node: &ContentNode, site: NodeSite<'_>, keep: &F) -> Option<ContentNode>
where
    F: Fn(&ContentNode, NodeSite<'_>) -> bool,
{
    let anchored = node.kind.is_root();
    if !anchored && !keep(node, site) {
        return None;
    }

    let children = filter_children(node, keep);
    if !anchored && node.has_children() && children.is_empty() {
        return None;
    }

    let mut pruned = shallow_clone(node);
    pruned.children = children;
    Some(pruned)
}

/// Copy a node's own fields without its children.
fn shallow_clone(node: &ContentNode) -> ContentNode {
    ContentNode {
        kind: node.kind.clone(),
        value: node.value.clone(),
        alt: node.alt.clone(),
        title: node.title.clone(),
        children: Vec::new(),
    }
}

/// Keep only kinds listed in [`TEXT_KINDS`].
pub fn text_only(tree: &ContentNode) -> ContentNode {
    filter(tree, |node, _| TEXT_KINDS.contains(&node.kind))
}

/// Keep only the first top-level block and everything beneath it.
pub fn first_block(tree: &ContentNode) -> ContentNode {
    filter(tree, |_, site| !site.parent.kind.is_root() || site.index == 0)
}
