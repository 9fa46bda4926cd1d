//! Document trees: mdast-shaped nodes and predicate filtering.
//!
//! - [`ContentNode`] / [`NodeKind`] - the tree itself, deserialized from mdast JSON
//! - [`filter`] - pruning by predicate, plus the two excerpt passes

pub mod filter;
mod node;

pub use filter::{first_block, text_only};
pub use node::{ContentNode, NodeKind};
