//! Document tree nodes in mdast shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node kind, named after the mdast `type` tag.
///
/// Kinds the excerpt pipeline never looks at still get a variant so a tree
/// can be inspected without string comparisons. Anything else (MDX nodes,
/// plugin extensions) is kept verbatim in [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    ThematicBreak,
    Blockquote,
    List,
    ListItem,
    Html,
    Code,
    Definition,
    FootnoteDefinition,
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Break,
    Link,
    Image,
    LinkReference,
    ImageReference,
    FootnoteReference,
    Table,
    TableRow,
    TableCell,
    Yaml,
    Other(String),
}

impl NodeKind {
    /// The mdast `type` tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::ThematicBreak => "thematicBreak",
            Self::Blockquote => "blockquote",
            Self::List => "list",
            Self::ListItem => "listItem",
            Self::Html => "html",
            Self::Code => "code",
            Self::Definition => "definition",
            Self::FootnoteDefinition => "footnoteDefinition",
            Self::Text => "text",
            Self::Emphasis => "emphasis",
            Self::Strong => "strong",
            Self::Delete => "delete",
            Self::InlineCode => "inlineCode",
            Self::Break => "break",
            Self::Link => "link",
            Self::Image => "image",
            Self::LinkReference => "linkReference",
            Self::ImageReference => "imageReference",
            Self::FootnoteReference => "footnoteReference",
            Self::Table => "table",
            Self::TableRow => "tableRow",
            Self::TableCell => "tableCell",
            Self::Yaml => "yaml",
            Self::Other(name) => name,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "root" => Self::Root,
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "thematicBreak" => Self::ThematicBreak,
            "blockquote" => Self::Blockquote,
            "list" => Self::List,
            "listItem" => Self::ListItem,
            "html" => Self::Html,
            "code" => Self::Code,
            "definition" => Self::Definition,
            "footnoteDefinition" => Self::FootnoteDefinition,
            "text" => Self::Text,
            "emphasis" => Self::Emphasis,
            "strong" => Self::Strong,
            "delete" => Self::Delete,
            "inlineCode" => Self::InlineCode,
            "break" => Self::Break,
            "link" => Self::Link,
            "image" => Self::Image,
            "linkReference" => Self::LinkReference,
            "imageReference" => Self::ImageReference,
            "footnoteReference" => Self::FootnoteReference,
            "table" => Self::Table,
            "tableRow" => Self::TableRow,
            "tableCell" => Self::TableCell,
            "yaml" => Self::Yaml,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in a document tree.
///
/// Deserializes straight from mdast JSON. Fields the excerpt pipeline does
/// not use (`position`, `url`, `depth`, ...) are dropped on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Inline payload: `value`, then `alt`, then `title`.
    ///
    /// Empty strings are skipped, so a link with `title: ""` falls through
    /// to its children.
    pub fn inline_payload(&self) -> Option<&str> {
        [&self.value, &self.alt, &self.title]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|s| !s.is_empty())
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

// Builders for hand-written fixtures
#[cfg(test)]
impl ContentNode {
    /// Create a container node.
    pub fn new(kind: NodeKind, children: Vec<ContentNode>) -> Self {
        Self {
            kind,
            value: None,
            alt: None,
            title: None,
            children,
        }
    }

    pub fn root(children: Vec<ContentNode>) -> Self {
        Self::new(NodeKind::Root, children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(NodeKind::Text, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_roundtrip_known_and_unknown() {
        assert_eq!(NodeKind::from("listItem"), NodeKind::ListItem);
        assert_eq!(NodeKind::from("inlineCode").as_str(), "inlineCode");

        let jsx = NodeKind::from("mdxJsxFlowElement");
        assert_eq!(jsx, NodeKind::Other("mdxJsxFlowElement".into()));
        assert_eq!(String::from(jsx), "mdxJsxFlowElement");
    }

    #[test]
    fn test_deserialize_mdast() {
        let tree: ContentNode = serde_json::from_value(json!({
            "type": "root",
            "children": [{
                "type": "paragraph",
                "position": {"start": {"line": 1}},
                "children": [
                    {"type": "text", "value": "See "},
                    {"type": "link", "url": "/docs", "title": null,
                     "children": [{"type": "text", "value": "docs"}]}
                ]
            }]
        }))
        .unwrap();

        assert!(tree.kind.is_root());
        let paragraph = &tree.children[0];
        assert_eq!(paragraph.kind, NodeKind::Paragraph);
        assert_eq!(paragraph.children[0].value.as_deref(), Some("See "));
        assert_eq!(paragraph.children[1].kind, NodeKind::Link);
        assert!(paragraph.children[1].title.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let node = ContentNode::root(vec![ContentNode::text("hi")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            json!({"type": "root", "children": [{"type": "text", "value": "hi"}]})
        );
    }

    #[test]
    fn test_inline_payload_priority() {
        let mut node = ContentNode::new(NodeKind::Image, vec![]);
        node.alt = Some("diagram".into());
        node.title = Some("Figure 1".into());
        assert_eq!(node.inline_payload(), Some("diagram"));

        node.value = Some(String::new());
        assert_eq!(node.inline_payload(), Some("diagram"));

        node.alt = None;
        assert_eq!(node.inline_payload(), Some("Figure 1"));

        node.title = None;
        assert_eq!(node.inline_payload(), None);
    }
}
