//! Release-note posts and where they come from.

pub mod source;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::ast::ContentNode;

pub use source::PostSource;

/// A release note entry, ready for display.
///
/// `release_date` is already formatted (`June 1, 2021`); posts arrive
/// sorted newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub release_date: String,
    pub document_tree: ContentNode,
}

impl Post {
    /// Title to display, falling back to `<subject> v<version>`.
    ///
    /// An empty title counts as missing. Without a version the subject
    /// alone is used.
    pub fn display_title<'a>(&'a self, subject: &str) -> Cow<'a, str> {
        match (self.title.as_deref(), self.version.as_deref()) {
            (Some(title), _) if !title.is_empty() => Cow::Borrowed(title),
            (_, Some(version)) => Cow::Owned(format!("{subject} v{version}")),
            (_, None) => Cow::Owned(subject.to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::post;

    #[test]
    fn test_display_title_prefers_title() {
        let mut p = post("a", Some("1.2.3"), "March 1, 2024");
        p.title = Some("Big release".into());
        assert_eq!(p.display_title("Java agent"), "Big release");
    }

    #[test]
    fn test_display_title_falls_back_to_version() {
        let mut p = post("a", Some("1.2.3"), "March 1, 2024");
        assert_eq!(p.display_title("Java agent"), "Java agent v1.2.3");

        p.title = Some(String::new());
        assert_eq!(p.display_title("Java agent"), "Java agent v1.2.3");
    }

    #[test]
    fn test_display_title_without_version() {
        let p = post("a", None, "March 1, 2024");
        assert_eq!(p.display_title("Java agent"), "Java agent");
    }

    #[test]
    fn test_post_json_shape() {
        let p = post("java-agent-1-2-3", Some("1.2.3"), "March 1, 2024");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["slug"], "java-agent-1-2-3");
        assert_eq!(json["releaseDate"], "March 1, 2024");
        assert_eq!(json["documentTree"]["type"], "root");
    }
}
