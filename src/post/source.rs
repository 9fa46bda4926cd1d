//! File-backed post source.
//!
//! Stands in for the data layer that feeds the landing page: it answers
//! "the posts of one subject, newest first, one page at a time" from a
//! JSON export.
//!
//! ```json
//! {
//!   "subject": "Java agent",
//!   "posts": [
//!     {
//!       "slug": "java-agent-8-0-0",
//!       "subject": "Java agent",
//!       "version": "8.0.0",
//!       "releaseDate": "2024-03-05",
//!       "documentTree": { "type": "root", "children": [] }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::Post;
use crate::ast::{ContentNode, NodeKind};
use crate::pagination::PageWindow;
use crate::utils::date::DateTimeUtc;
use crate::{debug, log};

/// Errors raised while loading a post export.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("post export is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("document tree of `{slug}` must start at a `root` node, found `{kind}`")]
    NotRooted { slug: String, kind: NodeKind },
}

/// One post as exported, before filtering and date formatting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceRecord {
    slug: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    version: Option<String>,
    /// Raw `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(default)]
    release_date: Option<String>,
    document_tree: ContentNode,
}

#[derive(Debug, Deserialize)]
struct SourceFile {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    posts: Vec<SourceRecord>,
}

/// The posts of one subject selected for one page.
#[derive(Debug, Clone)]
pub struct PostPage {
    /// Number of matching posts across all pages.
    pub total_count: usize,
    /// Posts on the requested page, newest first.
    pub posts: Vec<Post>,
}

/// In-memory post export.
#[derive(Debug)]
pub struct PostSource {
    subject: Option<String>,
    records: Vec<SourceRecord>,
}

impl PostSource {
    /// Load an export from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let content =
            fs::read_to_string(path).map_err(|err| SourceError::Io(path.to_path_buf(), err))?;
        let source = Self::from_json_str(&content)?;
        debug!("source"; "read {} records from {}", source.records.len(), path.display());
        Ok(source)
    }

    /// Parse an export, rejecting document trees that are not rooted.
    pub fn from_json_str(content: &str) -> Result<Self, SourceError> {
        let file: SourceFile = serde_json::from_str(content)?;

        if let Some(record) = file.posts.iter().find(|r| !r.document_tree.kind.is_root()) {
            return Err(SourceError::NotRooted {
                slug: record.slug.clone(),
                kind: record.document_tree.kind.clone(),
            });
        }

        Ok(Self {
            subject: file.subject,
            records: file.posts,
        })
    }

    /// Subject named at the top of the export, if any.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Posts of `subject` with a release date, newest first, windowed.
    ///
    /// Records without their own `subject` belong to every subject. Records
    /// whose release date cannot be parsed are skipped with a warning and
    /// do not count towards `total_count`.
    pub fn query(&self, subject: &str, window: PageWindow) -> PostPage {
        let mut dated: Vec<(DateTimeUtc, &SourceRecord)> = self
            .records
            .iter()
            .filter(|record| record.subject.as_deref().is_none_or(|s| s == subject))
            .filter_map(|record| {
                let raw = record.release_date.as_deref()?;
                match DateTimeUtc::parse(raw) {
                    Some(date) => Some((date, record)),
                    None => {
                        log!("warning"; "skipping `{}`: invalid release date `{}`", record.slug, raw);
                        None
                    }
                }
            })
            .collect();

        // Stable: equal dates keep export order
        dated.sort_by(|(a, _), (b, _)| b.cmp(a));

        let posts = window
            .apply(&dated)
            .iter()
            .map(|(date, record)| Post {
                slug: record.slug.clone(),
                title: record.title.clone(),
                version: record.version.clone(),
                release_date: date.to_long_date(),
                document_tree: record.document_tree.clone(),
            })
            .collect();

        PostPage {
            total_count: dated.len(),
            posts,
        }
    }
}
