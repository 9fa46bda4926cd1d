//! Version ordering by digit value.
//!
//! A version string is reduced to its digits ("v1.2.3" -> 123) and compared
//! as a number. Separators carry no weight, so "v1.2" and "v12" are equal:
//! a known limitation kept for compatibility with existing landing pages.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::post::Post;

static RE_NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Digits of a version, compared as an unbounded non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionKey(String);

impl VersionKey {
    /// Extract the key, or `None` when the version has no digits at all.
    pub fn parse(version: &str) -> Option<Self> {
        let digits = RE_NON_DIGIT.replace_all(version, "");
        if digits.is_empty() {
            return None;
        }
        Some(Self(digits.trim_start_matches('0').to_string()))
    }

    /// Key of a post, `None` when it cannot take part in ordering.
    pub fn of(post: &Post) -> Option<Self> {
        post.version.as_deref().and_then(Self::parse)
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version keys for a newest-first listing.
///
/// A missing key compares equal to anything.
pub fn compare_desc(a: Option<&VersionKey>, b: Option<&VersionKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        _ => Ordering::Equal,
    }
}

/// Stable sort, highest version first.
///
/// Posts without a usable version stay where they are and the sort never
/// moves another post across them; each run between two such posts is
/// sorted on its own.
pub fn sort_desc(posts: &mut Vec<&Post>) {
    let mut keyed: Vec<_> = posts.iter().map(|post| (VersionKey::of(post), *post)).collect();

    for run in keyed.split_mut(|(key, _)| key.is_none()) {
        run.sort_by(|(a, _), (b, _)| compare_desc(a.as_ref(), b.as_ref()));
    }

    posts.clear();
    posts.extend(keyed.into_iter().map(|(_, post)| post));
}
