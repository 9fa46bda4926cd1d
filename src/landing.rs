//! Landing page view model.
//!
//! Puts the pieces together for one page of a subject's release notes:
//! the date timeline with a title and excerpt per post, and the controls
//! for moving between pages. Rendering it is someone else's job; the model
//! serializes to JSON.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use rayon::prelude::*;
use serde::Serialize;

use crate::excerpt::excerpt;
use crate::pagination::{PageNav, PaginationState, paginate};
use crate::post::Post;
use crate::timeline::{DateGroup, group_by_date};
use crate::utils::date::DateTimeUtc;

/// Inputs that shape a landing page besides the posts themselves.
#[derive(Debug, Clone)]
pub struct LandingOptions<'a> {
    pub subject: &'a str,
    /// Matching posts across all pages, not just this one.
    pub total_count: usize,
    pub current_page: i64,
    pub page_size: NonZeroUsize,
    pub excerpt_length: usize,
    pub now: DateTimeUtc,
}

/// One post as listed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingEntry<'a> {
    pub slug: &'a str,
    pub title: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    pub excerpt: String,
}

/// A labelled stretch of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingGroup<'a> {
    pub label: String,
    pub entries: Vec<LandingEntry<'a>>,
}

/// Everything a template needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage<'a> {
    pub title: String,
    pub subject: &'a str,
    pub groups: Vec<LandingGroup<'a>>,
    pub pagination: PaginationState,
    pub nav: PageNav,
}

impl<'a> LandingPage<'a> {
    /// Assemble the page for `posts`, which must already be this page's
    /// slice, newest first.
    pub fn build(posts: &'a [Post], options: &LandingOptions<'a>) -> Self {
        let groups = group_by_date(posts, options.now)
            .into_iter()
            .map(|group| LandingGroup::build(group, options))
            .collect();

        let pagination = paginate(options.total_count, options.page_size, options.current_page);

        Self {
            title: format!("{} release notes", options.subject),
            subject: options.subject,
            groups,
            nav: PageNav::for_state(&pagination),
            pagination,
        }
    }

    /// Number of posts listed on this page.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

impl<'a> LandingGroup<'a> {
    fn build(group: DateGroup<'a>, options: &LandingOptions<'a>) -> Self {
        let entries = group
            .posts
            .par_iter()
            .map(|&post| LandingEntry {
                slug: &post.slug,
                title: post.display_title(options.subject),
                version: post.version.as_deref(),
                excerpt: excerpt(&post.document_tree, options.excerpt_length),
            })
            .collect();

        Self {
            label: group.key,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excerpt::EXCERPT_LENGTH;
    use crate::pagination::PAGE_SIZE;
    use crate::post::test_support::post;
    use serde_json::json;

    fn options(total_count: usize, current_page: i64) -> LandingOptions<'static> {
        LandingOptions {
            subject: "Java agent",
            total_count,
            current_page,
            page_size: PAGE_SIZE,
            excerpt_length: EXCERPT_LENGTH,
            now: DateTimeUtc::from_ymd(2024, 7, 1),
        }
    }

    #[test]
    fn test_build_page() {
        let mut titled = post("java-8-1-0", Some("8.1.0"), "March 5, 2024");
        titled.title = Some("Java agent 8.1.0 (hotfix)".into());
        let posts = vec![
            post("java-8-0-0", Some("8.0.0"), "March 5, 2024"),
            titled,
            post("java-7-0-0", Some("7.0.0"), "June 1, 2021"),
        ];

        let page = LandingPage::build(&posts, &options(23, 2));

        assert_eq!(page.title, "Java agent release notes");
        assert_eq!(page.entry_count(), 3);
        assert_eq!(page.groups.len(), 2);

        let march = &page.groups[0];
        assert_eq!(march.label, "March 5");
        assert_eq!(march.entries[0].slug, "java-8-1-0");
        assert_eq!(march.entries[0].title, "Java agent 8.1.0 (hotfix)");
        assert_eq!(march.entries[1].title, "Java agent v8.0.0");
        assert_eq!(march.entries[1].excerpt, "Notes for java-8-0-0.");

        assert_eq!(page.groups[1].label, "June 1, 2021");

        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_prev_page && page.pagination.has_next_page);
        assert_eq!(page.nav.label.as_deref(), Some("Page 2 of 3"));
        assert!(page.nav.show_first && page.nav.show_last);
    }

    #[test]
    fn test_excerpt_length_applied() {
        let posts = vec![post("p", Some("1"), "March 5, 2024")];
        let mut opts = options(1, 1);
        opts.excerpt_length = 5;

        let page = LandingPage::build(&posts, &opts);

        assert_eq!(page.groups[0].entries[0].excerpt, "Notes…");
    }

    #[test]
    fn test_empty_page() {
        let page = LandingPage::build(&[], &options(0, 1));
        assert!(page.groups.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(page.nav.label, None);
    }

    #[test]
    fn test_json_shape() {
        let posts = vec![post("p", None, "March, 2024")];

        let json = serde_json::to_value(LandingPage::build(&posts, &options(1, 1))).unwrap();

        assert_eq!(json["title"], "Java agent release notes");
        assert_eq!(json["groups"][0]["label"], "March");
        assert_eq!(
            json["groups"][0]["entries"][0],
            json!({"slug": "p", "title": "Java agent", "excerpt": "Notes for p."})
        );
        assert_eq!(json["pagination"]["hasNextPage"], false);
        assert_eq!(json["nav"]["showFirst"], false);
    }
}
