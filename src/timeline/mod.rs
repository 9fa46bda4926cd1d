//! Date-grouped, version-ordered post timeline.
//!
//! Posts arrive newest first. They are bucketed by a display date key in a
//! single pass, buckets keep the order their keys were first seen in, and
//! each bucket is then ordered by version, highest first.

pub mod version;

use rustc_hash::FxHashMap;

use crate::post::Post;
use crate::utils::date::DateTimeUtc;

/// Separator between the month part and the year of a release date.
const YEAR_SEPARATOR: &str = ", ";

/// Posts sharing one display date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    pub key: String,
    pub posts: Vec<&'a Post>,
}

/// Display key for a formatted release date.
///
/// Dates in `current_year` drop the year (`"March 5, 2024"` -> `"March 5"`,
/// `"March, 2024"` -> `"March"`); older dates are used whole.
pub fn date_key<'d>(release_date: &'d str, current_year: &str) -> &'d str {
    let mut parts = release_date.split(YEAR_SEPARATOR);
    let head = parts.next().unwrap_or(release_date);
    match parts.next() {
        Some(year) if year == current_year => head,
        _ => release_date,
    }
}

/// Group posts by date key, then order each group by version.
///
/// `now` decides which dates count as "this year". The input is not
/// modified; groups borrow from it.
pub fn group_by_date(posts: &[Post], now: DateTimeUtc) -> Vec<DateGroup<'_>> {
    let current_year = now.year.to_string();
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<DateGroup<'_>> = Vec::new();

    for post in posts {
        let key = date_key(&post.release_date, &current_year);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(DateGroup {
                key: key.to_string(),
                posts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].posts.push(post);
    }

    for group in &mut groups {
        version::sort_desc(&mut group.posts);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_support::post;

    const NOW: DateTimeUtc = DateTimeUtc::from_ymd(2024, 7, 1);

    fn layout(groups: &[DateGroup<'_>]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|g| {
                let slugs = g.posts.iter().map(|p| p.slug.clone()).collect();
                (g.key.clone(), slugs)
            })
            .collect()
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key("March, 2024", "2024"), "March");
        assert_eq!(date_key("March 5, 2024", "2024"), "March 5");
        assert_eq!(date_key("June 1, 2021", "2024"), "June 1, 2021");
        assert_eq!(date_key("Someday", "2024"), "Someday");
        assert_eq!(date_key("", "2024"), "");
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let posts = vec![
            post("a", Some("3.0"), "March, 2024"),
            post("b", Some("2.0"), "June 1, 2021"),
            post("c", Some("1.0"), "March, 2024"),
            post("d", Some("0.9"), "Another, 2020"),
        ];

        let groups = group_by_date(&posts, NOW);

        assert_eq!(
            layout(&groups),
            vec![
                ("March".to_string(), vec!["a".to_string(), "c".to_string()]),
                ("June 1, 2021".to_string(), vec!["b".to_string()]),
                ("Another, 2020".to_string(), vec!["d".to_string()]),
            ]
        );
    }

    #[test]
    fn test_group_sorted_by_version() {
        let posts = vec![
            post("v3", Some("v3"), "March 5, 2024"),
            post("v21", Some("v21"), "March 5, 2024"),
            post("v10", Some("v10"), "March 5, 2024"),
        ];

        let groups = group_by_date(&posts, NOW);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "March 5");
        let order: Vec<_> = groups[0].posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(order, vec!["v21", "v10", "v3"]);
    }

    #[test]
    fn test_input_untouched() {
        let posts = vec![
            post("low", Some("1"), "March, 2024"),
            post("high", Some("9"), "March, 2024"),
        ];
        let before = posts.clone();

        let _ = group_by_date(&posts, NOW);

        assert_eq!(posts, before);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let posts = vec![
            post("a", Some("v1.2"), "March, 2024"),
            post("b", Some("v12"), "March, 2024"),
            post("c", None, "March, 2024"),
            post("d", Some("v3"), "June 1, 2021"),
            post("e", Some("v21"), "June 1, 2021"),
        ];

        let first = group_by_date(&posts, NOW);
        let flattened: Vec<Post> = first
            .iter()
            .flat_map(|g| g.posts.iter().map(|p| (*p).clone()))
            .collect();
        let second = group_by_date(&flattened, NOW);

        assert_eq!(layout(&first), layout(&second));
    }

    #[test]
    fn test_year_follows_now() {
        let posts = vec![post("a", Some("1"), "March, 2024")];

        let this_year = group_by_date(&posts, NOW);
        let next_year = group_by_date(&posts, DateTimeUtc::from_ymd(2025, 1, 1));

        assert_eq!(this_year[0].key, "March");
        assert_eq!(next_year[0].key, "March, 2024");
    }

    #[test]
    fn test_empty() {
        assert!(group_by_date(&[], NOW).is_empty());
    }
}
