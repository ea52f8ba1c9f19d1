//! Read-only queries over the post list
//!
//! Every function here is a pure projection: nothing mutates the backing
//! list, nothing fails. Out-of-range input (unknown category, zero limit)
//! degrades to an empty result instead of an error.

use indexmap::IndexMap;

use super::{Category, Post};

/// Default number of posts shown by recency queries
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Sentinel category name that selects every post
pub const ALL_CATEGORIES: &str = "all";

/// Posts flagged for homepage highlight, in content-file order
pub fn featured_posts(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.featured).collect()
}

/// Up to `limit` posts, newest first
///
/// Sorts a fresh list of references so the caller's list keeps its order.
/// The sort is stable: posts sharing a date stay in content-file order.
pub fn recent_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Posts in the given category, in content-file order
///
/// The name `"all"` selects every post; a name outside the known set
/// selects none.
pub fn posts_by_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    if category == ALL_CATEGORIES {
        return posts.iter().collect();
    }
    match Category::parse(category) {
        Some(wanted) => posts.iter().filter(|p| p.category == wanted).collect(),
        None => Vec::new(),
    }
}

/// Post counts per category, keyed in first-seen order
///
/// Only categories that actually have posts appear; there are no zero
/// entries.
pub fn category_counts(posts: &[Post]) -> IndexMap<Category, usize> {
    let mut counts: IndexMap<Category, usize> = IndexMap::new();
    for post in posts {
        *counts.entry(post.category).or_insert(0) += 1;
    }
    counts
}

/// Case-insensitive substring search against title or excerpt
///
/// The match is literal, so the empty query matches every post. Trimming
/// whitespace first is the caller's job.
pub fn search_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query) || p.excerpt.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn post(slug: &str, title: &str, excerpt: &str, category: Category, d: &str) -> Post {
        Post {
            id: slug.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            category,
            date: date(d),
            excerpt: excerpt.to_string(),
            featured: false,
        }
    }

    fn sample_posts() -> Vec<Post> {
        let mut a = post("a", "Intro to Go", "basics", Category::Tutorial, "2024-01-01");
        a.featured = true;
        let b = post("b", "Rust Notes", "ownership", Category::Tech, "2024-03-01");
        vec![a, b]
    }

    #[test]
    fn test_featured_posts() {
        let posts = sample_posts();
        let featured = featured_posts(&posts);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "a");
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_recent_posts_newest_first() {
        let posts = sample_posts();
        let recent = recent_posts(&posts, 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].slug, "b");
    }

    #[test]
    fn test_recent_posts_does_not_reorder_source() {
        let posts = sample_posts();
        let before = posts.clone();

        let first = recent_posts(&posts, 10);
        let second = recent_posts(&posts, 10);

        // Same result both times, and the source list is untouched
        assert_eq!(
            first.iter().map(|p| &p.slug).collect::<Vec<_>>(),
            second.iter().map(|p| &p.slug).collect::<Vec<_>>()
        );
        assert_eq!(posts, before);
    }

    #[test]
    fn test_recent_posts_stable_for_equal_dates() {
        let posts = vec![
            post("x", "First", "", Category::Tech, "2024-02-01"),
            post("y", "Second", "", Category::Tech, "2024-02-01"),
            post("z", "Third", "", Category::Tech, "2024-05-01"),
        ];
        let recent = recent_posts(&posts, 3);
        let slugs: Vec<_> = recent.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_recent_posts_zero_limit() {
        let posts = sample_posts();
        assert!(recent_posts(&posts, 0).is_empty());
    }

    #[test]
    fn test_posts_by_category_all_is_identity() {
        let posts = sample_posts();
        let all = posts_by_category(&posts, "all");
        let slugs: Vec<_> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_posts_by_category_filters() {
        let posts = sample_posts();
        let tech = posts_by_category(&posts, "tech");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].slug, "b");
    }

    #[test]
    fn test_posts_by_category_unknown_is_empty() {
        let posts = sample_posts();
        assert!(posts_by_category(&posts, "cooking").is_empty());
        // Known category with no posts is also empty, not an error
        assert!(posts_by_category(&posts, "design").is_empty());
    }

    #[test]
    fn test_category_counts() {
        let posts = sample_posts();
        let counts = category_counts(&posts);
        assert_eq!(counts.get(&Category::Tutorial), Some(&1));
        assert_eq!(counts.get(&Category::Tech), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_category_counts_sum_to_post_count() {
        let mut posts = sample_posts();
        posts.push(post("c", "More Rust", "traits", Category::Tech, "2024-04-01"));
        let counts = category_counts(&posts);
        assert_eq!(counts.values().sum::<usize>(), posts.len());
        // No zero entries for absent categories
        assert!(!counts.contains_key(&Category::Design));
    }

    #[test]
    fn test_category_counts_first_seen_order() {
        let posts = sample_posts();
        let keys: Vec<_> = category_counts(&posts).keys().copied().collect();
        assert_eq!(keys, vec![Category::Tutorial, Category::Tech]);
    }

    #[test]
    fn test_search_posts_case_insensitive() {
        let posts = sample_posts();
        let hits = search_posts(&posts, "rust");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "b");
    }

    #[test]
    fn test_search_posts_matches_excerpt() {
        let posts = sample_posts();
        let hits = search_posts(&posts, "BASICS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "a");
    }

    #[test]
    fn test_search_posts_empty_query_matches_all() {
        let posts = sample_posts();
        assert_eq!(search_posts(&posts, "").len(), posts.len());
    }

    #[test]
    fn test_search_posts_no_match() {
        let posts = sample_posts();
        assert!(search_posts(&posts, "haskell").is_empty());
    }
}
