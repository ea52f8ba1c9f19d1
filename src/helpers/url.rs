//! URL helper functions

use crate::config::SiteConfig;
use crate::content::{Category, Post};

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/posts/hello.html") // -> "/blog/posts/hello.html"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog.html") // -> "https://example.com/blog.html"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of a post's page
pub fn post_url(config: &SiteConfig, post: &Post) -> String {
    url_for(config, &format!("posts/{}.html", post.slug))
}

/// URL of a category's anchor on the categories page
pub fn category_url(config: &SiteConfig, category: Category) -> String {
    url_for(config, &format!("categories.html#{}", category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/blog/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/index.html"), "/blog/index.html");
        assert_eq!(url_for(&config, "blog.html"), "/blog/blog.html");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog.html"),
            "https://example.com/blog/blog.html"
        );
    }

    #[test]
    fn test_post_url() {
        let config = test_config();
        let post = Post::new(
            "Hello World",
            Category::Tech,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        );
        assert_eq!(post_url(&config, &post), "/blog/posts/hello-world.html");
    }

    #[test]
    fn test_category_url() {
        let config = test_config();
        assert_eq!(
            category_url(&config, Category::Design),
            "/blog/categories.html#design"
        );
    }
}
