//! Post and knowledgebase models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A post category
///
/// The set is closed: the display-name lookup and the category pages only
/// know about these four values, so an unknown name in `content.yml` is a
/// parse error rather than a silently empty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Tutorial,
    Personal,
    Design,
}

impl Category {
    /// All known categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Tutorial,
        Category::Personal,
        Category::Design,
    ];

    /// The identifier used in content files and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Tutorial => "tutorial",
            Category::Personal => "personal",
            Category::Design => "design",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Tutorial => "Tutorial",
            Category::Personal => "Personal",
            Category::Design => "Design",
        }
    }

    /// Parse a category identifier; unknown names yield `None`
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.iter().find(|c| c.as_str() == s).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post's metadata record (not its body text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// URL slug, unique across all posts
    pub slug: String,

    /// Post category
    pub category: Category,

    /// Publication date (calendar date, no time component)
    pub date: NaiveDate,

    /// Short summary shown on cards and in search results
    pub excerpt: String,

    /// Whether the post is highlighted on the homepage
    #[serde(default)]
    pub featured: bool,
}

impl Post {
    /// Create a new post with id and slug derived from the title
    pub fn new(title: &str, category: Category, date: NaiveDate) -> Self {
        let slug = slug::slugify(title);
        Self {
            id: slug.clone(),
            title: title.to_string(),
            slug,
            category,
            date,
            excerpt: String::new(),
            featured: false,
        }
    }
}

/// A reference article inside a knowledgebase section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,

    /// URL slug of the post the article links to
    pub slug: String,
}

/// A named grouping of knowledgebase articles
///
/// Sections are static configuration like posts, but carry no query
/// operations: they are listed in file order as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier
    pub id: String,

    /// Section title
    pub title: String,

    /// Articles in display order
    #[serde(default)]
    pub articles: Vec<Article>,
}
