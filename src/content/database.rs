//! Content database - the single source of truth for posts and sections
//!
//! The whole site's content metadata lives in one YAML file. It is loaded
//! once at startup and treated as immutable from then on; only the
//! authoring commands write it back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::{query, Category, Post, Section};

/// Content database file name
pub const CONTENT_FILE: &str = "content.yml";

/// Errors from loading or validating the content file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("duplicate post id: {0}")]
    DuplicateId(String),

    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
}

/// The full content database: posts plus knowledgebase sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDb {
    /// Blog posts, in authoring order
    #[serde(default)]
    pub posts: Vec<Post>,

    /// Knowledgebase sections, in display order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ContentDb {
    /// Load and validate the content database from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path.as_ref())?;
        let db: ContentDb = serde_yaml::from_str(&content)?;
        db.validate()?;
        db.check_article_links();
        Ok(db)
    }

    /// Write the content database back to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ContentError> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Enforce uniqueness of post slugs and ids
    fn validate(&self) -> Result<(), ContentError> {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for post in &self.posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
            if !ids.insert(post.id.as_str()) {
                return Err(ContentError::DuplicateId(post.id.clone()));
            }
        }
        Ok(())
    }

    /// Warn about knowledgebase articles pointing at unknown posts
    fn check_article_links(&self) {
        let slugs: HashSet<&str> = self.posts.iter().map(|p| p.slug.as_str()).collect();
        for section in &self.sections {
            for article in &section.articles {
                if !slugs.contains(article.slug.as_str()) {
                    tracing::warn!(
                        "Article {:?} in section {:?} links to unknown post slug {:?}",
                        article.title,
                        section.id,
                        article.slug
                    );
                }
            }
        }
    }

    /// All posts, in authoring order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All knowledgebase sections, in display order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Posts flagged for homepage highlight
    pub fn featured_posts(&self) -> Vec<&Post> {
        query::featured_posts(&self.posts)
    }

    /// Up to `limit` posts, newest first
    pub fn recent_posts(&self, limit: usize) -> Vec<&Post> {
        query::recent_posts(&self.posts, limit)
    }

    /// Posts in the given category (`"all"` selects everything)
    pub fn posts_by_category(&self, category: &str) -> Vec<&Post> {
        query::posts_by_category(&self.posts, category)
    }

    /// Post counts per category
    pub fn category_counts(&self) -> IndexMap<Category, usize> {
        query::category_counts(&self.posts)
    }

    /// Case-insensitive title/excerpt search
    pub fn search_posts(&self, q: &str) -> Vec<&Post> {
        query::search_posts(&self.posts, q)
    }
}
