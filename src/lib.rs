//! lore: a content database for a personal blog and knowledgebase
//!
//! This crate keeps a site's post and knowledgebase metadata in a single
//! YAML file and provides pure, read-only queries over it (featured posts,
//! recency, category filtering and counts, text search), plus a small CLI
//! for authoring and inspecting the database.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main Lore application
#[derive(Clone)]
pub struct Lore {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content database file path
    pub content_path: std::path::PathBuf,
}

impl Lore {
    /// Create a new Lore instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_path = base_dir.join(&config.content_file);

        Ok(Self {
            config,
            base_dir,
            content_path,
        })
    }

    /// Load the content database
    ///
    /// A missing content file is an empty database, matching a freshly
    /// created site directory.
    pub fn database(&self) -> Result<content::ContentDb> {
        if !self.content_path.exists() {
            tracing::warn!(
                "Content file {:?} not found, using an empty database",
                self.content_path
            );
            return Ok(content::ContentDb::default());
        }
        Ok(content::ContentDb::load(&self.content_path)?)
    }
}
