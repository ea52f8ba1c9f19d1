//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::CONTENT_FILE;
use crate::Lore;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    let content_path = target_dir.join(CONTENT_FILE);

    if config_path.exists() || content_path.exists() {
        anyhow::bail!("Directory already contains a site: {:?}", target_dir);
    }

    fs::create_dir_all(target_dir)?;

    // Create default _config.yml
    let config_content = r#"# Lore Configuration

# Site
title: Lore
subtitle: ''
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Content
content_file: content.yml
default_category: tech

# Display
date_format: MMM D, YYYY
recent_posts: 6
"#;

    fs::write(&config_path, config_content)?;

    // Create a starter content database
    let content_content = r#"# Content database
# All blog posts and knowledgebase sections are defined here.
# Every page pulls from this single source of truth.

posts: []
# Example:
#   - id: my-awesome-post
#     title: My Awesome Blog Post
#     slug: sample-post
#     category: tech            # tech, tutorial, personal, or design
#     date: 2026-01-15
#     excerpt: A brief description...
#     featured: false           # true to highlight on the homepage

sections: []
# Example:
#   - id: web-development
#     title: Web Development
#     articles:
#       - title: HTML5 Basics
#         slug: html5-basics
"#;

    fs::write(&content_path, content_content)?;

    Ok(())
}

/// Run the init command
pub fn run(lore: &Lore) -> Result<()> {
    init_site(&lore.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDb;

    #[test]
    fn test_init_site_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join(CONTENT_FILE).exists());

        // The starter database is valid and empty
        let db = ContentDb::load(dir.path().join(CONTENT_FILE)).unwrap();
        assert!(db.posts.is_empty());
        assert!(db.sections.is_empty());
    }

    #[test]
    fn test_init_site_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
