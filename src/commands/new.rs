//! Add a new post to the content database

use anyhow::Result;
use chrono::Local;

use crate::content::{Category, ContentDb, Post};
use crate::helpers;
use crate::Lore;

/// Append a post entry to the content database
pub fn run(
    lore: &Lore,
    title: &str,
    category: Option<&str>,
    slug: Option<&str>,
    date: Option<&str>,
    excerpt: Option<&str>,
    featured: bool,
) -> Result<()> {
    let category = match category {
        Some(name) => Category::parse(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown category: {}. Available: tech, tutorial, personal, design",
                name
            )
        })?,
        None => lore.config.default_category,
    };

    let date = match date {
        Some(s) => helpers::parse_date(s)
            .ok_or_else(|| anyhow::anyhow!("Invalid date: {} (expected YYYY-MM-DD)", s))?,
        None => Local::now().date_naive(),
    };

    let mut db = if lore.content_path.exists() {
        ContentDb::load(&lore.content_path)?
    } else {
        ContentDb::default()
    };

    let mut post = Post::new(title, category, date);
    if let Some(slug) = slug {
        post.slug = slug.to_string();
    }
    if let Some(excerpt) = excerpt {
        post.excerpt = excerpt.to_string();
    }
    post.featured = featured;

    if db
        .posts
        .iter()
        .any(|p| p.slug == post.slug || p.id == post.id)
    {
        anyhow::bail!("A post with slug {:?} already exists", post.slug);
    }

    db.posts.push(post.clone());
    db.save(&lore.content_path)?;

    println!("Added: {} ({})", post.title, post.slug);

    Ok(())
}
