//! List site content

use anyhow::Result;

use crate::content::{query, Post};
use crate::helpers;
use crate::Lore;

/// List site content by type
pub fn run(
    lore: &Lore,
    content_type: &str,
    category: Option<&str>,
    featured: bool,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let db = lore.database()?;

    match content_type {
        "post" | "posts" => {
            let category = category.unwrap_or(query::ALL_CATEGORIES);
            let mut posts = db.posts_by_category(category);
            if featured {
                posts.retain(|p| p.featured);
            }

            // Newest first for display; the database keeps authoring order
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            if let Some(limit) = limit {
                posts.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }

            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {}", format_post_line(lore, post));
            }
        }

        "category" | "categories" => {
            let counts = db.category_counts();

            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
                return Ok(());
            }

            println!("Categories ({}):", counts.len());
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            for (category, count) in counts {
                println!("  {} ({})", category.display_name(), count);
            }
        }

        "kb" | "section" | "sections" => {
            let sections = db.sections();

            if json {
                println!("{}", serde_json::to_string_pretty(sections)?);
                return Ok(());
            }

            println!("Sections ({}):", sections.len());
            for section in sections {
                println!("  {} [{}]", section.title, section.id);
                for article in &section.articles {
                    println!("    {} -> posts/{}.html", article.title, article.slug);
                }
            }
        }

        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, kb",
                content_type
            );
        }
    }

    Ok(())
}

/// One line of post listing output
pub fn format_post_line(lore: &Lore, post: &Post) -> String {
    let marker = if post.featured { " *" } else { "" };
    format!(
        "{} - {} [{}]{}",
        helpers::format_date(&post.date, &lore.config.date_format),
        post.title,
        post.category.display_name(),
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_format_post_line() {
        let dir = tempfile::tempdir().unwrap();
        let lore = Lore::new(dir.path()).unwrap();

        let mut post = Post::new(
            "Rust Notes",
            Category::Tech,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        );
        post.featured = true;

        assert_eq!(
            format_post_line(&lore, &post),
            "Mar 1, 2026 - Rust Notes [Tech] *"
        );
    }
}
