//! Search posts by title or excerpt

use anyhow::Result;

use crate::commands::list::format_post_line;
use crate::Lore;

/// Run a search over the content database
pub fn run(lore: &Lore, query: &str, json: bool) -> Result<()> {
    let db = lore.database()?;

    // The engine matches literal substrings, so trim user input first
    let query = query.trim();
    let mut hits = db.search_posts(query);
    hits.sort_by(|a, b| b.date.cmp(&a.date));

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No posts found matching {:?}", query);
        return Ok(());
    }

    println!("Posts matching {:?} ({}):", query, hits.len());
    for post in hits {
        println!("  {}", format_post_line(lore, post));
    }

    Ok(())
}
