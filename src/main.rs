//! CLI entry point for lore

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lore")]
#[command(version)]
#[command(about = "A content database and query tool for a personal blog and knowledgebase", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Add a new post to the content database
    New {
        /// Title of the new post
        title: String,

        /// Category (tech, tutorial, personal, design)
        #[arg(long)]
        category: Option<String>,

        /// URL slug (defaults to the slugified title)
        #[arg(long)]
        slug: Option<String>,

        /// Publication date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Short summary shown on cards and in search results
        #[arg(long)]
        excerpt: Option<String>,

        /// Highlight the post on the homepage
        #[arg(long)]
        featured: bool,
    },

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category, kb)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category ("all" for everything)
        #[arg(long)]
        category: Option<String>,

        /// Only featured posts
        #[arg(long)]
        featured: bool,

        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search posts by title or excerpt
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "lore=debug,info"
    } else {
        "lore=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            lore::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New {
            title,
            category,
            slug,
            date,
            excerpt,
            featured,
        } => {
            let lore = lore::Lore::new(&base_dir)?;
            tracing::info!("Adding post: {}", title);
            lore::commands::new::run(
                &lore,
                &title,
                category.as_deref(),
                slug.as_deref(),
                date.as_deref(),
                excerpt.as_deref(),
                featured,
            )?;
        }

        Commands::List {
            r#type,
            category,
            featured,
            limit,
            json,
        } => {
            let lore = lore::Lore::new(&base_dir)?;
            lore::commands::list::run(&lore, &r#type, category.as_deref(), featured, limit, json)?;
        }

        Commands::Search { query, json } => {
            let lore = lore::Lore::new(&base_dir)?;
            lore::commands::search::run(&lore, &query, json)?;
        }

        Commands::Version => {
            println!("lore version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
