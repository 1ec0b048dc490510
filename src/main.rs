//! CLI entry point for companion-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use companion_site::commands::render;
use companion_site::content::PostMetadata;
use companion_site::theme::{DocumentTitle, LogTitle, RenderMode};

#[derive(Parser)]
#[command(name = "companion-site")]
#[command(version)]
#[command(about = "Render article titles and the homepage hero for a companion blog", long_about = None)]
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
    /// Render one title heading
    Title {
        /// Raw title, as written in front-matter
        title: String,

        /// Article permalink (used for listing headings)
        #[arg(short, long, default_value = "")]
        permalink: String,

        /// Render as the article's own page
        #[arg(long)]
        post_page: bool,
    },

    /// List articles
    #[command(alias = "ls")]
    List,

    /// Render the homepage hero and article listing
    Index,

    /// Render the page heading of one article
    Post {
        /// Article slug
        slug: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "companion_site=debug,info"
    } else {
        "companion_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Title {
            title,
            permalink,
            post_page,
        } => {
            let meta = PostMetadata::new(title, permalink);
            let mut doc = DocumentTitle::new();
            println!(
                "{}",
                render::title(&meta, RenderMode::from(post_page), &mut doc)
            );
            println!("page title: {}", doc);
        }

        Commands::List => {
            let site = companion_site::Site::new(&base_dir)?;
            site.list()?;
        }

        Commands::Index => {
            let site = companion_site::Site::new(&base_dir)?;
            println!("{}", render::index(&site, LogTitle)?);
        }

        Commands::Post { slug } => {
            let site = companion_site::Site::new(&base_dir)?;
            println!("{}", render::post(&site, &slug, LogTitle)?);
        }

        Commands::Version => {
            println!("companion-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
