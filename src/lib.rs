//! companion-site: article title and homepage rendering for a book companion blog
//!
//! Articles are Markdown/MDX files with front-matter. This crate reads their
//! metadata and renders the theme's component overrides: the article title
//! heading (with its page title sync) and the homepage hero.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A companion site rooted at a directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory
    pub source_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Directory holding the articles
    pub fn posts_dir(&self) -> PathBuf {
        self.source_dir.join(&self.config.posts_dir)
    }

    /// Print the article list
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
