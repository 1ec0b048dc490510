//! Article models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// The part of an article the title renderer reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Title exactly as written in front-matter
    pub title: String,

    /// Routable path of the article page
    pub permalink: String,
}

impl PostMetadata {
    pub fn new(title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            permalink: permalink.into(),
        }
    }
}

/// A companion article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Title and permalink
    #[serde(flatten)]
    pub meta: PostMetadata,

    /// Publication date
    pub date: DateTime<Local>,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// Short summary for listings
    pub description: Option<String>,

    /// Article tags
    pub tags: Vec<String>,

    /// Drafts are skipped unless `render_drafts` is set
    pub draft: bool,

    /// Source file path (relative to the source directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            meta: PostMetadata::new(title, String::new()),
            date,
            slug,
            description: None,
            tags: Vec::new(),
            draft: false,
            full_source: PathBuf::from(&source),
            source,
            extra: HashMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn permalink(&self) -> &str {
        &self.meta.permalink
    }
}
