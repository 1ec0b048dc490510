//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,

    // URL
    pub url: String,
    pub root: String,
    pub permalink: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,

    // Writing
    pub render_drafts: bool,

    // Homepage
    #[serde(default)]
    pub hero: HeroConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Companion Articles".to_string(),
            tagline: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            permalink: "articles/:title/".to_string(),

            source_dir: "source".to_string(),
            posts_dir: "articles".to_string(),

            render_drafts: false,

            hero: HeroConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Hero block with blank fields filled from the site title and tagline
    pub fn resolved_hero(&self) -> HeroConfig {
        let mut hero = self.hero.clone();
        if hero.title.trim().is_empty() {
            hero.title = self.title.clone();
        }
        if hero.tagline.trim().is_empty() {
            hero.tagline = self.tagline.clone();
        }
        hero
    }
}

/// Homepage hero configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub tagline: String,
    pub cta_text: String,
    pub cta_link: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            cta_text: "Read the articles".to_string(),
            cta_link: "/articles/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.root, "/");
        assert_eq!(config.permalink, "articles/:title/");
        assert_eq!(config.posts_dir, "articles");
        assert!(!config.render_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Typed Companion
tagline: Notes on the type system
root: /blog/
hero:
  cta_text: Start reading
custom_key: 42
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Typed Companion");
        assert_eq!(config.root, "/blog/");
        assert_eq!(config.hero.cta_text, "Start reading");
        assert_eq!(config.hero.cta_link, "/articles/");
        assert!(config.extra.contains_key("custom_key"));
    }

    #[test]
    fn test_resolved_hero_falls_back_to_site() {
        let mut config = SiteConfig::default();
        config.title = "Typed Companion".to_string();
        config.tagline = "Notes".to_string();
        config.hero.tagline = "Own tagline".to_string();

        let hero = config.resolved_hero();
        assert_eq!(hero.title, "Typed Companion");
        assert_eq!(hero.tagline, "Own tagline");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From Disk\nrender_drafts: true\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From Disk");
        assert!(config.render_drafts);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: [unclosed\n").unwrap();

        assert!(SiteConfig::load(&path).is_err());
    }
}
