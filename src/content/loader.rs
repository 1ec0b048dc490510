//! Content loader - loads article metadata from the source directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::helpers::url_for;
use crate::Site;

/// Loads articles from `<source_dir>/<posts_dir>`
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all articles, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.site.posts_dir();
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_article_file(path) {
                continue;
            }
            match self.load_post(path) {
                Ok(post) if post.draft && !self.site.config.render_drafts => {
                    tracing::debug!("Skipping draft {:?}", path);
                }
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), posts_dir);
        Ok(posts)
    }

    /// Find a single article by slug
    pub fn find_post(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.load_posts()?.into_iter().find(|p| p.slug == slug))
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);
        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let title = fm.title.unwrap_or_else(|| stem.clone());
        let slug = fm
            .slug
            .map(|s| slug::slugify(&s))
            .unwrap_or_else(|| slug::slugify(&stem));

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let permalink = match fm.permalink {
            Some(explicit) => url_for(&self.site.config, &explicit),
            None => self.generate_permalink(&date, &slug),
        };

        let mut post = Post::new(title, date, source);
        post.meta.permalink = permalink;
        post.slug = slug;
        post.description = fm.description;
        post.tags = fm.tags;
        post.draft = fm.draft;
        post.full_source = path.to_path_buf();
        post.extra = fm.extra;

        Ok(post)
    }

    /// Generate permalink based on config pattern
    fn generate_permalink(&self, date: &DateTime<Local>, slug: &str) -> String {
        let path = self
            .site
            .config
            .permalink
            .replace(":year", &date.format("%Y").to_string())
            .replace(":month", &date.format("%m").to_string())
            .replace(":day", &date.format("%d").to_string())
            .replace(":title", slug)
            .replace(":slug", slug);

        url_for(&self.site.config, &path)
    }
}

/// Check if a file is an article source file
fn is_article_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_site(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("source").join("articles");
        fs::create_dir_all(&posts).unwrap();
        for (name, content) in files {
            fs::write(posts.join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = write_site(&[
            (
                "branded-types.mdx",
                "---\ntitle: Branded Types\ndate: 2023-05-01\n---\nBody",
            ),
            (
                "satisfies.md",
                "---\ntitle: \"The `satisfies` Operator\"\nslug: satisfies\ndate: 2024-02-10\n---\n",
            ),
            ("notes.txt", "not an article"),
        ]);
        let site = Site::new(dir.path()).unwrap();

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title(), "The `satisfies` Operator");
        assert_eq!(posts[0].permalink(), "/articles/satisfies/");
        assert_eq!(posts[1].title(), "Branded Types");
        assert_eq!(posts[1].permalink(), "/articles/branded-types/");
        assert_eq!(posts[1].source, "articles/branded-types.mdx");
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let dir = write_site(&[("untitled-note.md", "Just a body")]);
        let site = Site::new(dir.path()).unwrap();

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts[0].title(), "untitled-note");
        assert_eq!(posts[0].slug, "untitled-note");
    }

    #[test]
    fn test_drafts_skipped_unless_enabled() {
        let dir = write_site(&[("wip.md", "---\ntitle: WIP\ndraft: true\n---\n")]);
        let site = Site::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());

        fs::write(dir.path().join("_config.yml"), "render_drafts: true\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(ContentLoader::new(&site).load_posts().unwrap().len(), 1);
    }

    #[test]
    fn test_broken_front_matter_is_skipped() {
        let dir = write_site(&[
            ("ok.md", "---\ntitle: Fine\n---\n"),
            ("bad.md", ";;;\n{\"title\": \"never closed\"}"),
        ]);
        let site = Site::new(dir.path()).unwrap();

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "Fine");
    }

    #[test]
    fn test_permalink_pattern_and_root() {
        let dir = write_site(&[("a.md", "---\ntitle: A\ndate: 2024-03-07\n---\n")]);
        fs::write(
            dir.path().join("_config.yml"),
            "root: /book/\npermalink: \":year/:month/:title/\"\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();

        let post = ContentLoader::new(&site).find_post("a").unwrap().unwrap();
        assert_eq!(post.permalink(), "/book/2024/03/a/");
    }

    #[test]
    fn test_explicit_permalink() {
        let dir = write_site(&[(
            "x.md",
            "---\ntitle: X\npermalink: /articles/custom/\n---\n",
        )]);
        let site = Site::new(dir.path()).unwrap();

        let post = ContentLoader::new(&site).find_post("x").unwrap().unwrap();
        assert_eq!(post.permalink(), "/articles/custom/");
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());
    }
}
