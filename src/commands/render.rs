//! Render title headings and the homepage fragment

use anyhow::{anyhow, Result};

use crate::content::loader::ContentLoader;
use crate::content::PostMetadata;
use crate::theme::{BlogPostTitle, HomepageHeader, PageTitleSink, RenderMode};
use crate::Site;

/// Render a single title heading
pub fn title<S: PageTitleSink>(meta: &PostMetadata, mode: RenderMode, sink: S) -> String {
    BlogPostTitle::new(sink).render(meta, mode).to_html()
}

/// Hero followed by a listing heading for every article
pub fn index<S: PageTitleSink>(site: &Site, sink: S) -> Result<String> {
    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Rendering index with {} posts", posts.len());

    let mut component = BlogPostTitle::new(sink);
    let mut out = HomepageHeader::new(&site.config).render();
    for post in &posts {
        out.push('\n');
        out.push_str(&component.render(&post.meta, RenderMode::List).to_html());
    }
    Ok(out)
}

/// Page heading for the article with the given slug
pub fn post<S: PageTitleSink>(site: &Site, slug: &str, sink: S) -> Result<String> {
    let post = ContentLoader::new(site)
        .find_post(slug)?
        .ok_or_else(|| anyhow!("No post with slug: {}", slug))?;
    tracing::debug!("Rendering post {:?}", post.source);

    Ok(BlogPostTitle::new(sink)
        .render(&post.meta, RenderMode::PostPage)
        .to_html())
}
