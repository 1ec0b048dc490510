//! Article title component
//!
//! On the article's own page the title is the page's `<h1>`. In listings it
//! is an `<h2>` linking to the article. Titles found in the override table
//! are shown with their inline formatting.

use std::fmt;

use super::overrides::{lookup_override, Fragment};
use super::sink::{PageTitleSink, TitleSync};
use crate::content::PostMetadata;
use crate::helpers::{element, html_escape, link_to};

/// Which page the title is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The article's own page
    PostPage,
    /// An index or listing of articles
    List,
}

impl RenderMode {
    pub fn is_post_page(self) -> bool {
        self == RenderMode::PostPage
    }
}

impl From<bool> for RenderMode {
    fn from(is_post_page: bool) -> Self {
        if is_post_page {
            RenderMode::PostPage
        } else {
            RenderMode::List
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
        }
    }
}

/// What goes inside the heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleContent {
    /// The raw title, shown verbatim
    Text(String),
    /// A title from the override table
    Formatted(&'static [Fragment]),
}

impl TitleContent {
    pub fn to_html(&self) -> String {
        match self {
            TitleContent::Text(text) => html_escape(text),
            TitleContent::Formatted(fragments) => fragments.iter().map(Fragment::to_html).collect(),
        }
    }

    /// Displayed text without markup
    pub fn text(&self) -> String {
        match self {
            TitleContent::Text(text) => text.clone(),
            TitleContent::Formatted(fragments) => fragments.iter().map(Fragment::text).collect(),
        }
    }
}

/// A rendered title heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: HeadingLevel,
    href: Option<String>,
    content: TitleContent,
}

impl Heading {
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    /// Link target, present only for listing headings
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn content(&self) -> &TitleContent {
        &self.content
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn to_html(&self) -> String {
        let inner = self.content.to_html();
        let inner = match &self.href {
            Some(href) => link_to(href, &inner),
            None => inner,
        };
        element(self.level.tag(), None, &inner)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Build the heading for an article title. Pure: no page title side effect.
pub fn render_title(meta: &PostMetadata, mode: RenderMode) -> Heading {
    let content = match lookup_override(&meta.title) {
        Some(fragments) => TitleContent::Formatted(fragments),
        None => TitleContent::Text(meta.title.clone()),
    };

    match mode {
        RenderMode::PostPage => Heading {
            level: HeadingLevel::H1,
            href: None,
            content,
        },
        RenderMode::List => Heading {
            level: HeadingLevel::H2,
            href: Some(meta.permalink.clone()),
            content,
        },
    }
}

/// Plain-text page title for a raw title: backticks removed
pub fn page_title(raw_title: &str) -> String {
    raw_title.replace('`', "")
}

/// Title component that also keeps the page title in sync
#[derive(Debug)]
pub struct BlogPostTitle<S> {
    sync: TitleSync<S>,
}

impl<S: PageTitleSink> BlogPostTitle<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sync: TitleSync::new(sink),
        }
    }

    /// Render the heading, then push the page title if the title changed
    pub fn render(&mut self, meta: &PostMetadata, mode: RenderMode) -> Heading {
        let heading = render_title(meta, mode);
        self.sync.commit(&meta.title);
        heading
    }

    pub fn sink(&self) -> &S {
        self.sync.sink()
    }

    pub fn into_sink(self) -> S {
        self.sync.into_sink()
    }
}
