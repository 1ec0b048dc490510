//! Theme module - component overrides rendered into the article pages
//!
//! The components take their inputs explicitly. The only side effect, the
//! page title, goes through a [`PageTitleSink`] supplied by the caller.

mod hero;
mod overrides;
mod sink;
mod title;

pub use hero::HomepageHeader;
pub use overrides::{lookup_override, Fragment, TitleOverride, TITLE_OVERRIDES};
pub use sink::{DocumentTitle, LogTitle, PageTitleSink, TitleSync};
pub use title::{page_title, render_title, BlogPostTitle, Heading, HeadingLevel, RenderMode, TitleContent};
