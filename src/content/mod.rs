//! Content module - article metadata and front-matter loading

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::{Post, PostMetadata};
