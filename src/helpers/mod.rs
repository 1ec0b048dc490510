//! Helper functions shared by the theme components
//!
//! URL generation and the small amount of HTML building the components need.

mod html;
mod url;

pub use html::*;
pub use url::*;
