//! Titles that need inline formatting
//!
//! Front-matter titles are plain strings, so a title that should show inline
//! code cannot express it. Each entry here maps one exact title to the
//! fragments it is displayed as. Titles not listed are rendered verbatim.

use crate::helpers::html_escape;

/// A piece of a formatted title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Text(&'static str),
    Code(&'static str),
}

impl Fragment {
    /// HTML for this fragment
    pub fn to_html(&self) -> String {
        match self {
            Fragment::Text(text) => html_escape(text),
            Fragment::Code(code) => format!("<code>{}</code>", html_escape(code)),
        }
    }

    /// Text with formatting dropped
    pub fn text(&self) -> &'static str {
        match self {
            Fragment::Text(text) | Fragment::Code(text) => text,
        }
    }
}

/// One exception table entry
#[derive(Debug, Clone, Copy)]
pub struct TitleOverride {
    /// Raw title, compared byte for byte
    pub title: &'static str,
    pub fragments: &'static [Fragment],
}

pub const TITLE_OVERRIDES: &[TitleOverride] = &[TitleOverride {
    title: "The `satisfies` Operator",
    fragments: &[
        Fragment::Text("The "),
        Fragment::Code("satisfies"),
        Fragment::Text(" operator"),
    ],
}];

/// Find the display fragments for a title, if it is in the table
pub fn lookup_override(title: &str) -> Option<&'static [Fragment]> {
    TITLE_OVERRIDES
        .iter()
        .find(|o| o.title == title)
        .map(|o| o.fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_match() {
        let fragments = lookup_override("The `satisfies` Operator").unwrap();
        let html: String = fragments.iter().map(Fragment::to_html).collect();
        assert_eq!(html, "The <code>satisfies</code> operator");
    }

    #[test]
    fn test_lookup_requires_exact_text() {
        assert!(lookup_override("The `satisfies` operator").is_none());
        assert!(lookup_override("The satisfies Operator").is_none());
        assert!(lookup_override(" The `satisfies` Operator").is_none());
        assert!(lookup_override("").is_none());
    }

    #[test]
    fn test_fragment_text() {
        assert_eq!(Fragment::Code("satisfies").text(), "satisfies");
        assert_eq!(Fragment::Code("a<b").to_html(), "<code>a&lt;b</code>");
    }
}
