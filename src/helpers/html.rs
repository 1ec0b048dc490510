//! HTML helper functions

/// Generate an anchor tag around already-rendered inner HTML
///
/// # Examples
/// ```ignore
/// link_to("/articles/branded-types/", "Branded Types") // -> <a href="/articles/branded-types/">Branded Types</a>
/// ```
pub fn link_to(href: &str, inner_html: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), inner_html)
}

/// Wrap inner HTML in an element, with an optional class attribute
pub fn element(tag: &str, class: Option<&str>, inner_html: &str) -> String {
    match class {
        Some(class) => format!(
            r#"<{tag} class="{}">{inner_html}</{tag}>"#,
            html_escape(class)
        ),
        None => format!("<{tag}>{inner_html}</{tag}>"),
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
