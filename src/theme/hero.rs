//! Homepage hero section

use crate::config::{HeroConfig, SiteConfig};
use crate::helpers::{element, html_escape, is_external, url_for};

/// Static header shown at the top of the homepage
pub struct HomepageHeader {
    hero: HeroConfig,
    cta_href: String,
}

impl HomepageHeader {
    pub fn new(config: &SiteConfig) -> Self {
        let hero = config.resolved_hero();
        let cta_href = if is_external(&hero.cta_link) {
            hero.cta_link.clone()
        } else {
            url_for(config, &hero.cta_link)
        };
        Self { hero, cta_href }
    }

    pub fn render(&self) -> String {
        let title = element("h1", Some("hero__title"), &html_escape(&self.hero.title));
        let subtitle = element(
            "p",
            Some("hero__subtitle"),
            &html_escape(&self.hero.tagline),
        );
        let button = format!(
            r#"<a class="button button--secondary button--lg" href="{}">{}</a>"#,
            html_escape(&self.cta_href),
            html_escape(&self.hero.cta_text)
        );
        let buttons = element("div", Some("buttons"), &button);
        let container = element("div", Some("container"), &(title + &subtitle + &buttons));

        element("header", Some("hero hero--primary"), &container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hero() {
        let mut config = SiteConfig::default();
        config.title = "Typed Companion".to_string();
        config.tagline = "Articles & notes".to_string();

        let html = HomepageHeader::new(&config).render();
        assert_eq!(
            html,
            concat!(
                r#"<header class="hero hero--primary"><div class="container">"#,
                r#"<h1 class="hero__title">Typed Companion</h1>"#,
                r#"<p class="hero__subtitle">Articles &amp; notes</p>"#,
                r#"<div class="buttons"><a class="button button--secondary button--lg" href="/articles/">Read the articles</a></div>"#,
                r#"</div></header>"#
            )
        );
    }

    #[test]
    fn test_cta_link_under_root() {
        let mut config = SiteConfig::default();
        config.root = "/book/".to_string();
        let html = HomepageHeader::new(&config).render();
        assert!(html.contains(r#"href="/book/articles/""#));
    }

    #[test]
    fn test_external_cta_link_kept() {
        let mut config = SiteConfig::default();
        config.hero.cta_link = "https://example.com/buy".to_string();
        let html = HomepageHeader::new(&config).render();
        assert!(html.contains(r#"href="https://example.com/buy""#));
    }
}
