//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Site;

/// One line per article: date, title, permalink
pub fn run(site: &Site) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    println!("Posts ({}):", posts.len());
    for line in lines(&posts) {
        println!("  {}", line);
    }
    Ok(())
}

fn lines(posts: &[crate::content::Post]) -> Vec<String> {
    posts
        .iter()
        .map(|post| {
            let draft = if post.draft { " (draft)" } else { "" };
            format!(
                "{} - {}{} [{}]",
                post.date.format("%Y-%m-%d"),
                post.title(),
                draft,
                post.permalink()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_lines() {
        let date = Local.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap();
        let mut post = Post::new(
            "The `satisfies` Operator".to_string(),
            date,
            "articles/satisfies.md".to_string(),
        );
        post.meta.permalink = "/articles/satisfies/".to_string();
        post.draft = true;

        assert_eq!(
            lines(&[post]),
            vec!["2024-02-10 - The `satisfies` Operator (draft) [/articles/satisfies/]"]
        );
    }
}
