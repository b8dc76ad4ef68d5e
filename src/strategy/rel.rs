//! `rel` attribute strategy.
//!
//! The most reliable signal there is: `<a rel="next">` / `<link rel="prev">`
//! exist specifically to declare document sequence.

use crate::options::Options;
use crate::patterns;
use crate::resolve::resolve_href;
use crate::types::Direction;

/// Scan every `<a>` and `<link>` opening tag in document order for a `rel`
/// value containing the direction token as a whole word.
pub(crate) fn scan(
    html: &str,
    base_url: &str,
    direction: Direction,
    options: &Options,
) -> Option<String> {
    let pattern = patterns::rel_pattern(direction);

    // Anchors and link tags interleaved by document position.
    let mut tags: Vec<(usize, &str)> = patterns::ANCHOR_OPEN
        .captures_iter(html)
        .chain(patterns::LINK_TAG.captures_iter(html))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), caps.get(1).map_or("", |m| m.as_str())))
        })
        .collect();
    tags.sort_unstable_by_key(|(start, _)| *start);

    for (_, attrs) in tags {
        let Some(rel) = crate::attr::extract_attribute(attrs, "rel") else {
            continue;
        };
        if !pattern.is_match(&rel) {
            continue;
        }
        if let Some(url) = resolve_href(attrs, base_url, options) {
            return Some(url);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/articles/";

    #[test]
    fn finds_rel_next_anchor() {
        let html = r#"<a rel="next" href="/articles/2">more</a>"#;
        assert_eq!(
            scan(html, BASE, Direction::Next, &Options::default()),
            Some("https://example.com/articles/2".to_string())
        );
    }

    #[test]
    fn finds_rel_prev_link_tag() {
        let html = r#"<head><link rel="prev" href="page1.html"></head>"#;
        assert_eq!(
            scan(html, BASE, Direction::Prev, &Options::default()),
            Some("https://example.com/articles/page1.html".to_string())
        );
    }

    #[test]
    fn multi_valued_rel_matches_whole_word() {
        let html = r#"<a rel="nofollow next" href="/2">more</a>"#;
        assert_eq!(
            scan(html, BASE, Direction::Next, &Options::default()),
            Some("https://example.com/2".to_string())
        );
    }

    #[test]
    fn rel_word_fragment_does_not_match() {
        let html = r#"<a rel="nextish" href="/2">more</a>"#;
        assert_eq!(scan(html, BASE, Direction::Next, &Options::default()), None);
    }

    #[test]
    fn direction_selects_the_matching_tag() {
        let html = r#"
            <link rel="prev" href="/1">
            <link rel="next" href="/3">
        "#;
        let options = Options::default();
        assert_eq!(
            scan(html, BASE, Direction::Next, &options),
            Some("https://example.com/3".to_string())
        );
        assert_eq!(
            scan(html, BASE, Direction::Prev, &options),
            Some("https://example.com/1".to_string())
        );
    }

    #[test]
    fn unresolvable_href_falls_through_to_later_occurrence() {
        let html = r#"
            <a rel="next">no href here</a>
            <a rel="next" href="/2">more</a>
        "#;
        assert_eq!(
            scan(html, BASE, Direction::Next, &Options::default()),
            Some("https://example.com/2".to_string())
        );
    }

    #[test]
    fn document_order_across_tag_kinds() {
        let html = r#"
            <a rel="next" href="/anchor-first">a</a>
            <link rel="next" href="/link-second">
        "#;
        assert_eq!(
            scan(html, BASE, Direction::Next, &Options::default()),
            Some("https://example.com/anchor-first".to_string())
        );
    }
}
