//! The six detection strategies and their dispatcher.
//!
//! Every strategy shares the same contract: scan the markup strictly left to
//! right, return the first structurally matching occurrence whose href
//! resolves, and skip (not abort) occurrences whose href does not. Strategies
//! are pure functions of their inputs; the only shared state is the read-only
//! pattern caches.

pub(crate) mod aria_label;
pub(crate) mod class_name;
pub(crate) mod image_alt;
pub(crate) mod pagination;
pub(crate) mod rel;
pub(crate) mod text;

use crate::options::Options;
use crate::types::{Direction, Method};

/// Run the configured strategies in order, short-circuiting on the first hit.
///
/// One strategy finding nothing (or failing internally on odd markup) never
/// prevents the remaining strategies from running.
pub(crate) fn dispatch(
    html: &str,
    base_url: &str,
    direction: Direction,
    options: &Options,
) -> Option<String> {
    for method in &options.methods {
        let found = match method {
            Method::Rel => rel::scan(html, base_url, direction, options),
            Method::Pagination => pagination::scan(html, base_url, direction, options),
            Method::Text => text::scan(html, base_url, direction, options),
            Method::ClassName => class_name::scan(html, base_url, direction, options),
            Method::AriaLabel => aria_label::scan(html, base_url, direction, options),
            Method::Alt => image_alt::scan(html, base_url, direction, options),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/list";

    #[test]
    fn first_configured_method_wins() {
        let html = r#"
            <a rel="next" href="/rel-next">more</a>
            <a href="/text-next">Next</a>
        "#;

        let default = Options::default();
        assert_eq!(
            dispatch(html, BASE, Direction::Next, &default),
            Some("https://example.com/rel-next".to_string())
        );

        let text_first = Options {
            methods: vec![Method::Text, Method::Rel],
            ..Options::default()
        };
        assert_eq!(
            dispatch(html, BASE, Direction::Next, &text_first),
            Some("https://example.com/text-next".to_string())
        );
    }

    #[test]
    fn exhausted_methods_yield_none() {
        let html = r#"<a href="/about">About us</a>"#;
        assert_eq!(dispatch(html, BASE, Direction::Next, &Options::default()), None);
    }

    #[test]
    fn empty_method_list_finds_nothing() {
        let html = r#"<a rel="next" href="/2">more</a>"#;
        let options = Options {
            methods: Vec::new(),
            ..Options::default()
        };
        assert_eq!(dispatch(html, BASE, Direction::Next, &options), None);
    }

    #[test]
    fn duplicate_methods_are_harmless() {
        let html = r#"<a rel="next" href="/2">more</a>"#;
        let options = Options {
            methods: vec![Method::Rel, Method::Rel, Method::Rel],
            ..Options::default()
        };
        assert_eq!(
            dispatch(html, BASE, Direction::Next, &options),
            Some("https://example.com/2".to_string())
        );
    }
}
