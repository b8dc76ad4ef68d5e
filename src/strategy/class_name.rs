//! Class/id naming-convention strategy.
//!
//! Themes overwhelmingly name their pagination anchors something containing
//! `next` or `prev`. The `class` check honors a caller-supplied override
//! pattern; `id` is always matched against the built-in default.

use crate::attr::extract_attribute;
use crate::markup;
use crate::options::Options;
use crate::patterns;
use crate::resolve::resolve_href;
use crate::types::Direction;

pub(crate) fn scan(
    html: &str,
    base_url: &str,
    direction: Direction,
    options: &Options,
) -> Option<String> {
    let default = patterns::class_pattern(direction);
    let class_pattern = options.class_name_regex.as_ref().unwrap_or(default);

    for attrs in markup::anchor_open_tags(html) {
        let class_hit = extract_attribute(attrs, "class")
            .is_some_and(|class| class_pattern.is_match(&class));
        let id_hit = extract_attribute(attrs, "id").is_some_and(|id| default.is_match(&id));
        if !class_hit && !id_hit {
            continue;
        }
        if let Some(url) = resolve_href(attrs, base_url, options) {
            return Some(url);
        }
    }
    None
}
