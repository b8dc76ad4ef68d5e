//! `aria-label` strategy.
//!
//! Icon-only pagination buttons usually carry their meaning in the
//! accessibility label. The label is short by nature, so it is tested as a
//! whole value against the same phrase vocabulary as visible text.

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
    let pattern = patterns::phrase_pattern(direction);

    for attrs in markup::anchor_open_tags(html) {
        let Some(label) = extract_attribute(attrs, "aria-label") else {
            continue;
        };
        let label = markup::decode_entities(&label);
        if !pattern.is_match(label.trim()) {
            continue;
        }
        if let Some(url) = resolve_href(attrs, base_url, options) {
            return Some(url);
        }
    }
    None
}
