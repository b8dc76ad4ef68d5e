//! Image `alt` text strategy.
//!
//! Old-school pagination arrows rendered as images: the anchor wraps an
//! `<img>` whose alt text names the direction. The anchor's own href is what
//! gets returned, never the image source.

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

    for anchor in markup::anchors(html) {
        let alt_matches = markup::img_tags(anchor.inner).any(|img_attrs| {
            extract_attribute(img_attrs, "alt").is_some_and(|alt| {
                let alt = markup::decode_entities(&alt);
                pattern.is_match(alt.trim())
            })
        });
        if !alt_matches {
            continue;
        }
        if let Some(url) = resolve_href(anchor.attrs, base_url, options) {
            return Some(url);
        }
    }
    None
}
