//! Visible-text strategy.
//!
//! Matches an anchor's cleaned inner text (tags stripped, character
//! references decoded, trimmed) against the multilingual phrase vocabulary.
//! Whole-string matching only: "What happens next" is not a pagination link.

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
        let text = markup::visible_text(anchor.inner);
        if text.is_empty() || !pattern.is_match(&text) {
            continue;
        }
        if let Some(url) = resolve_href(anchor.attrs, base_url, options) {
            return Some(url);
        }
    }
    None
}
