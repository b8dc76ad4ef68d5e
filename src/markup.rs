//! Low-level scanning helpers over raw markup.
//!
//! No DOM is built anywhere in this crate; these helpers iterate tag
//! occurrences left to right and clean visible text for comparison against
//! the phrase vocabulary.

use std::borrow::Cow;

use crate::patterns;

/// One `<a>` element: its attribute substring and inner markup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Anchor<'h> {
    pub attrs: &'h str,
    pub inner: &'h str,
}

/// All anchors (open tag + inner content) in document order.
pub(crate) fn anchors(html: &str) -> impl Iterator<Item = Anchor<'_>> {
    patterns::ANCHOR_FULL.captures_iter(html).map(|caps| Anchor {
        attrs: caps.get(1).map_or("", |m| m.as_str()),
        inner: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Attribute substrings of all `<a>` opening tags in document order.
pub(crate) fn anchor_open_tags(html: &str) -> impl Iterator<Item = &str> {
    patterns::ANCHOR_OPEN
        .captures_iter(html)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Attribute substrings of all `<link>` tags in document order.
pub(crate) fn link_tags(html: &str) -> impl Iterator<Item = &str> {
    patterns::LINK_TAG
        .captures_iter(html)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Attribute substrings of all `<img>` tags in document order.
pub(crate) fn img_tags(html: &str) -> impl Iterator<Item = &str> {
    patterns::IMG_TAG
        .captures_iter(html)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Remove all markup tags, keeping the text between them.
pub(crate) fn strip_tags(markup: &str) -> Cow<'_, str> {
    patterns::ANY_TAG.replace_all(markup, "")
}

/// Decode HTML character references in visible text.
///
/// Named references limited to the handful that occur in pagination labels;
/// anything unrecognized is removed rather than left to confuse the phrase
/// match. Numeric references (decimal and hex) decode to their code point.
pub(crate) fn decode_entities(text: &str) -> Cow<'_, str> {
    patterns::CHAR_REFERENCE.replace_all(text, |caps: &regex::Captures<'_>| {
        let reference = &caps[0];
        let body = &reference[1..reference.len() - 1];
        if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
            return decode_code_point(u32::from_str_radix(hex, 16).ok());
        }
        if let Some(dec) = body.strip_prefix('#') {
            return decode_code_point(dec.parse::<u32>().ok());
        }
        match body.to_ascii_lowercase().as_str() {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            "nbsp" => " ".to_string(),
            "raquo" => "»".to_string(),
            "laquo" => "«".to_string(),
            "rarr" => "→".to_string(),
            "larr" => "←".to_string(),
            "rsaquo" => "›".to_string(),
            "lsaquo" => "‹".to_string(),
            "hellip" => "…".to_string(),
            _ => String::new(),
        }
    })
}

fn decode_code_point(value: Option<u32>) -> String {
    value
        .and_then(char::from_u32)
        .map_or_else(String::new, |c| c.to_string())
}

/// Clean an anchor's inner markup down to comparable visible text:
/// tags stripped, references decoded, surrounding whitespace trimmed.
pub(crate) fn visible_text(markup: &str) -> String {
    let stripped = strip_tags(markup);
    decode_entities(&stripped).trim().to_string()
}
