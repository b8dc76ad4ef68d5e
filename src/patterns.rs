//! Compiled regex patterns for pagination-link detection.
//!
//! All patterns are compiled once on first use via `LazyLock` and keyed by
//! [`Direction`] where the vocabulary differs per direction. They are
//! process-wide, read-only constants; nothing here is mutated after
//! compilation.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Direction;

// =============================================================================
// Tag Extraction Patterns
// =============================================================================

/// Opening `<a>` tag, capturing its attribute substring.
pub static ANCHOR_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>").expect("ANCHOR_OPEN regex"));

/// Full anchor: open tag, inner markup, closing tag. Non-greedy inner so
/// sibling anchors are matched separately.
pub static ANCHOR_FULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("ANCHOR_FULL regex"));

/// `<link>` tag (void element), capturing its attribute substring.
pub static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b([^>]*?)/?>").expect("LINK_TAG regex"));

/// `<img>` tag (void element), capturing its attribute substring.
pub static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b([^>]*?)/?>").expect("IMG_TAG regex"));

/// Any markup tag, for stripping nested tags out of visible text.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("ANY_TAG regex"));

/// HTML character reference (named, decimal, or hex).
pub static CHAR_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#x[0-9a-fA-F]+|#[0-9]+|[a-zA-Z][a-zA-Z0-9]*);").expect("CHAR_REFERENCE regex")
});

// =============================================================================
// Rel Attribute Patterns
// =============================================================================

/// Whole-word `next` inside a possibly multi-valued `rel` attribute.
static REL_NEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)next(?:\s|$)").expect("REL_NEXT regex"));

/// Whole-word `prev` or `previous` inside a `rel` attribute.
static REL_PREV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)(?:prev|previous)(?:\s|$)").expect("REL_PREV regex"));

// =============================================================================
// Phrase Patterns (visible text, aria-label, image alt)
// =============================================================================
//
// Anchored at both ends: the whole cleaned text must be the phrase, so link
// text that merely contains "next" somewhere does not qualify. Leading and
// trailing chevrons/arrows may repeat ("Next »", "»»", "> Next >").

static PHRASE_NEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\s»>→]*(?:next(?:\s+page)?|older(?:\s+posts?)?|forward|次のページ|次ページ|次へ|次|下一页|下一頁|下页|다음(?:\s*페이지)?|[»>→]+)[\s»>→]*$",
    )
    .expect("PHRASE_NEXT regex")
});

static PHRASE_PREV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\s«<←]*(?:prev(?:ious)?(?:\s+page)?|back|newer(?:\s+posts?)?|前のページ|前ページ|前へ|前|上一页|上一頁|上页|이전(?:\s*페이지)?|[«<←]+)[\s«<←]*$",
    )
    .expect("PHRASE_PREV regex")
});

// =============================================================================
// Class / Id Patterns
// =============================================================================

/// Substring `next` in class/id tokens (`pagination-next`, `btn-next`, ...).
static CLASS_NEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)next").expect("CLASS_NEXT regex"));

/// Substring `prev`/`previous` in class/id tokens.
static CLASS_PREV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)prev(?:ious)?").expect("CLASS_PREV regex"));

// =============================================================================
// Pagination Structure Patterns
// =============================================================================

/// Opening tag of a potential pagination container (`div`/`nav`/`ul`),
/// capturing tag name and attribute substring. Open tags are located first
/// and the inner markup is carved out forward from each, so a container
/// nested inside any other element, same tag name included, is still seen.
pub static CONTAINER_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(div|nav|ul)\b([^>]*)>").expect("CONTAINER_OPEN regex")
});

static CLOSE_DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</div\s*>").expect("CLOSE_DIV regex"));

static CLOSE_NAV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</nav\s*>").expect("CLOSE_NAV regex"));

static CLOSE_UL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</ul\s*>").expect("CLOSE_UL regex"));

/// Close-tag pattern for a container tag name. Best-effort: the first close
/// tag ends the container, nested same-name children are not balanced.
#[must_use]
pub fn container_close(tag: &str) -> &'static Regex {
    match tag.to_ascii_lowercase().as_str() {
        "div" => &CLOSE_DIV,
        "nav" => &CLOSE_NAV,
        _ => &CLOSE_UL,
    }
}

/// Class/id token marking a pagination container.
pub static PAGINATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:pagination|pager|page-nav)").expect("PAGINATION_TOKEN regex")
});

/// A list item with its attributes and inner markup.
pub static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li\b([^>]*)>(.*?)</li\s*>").expect("LIST_ITEM regex"));

/// Class token marking the current page inside a pagination container.
pub static CURRENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:current|active)").expect("CURRENT_TOKEN regex"));

/// Loose fallback, next direction: an anchor directly following an element
/// marked current/active (or `aria-current="page"`), no list-item wrapping
/// required. Regex adjacency, not tree adjacency.
pub static FALLBACK_AFTER_CURRENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?isx)
        <(?:li|span|strong|a)\b[^>]*
        (?:class\s*=\s*(?:"[^"]*(?:current|active)[^"]*"|'[^']*(?:current|active)[^']*')
          |aria-current\s*=\s*(?:"page"|'page'))
        [^>]*>.*?</(?:li|span|strong|a)\s*>
        \s*(?:</li\s*>\s*)?(?:<li\b[^>]*>\s*)?
        <a\b([^>]*)>"#,
    )
    .expect("FALLBACK_AFTER_CURRENT regex")
});

/// Loose fallback, prev direction: an anchor directly preceding an element
/// marked current/active (or `aria-current="page"`).
pub static FALLBACK_BEFORE_CURRENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?isx)
        <a\b([^>]*)>.*?</a\s*>
        \s*(?:</li\s*>\s*)?(?:<li\b[^>]*>\s*)?
        <(?:li|span|strong|a)\b[^>]*
        (?:class\s*=\s*(?:"[^"]*(?:current|active)[^"]*"|'[^']*(?:current|active)[^']*')
          |aria-current\s*=\s*(?:"page"|'page'))
        [^>]*>"#,
    )
    .expect("FALLBACK_BEFORE_CURRENT regex")
});

// =============================================================================
// URL Inference Patterns
// =============================================================================

/// Trailing page index in a URL path: any prefix ending in `/`, `-` or `_`,
/// then one or more digits at the end of the path.
pub static PATH_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*[/\-_])([0-9]+)$").expect("PATH_INDEX regex"));

// =============================================================================
// Direction-keyed lookup
// =============================================================================

/// Rel-attribute pattern for `direction`.
#[must_use]
pub fn rel_pattern(direction: Direction) -> &'static Regex {
    match direction {
        Direction::Next => &REL_NEXT,
        Direction::Prev => &REL_PREV,
    }
}

/// Phrase pattern for `direction` (visible text, aria-label, alt text).
#[must_use]
pub fn phrase_pattern(direction: Direction) -> &'static Regex {
    match direction {
        Direction::Next => &PHRASE_NEXT,
        Direction::Prev => &PHRASE_PREV,
    }
}

/// Default class/id pattern for `direction`.
#[must_use]
pub fn class_pattern(direction: Direction) -> &'static Regex {
    match direction {
        Direction::Next => &CLASS_NEXT,
        Direction::Prev => &CLASS_PREV,
    }
}

/// Loose pagination fallback pattern for `direction`.
#[must_use]
pub fn fallback_pattern(direction: Direction) -> &'static Regex {
    match direction {
        Direction::Next => &FALLBACK_AFTER_CURRENT,
        Direction::Prev => &FALLBACK_BEFORE_CURRENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_pattern_matches_whole_words_only() {
        assert!(rel_pattern(Direction::Next).is_match("next"));
        assert!(rel_pattern(Direction::Next).is_match("nofollow next"));
        assert!(!rel_pattern(Direction::Next).is_match("nextpage"));
        assert!(!rel_pattern(Direction::Next).is_match("prefetch-next"));
        assert!(rel_pattern(Direction::Prev).is_match("prev"));
        assert!(rel_pattern(Direction::Prev).is_match("Previous"));
        assert!(!rel_pattern(Direction::Prev).is_match("preview"));
    }

    #[test]
    fn phrase_pattern_matches_whole_string() {
        let next = phrase_pattern(Direction::Next);
        assert!(next.is_match("Next"));
        assert!(next.is_match("next page"));
        assert!(next.is_match("Next »"));
        assert!(next.is_match("»"));
        assert!(next.is_match(">>"));
        assert!(next.is_match("次へ"));
        assert!(next.is_match("下一页"));
        assert!(next.is_match("다음"));
        assert!(!next.is_match("What happens next"));
        assert!(!next.is_match("nextdoor"));
    }

    #[test]
    fn phrase_pattern_prev_vocabulary() {
        let prev = phrase_pattern(Direction::Prev);
        assert!(prev.is_match("Previous"));
        assert!(prev.is_match("« Prev"));
        assert!(prev.is_match("Back"));
        assert!(prev.is_match("前へ"));
        assert!(prev.is_match("上一頁"));
        assert!(prev.is_match("이전 페이지"));
        assert!(!prev.is_match("Backstage pass"));
    }

    #[test]
    fn class_pattern_is_substring() {
        assert!(class_pattern(Direction::Next).is_match("pagination-next"));
        assert!(class_pattern(Direction::Prev).is_match("btn btn-prev"));
        assert!(!class_pattern(Direction::Next).is_match("pager"));
    }

    #[test]
    fn pagination_token_variants() {
        assert!(PAGINATION_TOKEN.is_match("pagination"));
        assert!(PAGINATION_TOKEN.is_match("Pager"));
        assert!(PAGINATION_TOKEN.is_match("page-nav"));
        assert!(!PAGINATION_TOKEN.is_match("page"));
    }

    #[test]
    fn container_open_captures_tag_and_attrs() {
        let html = r#"<ul class="pagination"><li>1</li></ul>"#;
        let caps = CONTAINER_OPEN.captures(html).expect("container open tag");
        assert_eq!(&caps[1], "ul");
        assert!(caps[2].contains("pagination"));
    }

    #[test]
    fn container_close_is_selected_by_tag_name() {
        assert!(container_close("div").is_match("</div>"));
        assert!(container_close("DIV").is_match("</DIV >"));
        assert!(container_close("nav").is_match("</nav>"));
        assert!(container_close("ul").is_match("</ul>"));
        assert!(!container_close("ul").is_match("</div>"));
    }
}
