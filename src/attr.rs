//! Attribute extraction from raw tag markup.
//!
//! Works on the attribute substring of a single tag (everything between the
//! tag name and `>`), without building a DOM. Tolerates arbitrary junk around
//! the pairs; a malformed pair (unterminated or mismatched quotes) is simply
//! not found.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use regex::Regex;

/// Per-attribute-name compiled lookup patterns.
///
/// Append-only memoization: entries are never evicted or replaced. Concurrent
/// population may compile the same pattern twice; the first insert wins and
/// the result is identical either way.
static ATTR_PATTERNS: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn compile_pattern(name: &str) -> Option<Regex> {
    // Quote characters must match on both sides; values are captured verbatim
    // (no entity decoding, no trimming).
    let source = format!(
        r#"(?i)(?:^|[^-\w]){}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(name)
    );
    Regex::new(&source).ok()
}

fn pattern_for(name: &str) -> Option<Regex> {
    let key = name.to_ascii_lowercase();

    if let Ok(cache) = ATTR_PATTERNS.read() {
        if let Some(re) = cache.get(&key) {
            return Some(re.clone());
        }
    }

    let re = compile_pattern(&key)?;
    if let Ok(mut cache) = ATTR_PATTERNS.write() {
        return Some(cache.entry(key).or_insert(re).clone());
    }
    Some(re)
}

/// Extract the first value of `name` from a tag-attribute substring.
///
/// Matching is case-insensitive on the attribute name. The value is returned
/// verbatim; callers trim or decode where the comparison demands it.
///
/// # Example
///
/// ```rust
/// use pagenav::attr::extract_attribute;
///
/// let attrs = r#" class="pager" HREF='/page/2' "#;
/// assert_eq!(extract_attribute(attrs, "href"), Some("/page/2".to_string()));
/// assert_eq!(extract_attribute(attrs, "rel"), None);
/// ```
#[must_use]
pub fn extract_attribute(attrs: &str, name: &str) -> Option<String> {
    let re = pattern_for(name)?;
    let caps = re.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_double_quoted_value() {
        assert_eq!(
            extract_attribute(r#" href="/page/2" class="next""#, "href"),
            Some("/page/2".to_string())
        );
    }

    #[test]
    fn extracts_single_quoted_value() {
        assert_eq!(
            extract_attribute(r#" href='/page/2'"#, "href"),
            Some("/page/2".to_string())
        );
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        assert_eq!(
            extract_attribute(r#" HREF="/a""#, "href"),
            Some("/a".to_string())
        );
        assert_eq!(
            extract_attribute(r#" aria-LABEL="Next page""#, "aria-label"),
            Some("Next page".to_string())
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            extract_attribute(r#" rel="next" rel="prev""#, "rel"),
            Some("next".to_string())
        );
    }

    #[test]
    fn value_is_verbatim() {
        assert_eq!(
            extract_attribute(r#" alt="  Next &raquo; ""#, "alt"),
            Some("  Next &raquo; ".to_string())
        );
    }

    #[test]
    fn mismatched_quotes_are_not_found() {
        assert_eq!(extract_attribute(r#" href="/page/2'"#, "href"), None);
        assert_eq!(extract_attribute(r#" href='/page/2""#, "href"), None);
    }

    #[test]
    fn unterminated_value_is_not_found() {
        assert_eq!(extract_attribute(r#" href="/page/2"#, "href"), None);
    }

    #[test]
    fn missing_attribute_is_not_found() {
        assert_eq!(extract_attribute(r#" class="next""#, "href"), None);
        assert_eq!(extract_attribute("", "href"), None);
    }

    #[test]
    fn name_must_not_match_inside_longer_name() {
        // data-href is a different attribute
        assert_eq!(extract_attribute(r#" data-href="/x""#, "href"), None);
    }

    #[test]
    fn empty_value_is_found() {
        assert_eq!(extract_attribute(r#" href="""#, "href"), Some(String::new()));
    }
}
