//! Pagination-structure strategy.
//!
//! Locates pagination containers by class/id convention, then looks for the
//! link adjacent to the current page: first by list-item adjacency, then by a
//! looser current-marked-sibling rule. Adjacency is best-effort regex
//! matching over the container's inner markup, not tree adjacency; unbalanced
//! markup can fool it and that is an accepted limitation of the heuristic.

use crate::attr::extract_attribute;
use crate::options::Options;
use crate::patterns;
use crate::resolve::resolve_href;
use crate::types::Direction;

/// Inner markup of each pagination-marked container, in document order.
///
/// Open tags are located first and the inner markup is carved out forward
/// from each open tag to the next matching close tag. Scanning open tags
/// (rather than whole elements) means a pagination container nested inside
/// any other element is still found, wrapper `div` around pagination `div`
/// included. The first close tag ends the container; nested same-name
/// children are not balanced.
fn containers(html: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for caps in patterns::CONTAINER_OPEN.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let tag = caps.get(1).map_or("", |m| m.as_str());
        let attrs = caps.get(2).map_or("", |m| m.as_str());
        if !is_pagination_container(attrs) {
            continue;
        }
        let rest = &html[whole.end()..];
        let inner = patterns::container_close(tag)
            .find(rest)
            .map_or(rest, |close| &rest[..close.start()]);
        found.push(inner);
    }
    found
}

fn is_pagination_container(attrs: &str) -> bool {
    let class_hit = extract_attribute(attrs, "class")
        .is_some_and(|class| patterns::PAGINATION_TOKEN.is_match(&class));
    let id_hit =
        extract_attribute(attrs, "id").is_some_and(|id| patterns::PAGINATION_TOKEN.is_match(&id));
    class_hit || id_hit
}

/// List-item rule: the item adjacent to the current/active one holds the
/// directional link.
fn adjacent_list_item(
    inner: &str,
    base_url: &str,
    direction: Direction,
    options: &Options,
) -> Option<String> {
    let items: Vec<(&str, &str)> = patterns::LIST_ITEM
        .captures_iter(inner)
        .map(|caps| {
            (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            )
        })
        .collect();

    let current = items.iter().position(|(attrs, _)| {
        extract_attribute(attrs, "class")
            .is_some_and(|class| patterns::CURRENT_TOKEN.is_match(&class))
    })?;

    let adjacent = match direction {
        Direction::Next => current.checked_add(1)?,
        Direction::Prev => current.checked_sub(1)?,
    };
    let (_, item_inner) = items.get(adjacent)?;

    let anchor_attrs = patterns::ANCHOR_OPEN
        .captures(item_inner)
        .and_then(|caps| caps.get(1))?;
    resolve_href(anchor_attrs.as_str(), base_url, options)
}

pub(crate) fn scan(
    html: &str,
    base_url: &str,
    direction: Direction,
    options: &Options,
) -> Option<String> {
    for inner in containers(html) {
        // Rule (a): list-item adjacency.
        if let Some(url) = adjacent_list_item(inner, base_url, direction, options) {
            return Some(url);
        }

        // Rule (b): looser sibling match around any current-marked element.
        if let Some(caps) = patterns::fallback_pattern(direction).captures(inner) {
            let anchor_attrs = caps.get(1).map_or("", |m| m.as_str());
            if let Some(url) = resolve_href(anchor_attrs, base_url, options) {
                return Some(url);
            }
        }
    }
    None
}
