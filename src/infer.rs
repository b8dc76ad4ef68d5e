//! URL-pattern inference: find a page index embedded in a URL and produce
//! the adjacent page's URL.
//!
//! Two detections run in fixed order: query parameters first (`page`, `p`,
//! `index`), then a trailing path segment. Pages are 1-indexed, so an
//! adjacent index of zero or below is out of range. Unless disabled, the
//! candidate must be confirmed live by the existence probe before it is
//! returned; an unconfirmed candidate is discarded, not flagged.

use url::Url;

use crate::fetch::ExistenceProbe;
use crate::options::Options;
use crate::patterns;
use crate::types::Direction;

/// Query parameters recognized as a page index, in priority order.
const PAGE_PARAMS: [&str; 3] = ["page", "p", "index"];

/// Outcome of one detection pass.
enum Detection {
    /// A structurally valid adjacent URL.
    Candidate(String),
    /// A page index was found but the adjacent index is out of range.
    /// Terminal: the URL's index is known, there is nothing else to try.
    Rejected,
    /// No page index pattern in this part of the URL.
    Absent,
}

fn adjacent_index(index: i64, direction: Direction) -> Option<i64> {
    let adjacent = match direction {
        Direction::Next => index.checked_add(1)?,
        Direction::Prev => index.checked_sub(1)?,
    };
    (adjacent > 0).then_some(adjacent)
}

/// Rewrite the first recognized integer page parameter in place. Splices the
/// raw query string, so every other piece (encoding, valueless flags, order)
/// is carried over byte for byte.
fn detect_query(url: &Url, direction: Direction) -> Detection {
    let Some(raw_query) = url.query() else {
        return Detection::Absent;
    };
    let pieces: Vec<&str> = raw_query.split('&').collect();

    let target = PAGE_PARAMS.iter().find_map(|name| {
        pieces.iter().find_map(|piece| {
            let (key, value) = piece.split_once('=')?;
            (key == *name).then_some(())?;
            let index = value.parse::<i64>().ok()?;
            Some((*name, index))
        })
    });
    let Some((name, index)) = target else {
        return Detection::Absent;
    };

    let Some(adjacent) = adjacent_index(index, direction) else {
        return Detection::Rejected;
    };

    let rewritten: Vec<String> = pieces
        .iter()
        .map(|piece| match piece.split_once('=') {
            Some((key, _)) if key == name => format!("{name}={adjacent}"),
            _ => (*piece).to_string(),
        })
        .collect();
    let mut candidate = url.clone();
    candidate.set_query(Some(&rewritten.join("&")));
    Detection::Candidate(candidate.to_string())
}

/// Match a trailing page number in the path and swap in the adjacent number
/// on the parsed URL, query string and fragment untouched.
fn detect_path(url: &Url, direction: Direction) -> Detection {
    // Opaque URLs (mailto:, data:) have no path hierarchy to page through.
    if url.cannot_be_a_base() {
        return Detection::Absent;
    }
    let path = url.path();
    let trimmed = path.strip_suffix('/').unwrap_or(path);

    let Some(caps) = patterns::PATH_INDEX.captures(trimmed) else {
        return Detection::Absent;
    };
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let Ok(index) = caps.get(2).map_or("", |m| m.as_str()).parse::<i64>() else {
        return Detection::Absent;
    };

    let Some(adjacent) = adjacent_index(index, direction) else {
        return Detection::Rejected;
    };

    let mut candidate = url.clone();
    candidate.set_path(&format!("{prefix}{adjacent}"));
    Detection::Candidate(candidate.to_string())
}

/// Infer the adjacent page's URL from `url`, verifying existence through
/// `probe` unless the options disable verification.
///
/// No page pattern in either the query or the path means no probe is issued.
pub(crate) async fn find_adjacent<P>(
    url: &str,
    direction: Direction,
    options: &Options,
    probe: &P,
) -> Option<String>
where
    P: ExistenceProbe + ?Sized,
{
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            options.warn(&format!("cannot infer from {url:?}: {err}"));
            return None;
        }
    };

    let candidate = match detect_query(&parsed, direction) {
        Detection::Candidate(candidate) => candidate,
        Detection::Rejected => return None,
        Detection::Absent => match detect_path(&parsed, direction) {
            Detection::Candidate(candidate) => candidate,
            Detection::Rejected | Detection::Absent => return None,
        },
    };

    if !options.verify_exists {
        return Some(candidate);
    }

    // Hard bound on the probe regardless of its implementation.
    let confirmed = tokio::time::timeout(options.timeout, probe.exists(&candidate, options.timeout))
        .await
        .unwrap_or(false);
    confirmed.then_some(candidate)
}
