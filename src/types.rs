//! Core enumerations shared across the detection and inference engines.

/// Search direction relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The page following the current one.
    Next,
    /// The page preceding the current one.
    Prev,
}

/// One markup-detection heuristic.
///
/// The declaration order is the default dispatch order: `rel` links are the
/// most reliable signal, free-text matching the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `rel="next"` / `rel="prev"` on `<a>` and `<link>` tags.
    Rel,
    /// Structural adjacency inside a pagination container.
    Pagination,
    /// Visible anchor text ("Next", "次へ", "»", ...).
    Text,
    /// `class`/`id` naming conventions on anchors.
    ClassName,
    /// `aria-label` values on anchors.
    AriaLabel,
    /// `alt` text of images wrapped in anchors.
    Alt,
}

impl Method {
    /// Default dispatch order, most reliable heuristic first.
    pub const DEFAULT_ORDER: [Method; 6] = [
        Method::Rel,
        Method::Pagination,
        Method::Text,
        Method::ClassName,
        Method::AriaLabel,
        Method::Alt,
    ];
}
