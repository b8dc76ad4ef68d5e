//! # pagenav
//!
//! Heuristic discovery of "next" and "previous" pagination links.
//!
//! Given a page's raw HTML and its base URL, six independent heuristics scan
//! the markup for a directional link (`rel` attributes, pagination-container
//! structure, visible text, class/id conventions, `aria-label`, image alt
//! text) and the first hit in a configurable strategy order wins. Given only
//! a URL, a page index embedded in the query string or path is detected and
//! the adjacent page's URL is inferred, optionally confirmed live with a
//! HEAD probe.
//!
//! No DOM is built: the engine tolerates malformed, partial and adversarial
//! markup and degrades every failure to "not found".
//!
//! ## Quick Start
//!
//! ```rust
//! use pagenav::find_next;
//!
//! let html = r#"<a rel="next" href="/articles?page=2">More</a>"#;
//! let next = find_next(html, "https://example.com/articles");
//! assert_eq!(next.as_deref(), Some("https://example.com/articles?page=2"));
//! ```
//!
//! ## URL inference
//!
//! ```rust,no_run
//! use pagenav::{find_next_by_url_with_options, Options};
//!
//! # async fn run() {
//! let options = Options { verify_exists: false, ..Options::default() };
//! let next = find_next_by_url_with_options("https://example.com/archive/2", &options).await;
//! assert_eq!(next.as_deref(), Some("https://example.com/archive/3"));
//! # }
//! ```

mod error;
mod infer;
mod markup;
mod options;
mod resolve;
mod strategy;
mod types;

/// Attribute extraction from raw tag markup.
pub mod attr;

/// Network collaborators: document retrieval and existence probing.
pub mod fetch;

/// Diagnostic sink for recoverable conditions.
pub mod logging;

/// Compiled regex patterns for pagination-link detection.
pub mod patterns;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{check_exists, fetch_document, ExistenceProbe, HttpProbe};
pub use logging::{LogLevel, Logger, TracingLogger};
pub use options::{Options, DEFAULT_TIMEOUT};
pub use types::{Direction, Method};

/// Find the next-page link in `html` using default options.
///
/// Synchronous and side-effect free. Returns the first candidate found by
/// the default strategy order, as an absolute URL resolved against
/// `base_url`, or `None` if no strategy matches.
#[must_use]
pub fn find_next(html: &str, base_url: &str) -> Option<String> {
    find_next_with_options(html, base_url, &Options::default())
}

/// Find the next-page link in `html` with custom options.
#[must_use]
pub fn find_next_with_options(html: &str, base_url: &str, options: &Options) -> Option<String> {
    strategy::dispatch(html, base_url, Direction::Next, options)
}

/// Find the previous-page link in `html` using default options.
#[must_use]
pub fn find_prev(html: &str, base_url: &str) -> Option<String> {
    find_prev_with_options(html, base_url, &Options::default())
}

/// Find the previous-page link in `html` with custom options.
#[must_use]
pub fn find_prev_with_options(html: &str, base_url: &str, options: &Options) -> Option<String> {
    strategy::dispatch(html, base_url, Direction::Prev, options)
}

/// Infer the next page's URL from a page index embedded in `url`.
///
/// Asynchronous: unless `verify_exists` is disabled, the candidate is
/// confirmed with a HEAD probe before being returned.
pub async fn find_next_by_url(url: &str) -> Option<String> {
    find_next_by_url_with_options(url, &Options::default()).await
}

/// Infer the next page's URL with custom options.
pub async fn find_next_by_url_with_options(url: &str, options: &Options) -> Option<String> {
    infer::find_adjacent(url, Direction::Next, options, &HttpProbe).await
}

/// Infer the previous page's URL from a page index embedded in `url`.
pub async fn find_prev_by_url(url: &str) -> Option<String> {
    find_prev_by_url_with_options(url, &Options::default()).await
}

/// Infer the previous page's URL with custom options.
pub async fn find_prev_by_url_with_options(url: &str, options: &Options) -> Option<String> {
    infer::find_adjacent(url, Direction::Prev, options, &HttpProbe).await
}

/// Infer the adjacent page's URL using a caller-supplied existence probe.
///
/// This is the seam the by-URL API is built on; embedders with their own
/// transport (or tests) inject a probe instead of the built-in HEAD client.
pub async fn find_by_url_with_probe<P>(
    url: &str,
    direction: Direction,
    options: &Options,
    probe: &P,
) -> Option<String>
where
    P: ExistenceProbe + ?Sized,
{
    infer::find_adjacent(url, direction, options, probe).await
}
