//! Configuration options for link detection and URL inference.
//!
//! The `Options` struct controls detection behavior: which heuristics run
//! and in what order, how class names are matched, where diagnostics go,
//! and how candidate URLs are verified.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;

use crate::logging::{LogLevel, Logger};
use crate::types::Method;

/// Default timeout for each network operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

/// Configuration options for detection and inference.
///
/// Constructed fresh per call and never mutated by the engine. Use
/// `Default::default()` for standard settings and struct-update syntax to
/// override individual fields.
///
/// # Example
///
/// ```rust
/// use pagenav::{Method, Options};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Only trust rel attributes and visible text, in that order
/// let options = Options {
///     methods: vec![Method::Rel, Method::Text],
///     verify_exists: false,
///     ..Options::default()
/// };
/// ```
#[derive(Clone)]
pub struct Options {
    /// Detection strategies to try, in order. First success wins.
    ///
    /// Duplicates are harmless. Default: [`Method::DEFAULT_ORDER`].
    pub methods: Vec<Method>,

    /// Override pattern for the class-name strategy's `class` matching.
    ///
    /// The `id` attribute is always matched against the built-in pattern,
    /// the override applies to `class` only.
    ///
    /// Default: `None`
    pub class_name_regex: Option<Regex>,

    /// Diagnostic sink for recoverable conditions.
    ///
    /// When absent, diagnostics are dropped silently.
    ///
    /// Default: `None`
    pub logger: Option<Arc<dyn Logger>>,

    /// Timeout applied to each individual network operation.
    ///
    /// Default: 8000 ms
    pub timeout: Duration,

    /// Confirm inferred URLs with a lightweight existence probe.
    ///
    /// When disabled, URL inference returns the arithmetic candidate
    /// unconditionally.
    ///
    /// Default: `true`
    pub verify_exists: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            methods: Method::DEFAULT_ORDER.to_vec(),
            class_name_regex: None,
            logger: None,
            timeout: DEFAULT_TIMEOUT,
            verify_exists: true,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("methods", &self.methods)
            .field("class_name_regex", &self.class_name_regex)
            .field("logger", &self.logger.as_ref().map(|_| "<sink>"))
            .field("timeout", &self.timeout)
            .field("verify_exists", &self.verify_exists)
            .finish()
    }
}

impl Options {
    /// Report a recoverable oddity in the input.
    pub(crate) fn warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(LogLevel::Warn, message);
        }
    }

    /// Report a transport-level fault.
    pub(crate) fn error(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(LogLevel::Error, message);
        }
    }
}
