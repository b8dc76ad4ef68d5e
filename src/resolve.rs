//! Href extraction and base-URL resolution.
//!
//! Malformed hrefs are everywhere in real-world markup; resolution failure is
//! a per-occurrence miss with one logged warning, never a fatal error.

use url::Url;

use crate::attr::extract_attribute;
use crate::options::Options;

/// Extract the `href` from a tag-attribute substring and resolve it against
/// `base_url`.
///
/// Relative paths, protocol-relative, scheme-relative and fragment-only
/// references all resolve per standard URL rules. A missing `href` is a
/// silent miss; an unresolvable href or unparseable base logs a warning
/// naming both and yields a miss.
#[must_use]
pub(crate) fn resolve_href(attrs: &str, base_url: &str, options: &Options) -> Option<String> {
    let href = extract_attribute(attrs, "href")?;

    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(err) => {
            options.warn(&format!(
                "cannot resolve href {href:?}: base URL {base_url:?} is invalid ({err})"
            ));
            return None;
        }
    };

    match base.join(href.trim()) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(err) => {
            options.warn(&format!(
                "cannot resolve href {href:?} against base {base_url:?} ({err})"
            ));
            None
        }
    }
}
