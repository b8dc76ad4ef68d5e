//! Network collaborators: document retrieval and existence probing.
//!
//! These are thin I/O wrappers around `reqwest`; the detection engine never
//! touches the network itself. Every failure here degrades: retrieval returns
//! a typed error, probing returns `false`.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

static CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

/// Lightweight existence probe for candidate URLs.
///
/// Implementations answer "does this URL resolve to a live resource" with
/// HEAD semantics. Any network error or timeout is `false`; probing is
/// best-effort by contract and never retried.
#[async_trait]
pub trait ExistenceProbe: Send + Sync {
    async fn exists(&self, url: &str, timeout: Duration) -> bool;
}

/// [`ExistenceProbe`] issuing a real HEAD request.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe;

#[async_trait]
impl ExistenceProbe for HttpProbe {
    async fn exists(&self, url: &str, timeout: Duration) -> bool {
        match CLIENT.head(url).timeout(timeout).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Probe a URL for existence with the configured timeout.
pub async fn check_exists(url: &str, options: &Options) -> bool {
    HttpProbe.exists(url, options.timeout).await
}

fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence == "text/html" || essence == "application/xhtml+xml"
}

/// GET a URL and return its markup.
///
/// Rejects non-2xx responses and responses that are not HTML, with a logged
/// warning either way. Network-level faults are logged as errors.
pub async fn fetch_document(url: &str, options: &Options) -> Result<String> {
    if Url::parse(url).is_err() {
        options.warn(&format!("cannot fetch {url:?}: not a valid URL"));
        return Err(Error::InvalidUrl(url.to_string()));
    }

    let response = CLIENT
        .get(url)
        .timeout(options.timeout)
        .send()
        .await
        .map_err(|err| {
            options.error(&format!("fetch of {url} failed: {err}"));
            Error::Transport(err.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        options.warn(&format!("fetch of {url} rejected: HTTP {status}"));
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !is_html_content_type(&content_type) {
        options.warn(&format!("fetch of {url} rejected: content type {content_type:?}"));
        return Err(Error::ContentType(content_type));
    }

    response.text().await.map_err(|err| {
        options.error(&format!("reading body of {url} failed: {err}"));
        Error::Transport(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_content_types_accepted() {
        assert!(is_html_content_type("text/html"));
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("TEXT/HTML"));
        assert!(is_html_content_type("application/xhtml+xml"));
    }

    #[test]
    fn non_html_content_types_rejected() {
        assert!(!is_html_content_type("application/json"));
        assert!(!is_html_content_type("text/plain"));
        assert!(!is_html_content_type(""));
        assert!(!is_html_content_type("text/html5"));
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_url_without_network() {
        let result = fetch_document("not a url", &Options::default()).await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
