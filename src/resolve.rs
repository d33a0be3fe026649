//! Share-link resolution over HTTP.
//!
//! Shortened links (`https://share.discohook.app/go/<id>`) answer with a
//! redirect to the full data link. The resolver issues the GET itself with
//! redirects disabled and reads the `Location` header directly.

use std::time::Duration;

use crate::link::{self, DiscohookLink};

/// Default timeout for HTTP requests (10 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout (5 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur while resolving a share link.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("not a Discohook share link")]
    NotAShareLink,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("share link did not redirect (HTTP {status}); it may have expired or been copied incorrectly")]
    NotFound { status: u16 },

    #[error("redirect response carried no Location header")]
    MissingLocation,

    #[error("share link redirected somewhere other than a Discohook data link: {url}")]
    BadDestination { url: String },
}

/// Resolves share links to the data links they redirect to.
pub struct Resolver {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl Resolver {
    /// Create a resolver with default timeouts.
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_timeouts(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a resolver with explicit timeouts.
    pub fn with_timeouts(
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ResolveError> {
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: None,
        })
    }

    /// Create a resolver that sends `/go/<id>` requests to `base_url`
    /// instead of the share host.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: String) -> Result<Self, ResolveError> {
        let mut resolver = Self::new()?;
        resolver.base_url = Some(base_url);
        Ok(resolver)
    }

    /// Resolve a share link to the full data link it redirects to.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotAShareLink` if the input isn't a share
    /// link, `ResolveError::NotFound` if the server answers with anything
    /// other than a redirect, `ResolveError::MissingLocation` or
    /// `ResolveError::BadDestination` if the redirect is malformed, and
    /// `ResolveError::Http` for transport failures.
    pub async fn resolve(&self, share_link: &str) -> Result<String, ResolveError> {
        let id = match link::classify(share_link) {
            Some(DiscohookLink::Share { id }) => id,
            _ => return Err(ResolveError::NotAShareLink),
        };

        let request_url = match &self.base_url {
            Some(base) => format!("{}/go/{}", base.trim_end_matches('/'), id),
            None => share_link.trim().to_string(),
        };

        log::debug!("resolving share link via GET {}", request_url);
        let response = self.http_client.get(&request_url).send().await?;

        let status = response.status();
        if !status.is_redirection() {
            log::warn!("share link did not redirect: HTTP {}", status);
            return Err(ResolveError::NotFound {
                status: status.as_u16(),
            });
        }

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ResolveError::MissingLocation)?;

        match link::classify(location) {
            Some(DiscohookLink::Data { .. }) => Ok(location.to_string()),
            _ => Err(ResolveError::BadDestination {
                url: location.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_resolver() {
        let resolver = Resolver::new().unwrap();
        assert!(resolver.base_url.is_none());
    }

    #[test]
    fn test_with_base_url_sets_override() {
        let resolver = Resolver::with_base_url("http://127.0.0.1:9999".to_string()).unwrap();
        assert_eq!(resolver.base_url.as_deref(), Some("http://127.0.0.1:9999"));
    }

    #[tokio::test]
    async fn test_resolve_rejects_non_share_link() {
        let resolver = Resolver::new().unwrap();
        let result = resolver.resolve("https://discohook.org/?data=abc").await;
        assert!(matches!(result, Err(ResolveError::NotAShareLink)));
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::NotFound { status: 404 };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("expired"));
    }
}
