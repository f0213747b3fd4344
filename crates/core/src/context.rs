//! Request context shared with the networking layer.

use std::collections::HashMap;

use crate::auth::{BearerToken, AUTHORIZATION_HEADER};
use crate::endpoints::EndpointMap;

/// Holds the resolved backend base URL and the current credential.
///
/// The base URL is fixed at construction and there is no API to change
/// it afterwards. The credential starts absent and is set once the
/// external login flow completes; the derived header map exists exactly
/// when a credential does.
///
/// A context is plain owned data: the networking collaborator it is
/// injected into mutates it through `&mut self` and reads it through
/// `&self`, so a read of [`headers`](Self::headers) sequenced after
/// [`set_credential`](Self::set_credential) always observes the new
/// credential.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base_url: String,
    credential: Option<BearerToken>,
    headers: Option<HashMap<String, String>>,
}

impl RequestContext {
    /// Create a context for an explicitly chosen base URL, with no
    /// credential set.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credential: None,
            headers: None,
        }
    }

    /// Create a context by resolving a host signal through an endpoint
    /// map.
    ///
    /// This is the only place environment-derived input enters the
    /// core: the caller reads the signal from wherever it lives and
    /// passes it in, keeping resolution deterministic and testable.
    pub fn for_host(endpoints: &EndpointMap, host_signal: &str) -> Self {
        Self::new(endpoints.resolve(host_signal))
    }

    /// The backend base URL this context was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the credential and regenerate the derived header map.
    ///
    /// Last write wins: a previously stored credential is overwritten.
    pub fn set_credential(&mut self, token: BearerToken) {
        let mut headers = HashMap::new();
        headers.insert(AUTHORIZATION_HEADER.to_string(), token.header_value());
        self.headers = Some(headers);
        self.credential = Some(token);
    }

    /// The derived header map, or `None` when no credential has been
    /// set.
    ///
    /// Callers decide what `None` means for them: send the request
    /// unauthenticated or fail fast. The context enforces neither.
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Whether a credential has been set.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> BearerToken {
        BearerToken::new(value).unwrap()
    }

    #[test]
    fn headers_absent_before_any_credential() {
        let context = RequestContext::new("https://localhost:9002");
        assert!(context.headers().is_none());
        assert!(!context.is_authenticated());
    }

    #[test]
    fn set_credential_derives_authorization_header() {
        let mut context = RequestContext::new("https://localhost:9002");
        context.set_credential(token("t-abc"));

        let headers = context.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION_HEADER], "Bearer t-abc");
        assert!(context.is_authenticated());
    }

    #[test]
    fn setting_same_credential_twice_is_idempotent() {
        let mut context = RequestContext::new("https://localhost:9002");
        context.set_credential(token("t-abc"));
        let first = context.headers().unwrap().clone();

        context.set_credential(token("t-abc"));
        assert_eq!(context.headers().unwrap(), &first);
    }

    #[test]
    fn latest_credential_wins() {
        let mut context = RequestContext::new("https://localhost:9002");
        context.set_credential(token("t-first"));
        context.set_credential(token("t-second"));

        let headers = context.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION_HEADER], "Bearer t-second");
        assert!(!headers[AUTHORIZATION_HEADER].contains("t-first"));
    }

    #[test]
    fn base_url_survives_credential_mutation() {
        let mut context = RequestContext::for_host(
            &EndpointMap::facebook(),
            "facebook-connector.narrative.tools",
        );
        assert_eq!(context.base_url(), "https://facebook.narrativeconnectors.com");

        context.set_credential(token("t-abc"));
        assert_eq!(context.base_url(), "https://facebook.narrativeconnectors.com");
    }

    #[test]
    fn for_host_falls_back_to_default_deployment() {
        let context = RequestContext::for_host(&EndpointMap::facebook(), "localhost:8080");
        assert_eq!(
            context.base_url(),
            "https://facebook-dev.narrativeconnectors.com"
        );
    }
}
