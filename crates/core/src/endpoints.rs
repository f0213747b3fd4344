//! Backend endpoint resolution.
//!
//! Every connector backend runs a production and a development
//! deployment, and the host a client is served from decides which one
//! it talks to. Unrecognized hosts resolve to the development
//! deployment on purpose, so resolution never fails.

use std::fmt;

/// Mapping of recognized host signals to backend base URLs, with a
/// single default for everything else.
///
/// Lookup compares hosts exactly and case-sensitively, the same way
/// the deployed hosts are configured.
#[derive(Debug, Clone)]
pub struct EndpointMap {
    routes: Vec<(String, String)>,
    default_url: String,
}

impl EndpointMap {
    /// Create a map that resolves every signal to `default_url`.
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            routes: Vec::new(),
            default_url: default_url.into(),
        }
    }

    /// Add a recognized host signal and its base URL.
    pub fn with_route(mut self, signal: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.routes.push((signal.into(), base_url.into()));
        self
    }

    /// Resolve a host signal to a backend base URL.
    ///
    /// Unrecognized signals fall back to the default URL. This is
    /// deliberate policy rather than an error: a client served from an
    /// unknown host talks to the development backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use connector_core::endpoints::EndpointMap;
    ///
    /// let map = EndpointMap::facebook();
    /// assert_eq!(
    ///     map.resolve("facebook-connector.narrative.tools"),
    ///     "https://facebook.narrativeconnectors.com"
    /// );
    /// assert_eq!(
    ///     map.resolve("localhost:8080"),
    ///     "https://facebook-dev.narrativeconnectors.com"
    /// );
    /// ```
    pub fn resolve(&self, host_signal: &str) -> &str {
        self.routes
            .iter()
            .find(|(signal, _)| signal == host_signal)
            .map(|(_, base_url)| base_url.as_str())
            .unwrap_or(&self.default_url)
    }

    /// The base URL unrecognized signals resolve to.
    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// Endpoints for the Facebook connector deployments.
    pub fn facebook() -> Self {
        Self::new("https://facebook-dev.narrativeconnectors.com").with_route(
            "facebook-connector.narrative.tools",
            "https://facebook.narrativeconnectors.com",
        )
    }

    /// Endpoints for the AWS S3 connector deployments.
    pub fn s3() -> Self {
        Self::new("https://aws-s3-dev.narrativeconnectors.com").with_route(
            "s3-connector.narrative.tools",
            "https://aws-s3.narrativeconnectors.com",
        )
    }
}

/// Known connector deployment families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Facebook,
    S3,
}

impl Connector {
    /// The endpoint map for this connector.
    pub fn endpoints(&self) -> EndpointMap {
        match self {
            Self::Facebook => EndpointMap::facebook(),
            Self::S3 => EndpointMap::s3(),
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facebook => write!(f, "facebook"),
            Self::S3 => write!(f, "s3"),
        }
    }
}
