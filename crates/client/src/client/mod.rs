//! HTTP client for connector backends.

pub mod health;

use connector_core::{BearerToken, Connector, RequestContext};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, Result};

/// HTTP client for a connector backend.
///
/// The injected [`RequestContext`] decides the base URL once at
/// construction; its derived headers are read before every outgoing
/// request, so a credential stored through [`login`](Self::login) is
/// attached from the next request on.
#[derive(Debug, Clone)]
pub struct ConnectorClient {
    http: reqwest::Client,
    context: RequestContext,
}

impl ConnectorClient {
    /// Create a client around a prepared request context.
    pub fn new(context: RequestContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            context,
        }
    }

    /// Create from environment.
    ///
    /// Environment variables:
    /// - `CONNECTOR_URL` - explicit base URL, overriding host
    ///   resolution entirely
    /// - `CONNECTOR_HOST` - host signal resolved through the
    ///   connector's endpoint map (unset resolves to the development
    ///   deployment)
    pub fn from_env(connector: Connector) -> Self {
        let context = match std::env::var("CONNECTOR_URL") {
            Ok(base_url) => RequestContext::new(base_url),
            Err(_) => {
                let host_signal = std::env::var("CONNECTOR_HOST").unwrap_or_default();
                RequestContext::for_host(&connector.endpoints(), &host_signal)
            }
        };
        Self::new(context)
    }

    /// Store the bearer credential for subsequent requests.
    ///
    /// Called once per session, after the external login flow hands
    /// over a token. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] when the token is empty.
    pub fn login(&mut self, token: &str) -> Result<()> {
        self.context.set_credential(BearerToken::new(token)?);
        tracing::info!("credential stored, requests are now authenticated");
        Ok(())
    }

    /// The request context this client was built around.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &str {
        self.context.base_url()
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.context.base_url(), path)
    }

    /// Attach the derived headers when a credential is present.
    /// Without one the request goes out unauthenticated and the
    /// endpoint decides whether that is acceptable.
    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.context.headers() {
            Some(headers) => headers
                .iter()
                .fold(request, |request, (name, value)| request.header(name, value)),
            None => request,
        }
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, authenticated = self.context.is_authenticated(), "GET");
        let response = self
            .apply_headers(self.http.get(self.url(path)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(path, authenticated = self.context.is_authenticated(), "POST");
        let response = self
            .apply_headers(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(ClientError::Unauthorized)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound {
                path: response.url().path().to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
