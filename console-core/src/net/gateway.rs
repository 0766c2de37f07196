//! Request gateway: the one HTTP client every resource wrapper goes through.
//!
//! ARCHITECTURE
//! ============
//! `Gateway` wraps a pluggable [`Transport`] (browser fetch, `reqwest`, or a
//! test double) with two interceptors:
//!
//! - outgoing: attach the stored credentials unless the caller supplied its
//!   own;
//! - incoming: map the outcome to `Result<HttpResponse, ApiError>`, ending
//!   the session on `401`.
//!
//! The gateway keeps no session state. It reads the credential store on
//! every request and reports invalidation through the store's event
//! stream; navigation is the application shell's business.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::GatewayConfig;
use crate::state::auth::{CredentialStore, Credentials, Verifier};
use crate::state::events::SignOutCause;

/// HTTP verbs the device API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        })
    }
}

/// Outgoing request as handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, if any.
    pub body: Option<String>,
    /// Basic-auth pair to send. Filled by the gateway when left empty.
    pub credentials: Option<Credentials>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), body: None, credentials: None }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }

    /// Pin the credentials for this request; the gateway will not replace them.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Raw response as received by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and returns whatever the server answered.
///
/// Non-2xx statuses are *responses*, not errors; only a missing response is
/// a [`TransportError`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Where the credentials on a request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthSource {
    /// The caller pinned them (credential verification).
    Explicit,
    /// Taken from the credential store.
    Session,
    /// Sent unauthenticated.
    Anonymous,
}

/// Shared HTTP client with credential and `401` interceptors.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    config: GatewayConfig,
    transport: T,
    store: CredentialStore,
}

impl<T> Gateway<T> {
    pub fn new(config: GatewayConfig, transport: T, store: CredentialStore) -> Self {
        Self { config, transport, store }
    }

    #[must_use]
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Absolute URL for a resource path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.config.resolve(path)
    }

    fn intercept_request(&self, mut request: HttpRequest) -> (HttpRequest, AuthSource) {
        if request.credentials.is_some() {
            return (request, AuthSource::Explicit);
        }
        match self.store.credentials() {
            Some(credentials) => {
                request.credentials = Some(credentials);
                (request, AuthSource::Session)
            }
            None => (request, AuthSource::Anonymous),
        }
    }

    fn intercept_response(
        &self,
        method: Method,
        url: &str,
        source: AuthSource,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Result<HttpResponse, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                log::error!("{method} {url}: no response: {e}");
                return Err(ApiError::Network(e.0));
            }
        };
        if response.is_success() {
            return Ok(response);
        }
        log::error!("{method} {url}: HTTP {}", response.status);
        if response.status == 401 {
            // A rejected verification attempt says nothing about the stored session.
            if source != AuthSource::Explicit {
                self.store.sign_out_with(SignOutCause::Unauthorized);
            }
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Status { status: response.status, body: response.body })
    }
}

impl<T: Transport> Gateway<T> {
    /// Send `request` through both interceptors.
    ///
    /// # Errors
    ///
    /// Returns the failure unchanged after any session side effect.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let (request, source) = self.intercept_request(request);
        let method = request.method;
        let url = request.url.clone();
        let outcome = self.transport.send(request).await;
        self.intercept_response(method, &url, source, outcome)
    }

    /// `GET` a resource and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns the request failure or [`ApiError::Decode`].
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(HttpRequest::new(Method::Get, self.url(path))).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `PUT` a JSON body. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = HttpRequest::new(Method::Put, self.url(path)).with_json(body)?;
        self.send(request).await.map(drop)
    }

    /// `POST` a JSON body. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = HttpRequest::new(Method::Post, self.url(path)).with_json(body)?;
        self.send(request).await.map(drop)
    }

    /// `POST` without a body.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn post(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpRequest::new(Method::Post, self.url(path))).await.map(drop)
    }
}

impl<T: Transport> Verifier for Gateway<T> {
    async fn verify(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = HttpRequest::new(Method::Get, self.url("auth")).with_credentials(credentials.clone());
        self.send(request).await.map(drop)
    }
}
