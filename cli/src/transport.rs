//! `reqwest` transport for the request gateway.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use console_core::net::gateway::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// Sends gateway requests with a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

pub(crate) fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let mut builder = self.client.request(reqwest_method(request.method), &request.url);
        if let Some(credentials) = &request.credentials {
            builder = builder.header(AUTHORIZATION, credentials.basic_auth_header());
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("{} {}: {e}", request.method, request.url)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("{} {}: {e}", request.method, request.url)))?;
        Ok(HttpResponse { status, body })
    }
}
