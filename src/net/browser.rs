//! `fetch` transport for the request gateway.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: a stub that reports every request as unsent, so the
//! crate still compiles and unit-tests on the host.

#![allow(clippy::unused_async)]

use console_core::net::gateway::{Gateway, HttpRequest, HttpResponse, Transport, TransportError};

/// Gateway type the console provides through context.
pub type ConsoleGateway = Gateway<BrowserTransport>;

/// Sends requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use console_core::net::gateway::Method;
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Post => Request::post(&request.url),
            };
            let builder = match &request.credentials {
                Some(credentials) => builder.header("Authorization", &credentials.basic_auth_header()),
                None => builder,
            };
            let sent = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| TransportError(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError(format!("{} {}: no browser available", request.method, request.url)))
        }
    }
}
