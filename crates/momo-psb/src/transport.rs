//! HTTP transport seam.
//!
//! [`PaymentClient`](crate::PaymentClient) builds a complete [`ApiRequest`]
//! (URL, headers, body) and hands it to a [`Transport`]. [`HttpTransport`] is
//! the reqwest-backed implementation; tests plug in recording transports.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;

use crate::error::MomoError;
use crate::headers::RequestHeaders;
use crate::response::ApiResponse;

/// Request body as it goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

/// A fully assembled outgoing request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: RequestHeaders,
    pub body: RequestBody,
}

impl ApiRequest {
    /// JSON body, if any.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Sends one request and returns the provider's response untouched.
///
/// Implementations must not interpret the status code; non-2xx responses are
/// returned as `Ok`. Only failures to complete the exchange are errors.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, MomoError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, MomoError>> + Send {
        (**self).send(request)
    }
}

/// Transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// reqwest defaults: no request timeout, redirects followed.
    pub fn new() -> Result<Self, MomoError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| MomoError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Use a caller-configured reqwest client (proxies, custom TLS, ...).
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, MomoError> {
        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(pairs) => builder.form(&pairs),
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| MomoError::Transport(format!("request failed: {e}")))?;

        let status = resp.status().as_u16();
        let headers: BTreeMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = resp
            .text()
            .await
            .map_err(|e| MomoError::Transport(format!("failed to read response body: {e}")))?;

        Ok(ApiResponse::new(status, body, headers))
    }
}
