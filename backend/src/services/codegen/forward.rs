use crate::config::HostConfig;
use crate::error::{HostError, Result};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use log::{debug, info};

/// Shared client for the code-generation service, injected as `web::Data`.
pub struct Relay {
    client: reqwest::Client,
    upstream_base: String,
}

impl Relay {
    pub fn new(config: &HostConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Relay {
            client,
            upstream_base: config.upstream_base(),
        })
    }

    /// Upstream URL for a local path (with query) under the API prefix.
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.upstream_base, path_and_query)
    }

    /// Sends `req` with `body` upstream and converts the answer back.
    pub async fn forward(&self, req: &HttpRequest, body: web::Bytes) -> Result<HttpResponse> {
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| req.path());
        let url = self.upstream_url(path_and_query);

        let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
            .map_err(|e| HostError::Upstream(e.to_string()))?;
        debug!("{} {} ({} bytes)", method, url, body.len());

        let mut upstream = self.client.request(method, &url).body(body.to_vec());
        if let Some(content_type) = req
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            upstream = upstream.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        let response = upstream
            .send()
            .await
            .map_err(|e| HostError::Upstream(format!("{}: {}", url, e)))?;

        let status =
            StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        info!("{} {} -> {}", req.method(), req.path(), status.as_u16());

        let mut builder = HttpResponse::build(status);
        if let Some(content_type) = content_type {
            builder.content_type(content_type);
        }
        Ok(builder.body(bytes.to_vec()))
    }
}

/// HTTP handler wrapper that relays any request under the API prefix.
///
/// - On success: the upstream response as received.
/// - On failure: `502 Bad Gateway` with `{"error": ...}`.
pub(crate) async fn process(
    req: HttpRequest,
    body: web::Bytes,
    relay: web::Data<Relay>,
) -> impl Responder {
    match relay.forward(&req, body).await {
        Ok(response) => response,
        Err(e) => e.error_response(),
    }
}
