//! Shared HTTP plumbing for the adapters: one way to build a client and one
//! way to turn a response into either a decoded body or a `ProviderError`.

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::adapter::ProviderError;
use super::types::AdapterConfig;

const USER_AGENT: &str = concat!("explorer/", env!("CARGO_PKG_VERSION"));

/// Builds the reqwest client for an adapter, applying the optional deadline.
pub fn build_client(config: &AdapterConfig) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|e| {
        warn!("Falling back to default HTTP client: {}", e);
        reqwest::Client::new()
    })
}

/// Sends a prepared request and decodes a JSON body.
///
/// Non-2xx statuses become `ProviderError::Api` carrying the response text.
pub async fn send_json<T: DeserializeOwned>(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = response.status();
    debug!("{} response status: {}", provider, status);

    if !status.is_success() {
        let err_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!("{} API error: {} - {}", provider, status.as_u16(), err_body);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: err_body,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| {
        warn!("{} returned an undecodable body: {}", provider, e);
        ProviderError::Parse(e.to_string())
    })
}

/// Strips HTML tags from provider summaries (TVMaze ships `<p>...</p>`).
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
