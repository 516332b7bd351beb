use reqwest::Client;
use serde_json::Value;

use crate::error::{ProxyError, Result};
use crate::twitch::IgdbCredentials;

pub const IGDB_BASE_URL: &str = "https://api.igdb.com/v4";

/// Runs one query against an IGDB endpoint (`games`, `genres`, ...).
///
/// IGDB takes the query language as a plain-text POST body and authenticates
/// with the Twitch client id plus an app bearer token. Upstream error
/// statuses are preserved so the caller can pass them through.
pub async fn execute_query(
    http: &Client,
    base_url: &str,
    credentials: &IgdbCredentials,
    token: &str,
    endpoint: &str,
    query: &str,
) -> Result<Value> {
    let url = format!("{}/{}", base_url, endpoint);

    let response = http
        .post(&url)
        .header("Client-ID", credentials.client_id.as_str())
        .bearer_auth(token)
        .header("Content-Type", "text/plain")
        .body(query.to_string())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("IGDB {} query failed with status {}", endpoint, status);
        return Err(ProxyError::UpstreamApi {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}
