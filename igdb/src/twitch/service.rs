use reqwest::Client;

use super::model::{IgdbCredentials, TokenResponse};
use crate::error::{ProxyError, Result};

pub const TWITCH_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// Fetches an app access token via the OAuth2 client-credentials grant.
///
/// One token per proxy invocation; nothing is cached. The token URL is a
/// parameter so tests can point this at a local stub.
pub async fn fetch_app_token(
    http: &Client,
    token_url: &str,
    credentials: &IgdbCredentials,
) -> Result<String> {
    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    let response = http.post(token_url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Twitch token request rejected with status {}", status);
        return Err(ProxyError::UpstreamAuth {
            status: status.as_u16(),
            body,
        });
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
