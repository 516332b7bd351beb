use std::fmt;

use serde::Deserialize;

/// Twitch application credentials shared by the token endpoint and IGDB.
/// Opaque pair; the secret never appears in logs or responses.
#[derive(Clone)]
pub struct IgdbCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for IgdbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgdbCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// The slice of the OAuth2 token response the proxy cares about.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
