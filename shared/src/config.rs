use std::env;

use gamedex_igdb::api::IGDB_BASE_URL;
use gamedex_igdb::images::UpgradePolicy;
use gamedex_igdb::query::QueryPolicy;
use gamedex_igdb::twitch::{IgdbCredentials, TWITCH_TOKEN_URL};

/// Everything the proxy needs per invocation, built once at startup and
/// shared behind an `Arc`. Base URLs are fields so tests can aim the whole
/// pipeline at a local stub.
#[derive(Debug, Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub credentials: Option<IgdbCredentials>,
    pub twitch_token_url: String,
    pub igdb_base_url: String,
    pub query_policy: QueryPolicy,
    pub upgrade_policy: UpgradePolicy,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: None,
            twitch_token_url: TWITCH_TOKEN_URL.to_string(),
            igdb_base_url: IGDB_BASE_URL.to_string(),
            query_policy: QueryPolicy::default(),
            upgrade_policy: UpgradePolicy::default(),
        }
    }
}

impl AppState {
    /// Reads `IGDB_CLIENT_ID` / `IGDB_CLIENT_SECRET`. Missing or empty
    /// credentials leave `credentials` as `None`; requests are then rejected
    /// per invocation instead of crashing the runtime at startup.
    pub fn from_env() -> Self {
        let credentials = match (env::var("IGDB_CLIENT_ID"), env::var("IGDB_CLIENT_SECRET")) {
            (Ok(client_id), Ok(client_secret))
                if !client_id.is_empty() && !client_secret.is_empty() =>
            {
                Some(IgdbCredentials {
                    client_id,
                    client_secret,
                })
            }
            _ => {
                tracing::warn!("IGDB_CLIENT_ID / IGDB_CLIENT_SECRET not set, proxy calls will be rejected");
                None
            }
        };

        Self {
            credentials,
            ..Self::default()
        }
    }
}
