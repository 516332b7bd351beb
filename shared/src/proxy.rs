use chrono::Utc;
use gamedex_igdb::query::{GameFilters, ListType};
use gamedex_igdb::twitch::IgdbCredentials;
use gamedex_igdb::{api, images, query, twitch, ProxyError};
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::AppState;

/// Proxy request body. A present `query` is forwarded verbatim, even when
/// empty; the structured fields only matter when it is absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub endpoint: String,
    pub query: Option<String>,
    pub search: Option<String>,
    pub filters: Option<GameFilters>,
    pub list_type: Option<ListType>,
}

/// Handle one IGDB proxy call: validate, build the query, fetch an app
/// token, run the query, upgrade image URLs in the response.
pub async fn handle_igdb_request(state: &AppState, body: &Body) -> Result<Response<Body>, Error> {
    // Config is checked before the body so a misdeployed function fails
    // loudly no matter what the client sent.
    let credentials = match state.credentials.as_ref() {
        Some(credentials) => credentials,
        None => {
            tracing::error!("Rejecting proxy call, IGDB credentials not configured");
            return error_response(&ProxyError::Configuration);
        }
    };

    let body_str = match body {
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    };

    let request: ProxyRequest = match serde_json::from_str(body_str) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("Failed to parse proxy request: {}", e);
            return error_response(&ProxyError::BadRequest(format!(
                "Invalid request body: {}",
                e
            )));
        }
    };

    if request.endpoint.is_empty() {
        return error_response(&ProxyError::BadRequest("endpoint is required".to_string()));
    }

    match run_pipeline(state, credentials, &request).await {
        Ok(data) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&data)?.into())
            .map_err(Box::new)?),
        Err(e) => error_response(&e),
    }
}

async fn run_pipeline(
    state: &AppState,
    credentials: &IgdbCredentials,
    request: &ProxyRequest,
) -> gamedex_igdb::Result<Value> {
    let igdb_query = match &request.query {
        Some(raw) => raw.clone(),
        None => query::build_query(
            request.search.as_deref(),
            request.list_type.unwrap_or_default(),
            request.filters.as_ref(),
            &state.query_policy,
            Utc::now().timestamp(),
        ),
    };

    tracing::info!("Proxying IGDB query to endpoint: {}", request.endpoint);

    let token = twitch::fetch_app_token(&state.http, &state.twitch_token_url, credentials).await?;
    let data = api::execute_query(
        &state.http,
        &state.igdb_base_url,
        credentials,
        &token,
        &request.endpoint,
        &igdb_query,
    )
    .await?;

    Ok(images::upgrade_image_urls(data, &state.upgrade_policy))
}

/// Renders a pipeline error as the `{error, details?}` JSON shape.
pub fn error_response(error: &ProxyError) -> Result<Response<Body>, Error> {
    let mut payload = json!({ "error": error.to_string() });
    if let Some(details) = error.details() {
        payload["details"] = Value::String(details.to_string());
    }

    Ok(Response::builder()
        .status(error.status_code())
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(&payload)?.into())
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_state() -> AppState {
        AppState {
            credentials: Some(IgdbCredentials {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            }),
            ..AppState::default()
        }
    }

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            other => panic!("expected a text body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_is_rejected_before_anything_else() {
        let state = AppState::default();
        let body = Body::Text(r#"{"endpoint":"games"}"#.to_string());

        let response = handle_igdb_request(&state, &body).await.expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(&response).contains("IGDB credentials not configured"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_bad_request() {
        let state = configured_state();
        let body = Body::Text("{not json".to_string());

        let response = handle_igdb_request(&state, &body).await.expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(&response).contains("Invalid request body"));
    }

    #[tokio::test]
    async fn test_empty_body_is_a_bad_request() {
        let state = configured_state();

        let response = handle_igdb_request(&state, &Body::Empty).await.expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_a_bad_request() {
        let state = configured_state();
        let body = Body::Text(r#"{"search":"Mario"}"#.to_string());

        let response = handle_igdb_request(&state, &body).await.expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload: Value = serde_json::from_str(body_text(&response)).expect("json body");
        assert_eq!(payload["error"], "endpoint is required");
    }

    #[test]
    fn test_request_fields_are_camel_case_on_the_wire() {
        let request: ProxyRequest = serde_json::from_str(
            r#"{"endpoint":"games","listType":"top","filters":{"platformIds":[48]}}"#,
        )
        .expect("request should parse");

        assert_eq!(request.endpoint, "games");
        assert_eq!(request.list_type, Some(ListType::Top));
        let filters = request.filters.expect("filters");
        assert_eq!(filters.platform_ids, Some(vec![48]));
    }

    #[test]
    fn test_unrecognized_list_type_still_parses() {
        let request: ProxyRequest =
            serde_json::from_str(r#"{"endpoint":"games","listType":"weird"}"#)
                .expect("request should parse");
        assert_eq!(request.list_type, Some(ListType::Unknown));
    }

    #[test]
    fn test_error_response_carries_details_when_present() {
        let error = ProxyError::UpstreamApi {
            status: 429,
            body: "slow down".to_string(),
        };
        let response = error_response(&error).expect("response");

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let payload: Value = serde_json::from_str(body_text(&response)).expect("json body");
        assert_eq!(payload["error"], "IGDB error: 429");
        assert_eq!(payload["details"], "slow down");
    }

    #[test]
    fn test_error_response_omits_absent_details() {
        let response = error_response(&ProxyError::MethodNotAllowed).expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let payload: Value = serde_json::from_str(body_text(&response)).expect("json body");
        assert_eq!(payload["error"], "Method not allowed");
        assert!(payload.get("details").is_none());
    }
}
