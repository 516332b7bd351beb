use std::sync::Arc;

use gamedex_igdb::ProxyError;
use gamedex_shared::{proxy, AppState};
use lambda_http::{
    http::{HeaderValue, Method, StatusCode},
    Body, Error, Request, Response,
};

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    resp
}

fn finalize_response(resp: Result<Response<Body>, Error>) -> Result<Response<Body>, Error> {
    resp.map(with_cors_headers)
}

/// Main Lambda handler - one IGDB proxy route, switched on the method
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!("🎮 IGDB proxy invoked - Method: {}", method);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    if method != Method::POST {
        tracing::warn!("⚠️ Rejecting {} request - only POST is served", method);
        return finalize_response(proxy::error_response(&ProxyError::MethodNotAllowed));
    }

    finalize_response(proxy::handle_igdb_request(&state, event.body()).await)
}
