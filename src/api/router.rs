//! Application router.
//!
//! Returns a composable `Router`: the embedded page at `/` and the JSON
//! API nested under `/api/`. Handlers are stateless, so there is no
//! shared state to inject.

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::page;

/// Build the application router.
pub fn app_router() -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/reference", get(endpoints::reference::reference))
        .route("/risk", post(endpoints::risk::estimate));

    Router::new()
        .route("/", get(page::serve_index))
        .nest("/api", api)
        .fallback(not_found)
        // The page is served same-origin; permissive CORS keeps local
        // tooling (curl, dev front-ends) unblocked.
        .layer(CorsLayer::permissive())
}

/// Unknown routes get the structured error body too.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {uri}"))
}
