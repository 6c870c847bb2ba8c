//! The estimator page (self-contained, no external resources).
//!
//! Embedded at compile time so the binary is a single artifact.

use axum::response::Html;

const INDEX_PAGE_HTML: &str = include_str!("../../resources/index.html");

/// `GET /` — serve the estimator page.
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_PAGE_HTML)
}
