use std::sync::Arc;

use axum::body::{boxed, Body};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::AppState;

pub async fn get_asset(State(state): State<Arc<AppState>>, req: Request<Body>) -> Response {
    match ServeDir::new(&state.static_dir).oneshot(req).await {
        Ok(res) if res.status() == StatusCode::NOT_FOUND => {
            super::get_error_page(&state.registry, StatusCode::NOT_FOUND).into_response()
        }
        Ok(res) => res.map(boxed),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("error: {err}")).into_response(),
    }
}
