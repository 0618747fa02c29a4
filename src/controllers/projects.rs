use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::validators;
use crate::AppState;

/// Modal body for one project card; unknown ids get the 404 page.
#[axum_macros::debug_handler]
pub async fn get_project(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let project = if validators::is_project_id(&id) {
        id.parse::<u32>().ok().and_then(|id| state.content.project(id))
    } else {
        None
    };

    let Some(project) = project else {
        log::info!("No project with id {}", id);
        return super::get_error_page(&state.registry, StatusCode::NOT_FOUND).into_response();
    };

    match state.registry.render("projects/modal", project) {
        Ok(fragment) => Html(fragment).into_response(),
        Err(e) => {
            log::error!("Failed to render project {}: {}", project.id, e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}
