use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::RenderError;

use crate::decorations;
use crate::mappers::github_profile_mapper;
use crate::models::empty::Empty;
use crate::models::fetch_state::FetchState;
use crate::models::panel_view::PanelView;
use crate::AppState;

/// Renders the GitHub section for whatever state the panel is in right now.
pub fn render_panel(state: &AppState) -> Result<String, RenderError> {
    let snapshot = state.panel.state();
    let heatmap = match snapshot {
        FetchState::Ready { .. } => decorations::contribution_heatmap(&mut rand::thread_rng()),
        _ => Vec::new(),
    };

    let view = github_profile_mapper::to_panel_view(&snapshot, &state.language_colors, heatmap);
    let name = view.template_name();
    match &view {
        PanelView::Loading => state.registry.render(name, &Empty {}),
        PanelView::Error(vm) => state.registry.render(name, vm),
        PanelView::Ready(vm) => state.registry.render(name, vm),
    }
}

#[axum_macros::debug_handler]
pub async fn get_github(State(state): State<Arc<AppState>>) -> Response {
    match render_panel(&state) {
        Ok(fragment) => Html(fragment).into_response(),
        Err(e) => {
            log::error!("Failed to render GitHub panel: {}", e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}
