use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::RenderError;
use serde::Serialize;

use crate::decorations::{self, CodeSnippet, Particle, PARTICLE_COUNT};
use crate::models::portfolio::PortfolioContent;
use crate::time;
use crate::AppState;

#[derive(Debug, Serialize)]
struct IndexViewModel<'a> {
    content: &'a PortfolioContent,
    github_panel: String,
    particles: Vec<Particle>,
    snippets: Vec<CodeSnippet>,
    year: i32,
}

#[axum_macros::debug_handler]
pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    match render_index(&state) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to render index: {}", e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

fn render_index(state: &AppState) -> Result<String, RenderError> {
    let data = IndexViewModel {
        content: &state.content,
        github_panel: super::github::render_panel(state)?,
        particles: decorations::particles(&mut rand::thread_rng(), PARTICLE_COUNT),
        snippets: decorations::code_snippets(),
        year: time::current_year(),
    };

    let body = state.registry.render("index", &data)?;
    super::render_page(&state.registry, state.content.hero.name, body)
}
