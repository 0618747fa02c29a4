use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use handlebars::Handlebars;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod content;
pub mod controllers;
pub mod decorations;
pub mod error;
pub mod mappers;
pub mod models;
pub mod panels;
pub mod services;
pub mod templates;
pub mod time;
pub mod validators;

use controllers::{assets, github, index, projects};
use mappers::language_color_mapper::LanguageColorMapper;
use models::portfolio::PortfolioContent;
use panels::profile_data_panel::ProfileDataPanel;

pub struct AppState {
    pub registry: Handlebars<'static>,
    pub panel: Arc<ProfileDataPanel>,
    pub content: PortfolioContent,
    pub language_colors: LanguageColorMapper,
    pub static_dir: PathBuf,
}

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/github", get(github::get_github))
        .route("/projects/:id", get(projects::get_project))
        .fallback(assets::get_asset)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
