pub mod assets;
pub mod github;
pub mod index;
pub mod projects;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::{Handlebars, RenderError};
use serde::Serialize;

use crate::models::empty::Empty;

#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

/// Wraps an already rendered body in the site layout.
pub fn render_page(registry: &Handlebars<'_>, title: &str, body: String) -> Result<String, RenderError> {
    let data = TemplateViewModel {
        title: title.into(),
        body,
    };
    registry.render("template", &data)
}

pub fn get_error_page(registry: &Handlebars<'_>, status: StatusCode) -> (StatusCode, Html<String>) {
    let name = format!("errors/{}", status.as_u16());
    let page = registry
        .render(&name, &Empty {})
        .and_then(|body| render_page(registry, status.canonical_reason().unwrap_or("Error"), body));

    match page {
        Ok(r) => (status, Html(r)),
        Err(e) => {
            log::error!("Failed to render {}: {}", name, e);
            (status, Html(status.to_string()))
        }
    }
}
