mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use serde_json::Value;
use tokio::time::timeout;
use tower::ServiceExt;

use common::{panel_for, repo_json, user_json};
use portfolio_site::mappers::language_color_mapper::{LanguageColorMapper, FALLBACK_COLOR};
use portfolio_site::models::portfolio::PortfolioContent;
use portfolio_site::panels::profile_data_panel::ProfileDataPanel;
use portfolio_site::{router, templates, AppState};

fn app(panel: Arc<ProfileDataPanel>) -> Router {
    app_serving(panel, "tests/no-such-static-dir")
}

fn app_serving(panel: Arc<ProfileDataPanel>, static_dir: &str) -> Router {
    router(Arc::new(AppState {
        registry: templates::registry().unwrap(),
        panel,
        content: PortfolioContent::default(),
        language_colors: LanguageColorMapper::new(),
        static_dir: static_dir.into(),
    }))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn settled_app(server: &MockServer) -> Router {
    let panel = Arc::new(panel_for(server, None));
    timeout(Duration::from_secs(5), panel.settled()).await.unwrap();
    app(panel)
}

#[tokio::test]
async fn index_renders_every_section_and_the_ready_panel() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200).json_body(user_json());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).json_body(Value::Array(vec![
                repo_json(1, "tide-pool", Some("Rust"), &["alpha", "beta", "gamma", "delta", "epsilon"]),
                repo_json(2, "punch-cards", Some("COBOL"), &[]),
            ]));
        })
        .await;

    let app = settled_app(&server).await;
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    for section in ["id=\"hero\"", "id=\"about\"", "id=\"github\"", "id=\"projects\""] {
        assert!(body.contains(section), "missing {}", section);
    }
    assert!(body.contains("The Octocat"));
    assert!(body.contains("@octocat"));
    assert!(body.contains("Joined Jan 25, 2011"));
    assert!(body.contains("Updated Jan 5, 2024"));
    assert!(body.contains("E-Commerce Platform"));

    let hero = &body[body.find("id=\"hero\"").unwrap()..body.find("id=\"about\"").unwrap()];
    assert!(hero.contains("Crafting exceptional digital experiences with cutting-edge technologies"));
    assert!(hero.contains("href=\"#projects\">View Projects</a>"));
    assert!(hero.contains("href=\"/resume.pdf\">Download CV</a>"));

    let tide_pool = body.find("tide-pool").unwrap();
    let punch_cards = body.find("punch-cards").unwrap();
    assert!(tide_pool < punch_cards);

    assert!(body.contains(">gamma<"));
    assert!(!body.contains(">delta<"));
    assert!(!body.contains(">epsilon<"));

    assert!(body.contains("background-color: #dea584"));
    assert!(body.contains(&format!("background-color: {}", FALLBACK_COLOR)));
}

#[tokio::test]
async fn heatmap_has_a_cell_per_day() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200).json_body(user_json());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).json_body(Value::Array(vec![]));
        })
        .await;

    let app = settled_app(&server).await;
    let (status, fragment) = get(&app, "/github").await;

    assert_eq!(status, StatusCode::OK);
    // 365 heatmap cells plus the 4 legend swatches
    assert_eq!(fragment.matches("class=\"cell level-").count(), 365 + 4);
}

#[tokio::test]
async fn failed_profile_shows_error_and_no_repositories() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).json_body(Value::Array(vec![repo_json(1, "should-not-render", None, &[])]));
        })
        .await;

    let app = settled_app(&server).await;
    let (status, fragment) = get(&app, "/github").await;

    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Error loading GitHub data: Failed to fetch user data (404 Not Found)"));
    assert!(fragment.contains("Please check the username and try again."));
    assert!(!fragment.contains("should-not-render"));
    assert!(!fragment.contains("Recent Repositories"));
}

#[tokio::test]
async fn panel_renders_spinner_while_loading() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200).delay(Duration::from_secs(2)).json_body(user_json());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200).json_body(Value::Array(vec![]));
        })
        .await;

    let panel = Arc::new(panel_for(&server, None));
    let app = app(panel.clone());
    let (status, fragment) = get(&app, "/github").await;

    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("data-loading=\"/github\""));
    assert!(!fragment.contains("The Octocat"));
    assert!(fragment.starts_with("<section id=\"github\""));
    let _ = panel.unmount();
}

#[tokio::test]
async fn panel_script_retries_instead_of_swapping_in_failed_responses() {
    let server = MockServer::start_async().await;
    let app = app_serving(Arc::new(panel_for(&server, None)), "static");

    let (status, script) = get(&app, "/js/portfolio.js").await;
    assert_eq!(status, StatusCode::OK);

    let swap = &script[script.find("function awaitGithubPanel").unwrap()..];
    let ok_check = swap.find("if (!res.ok) throw").unwrap();
    let replace = swap.find("section.outerHTML = html").unwrap();
    assert!(ok_check < replace);
    assert!(swap.contains(".catch(awaitGithubPanel)"));
}

#[tokio::test]
async fn project_modal_and_missing_pages() {
    let server = MockServer::start_async().await;
    let app = app(Arc::new(panel_for(&server, None)));

    let (status, modal) = get(&app, "/projects/3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(modal.contains("Design Portfolio"));
    assert!(modal.contains("An elegant portfolio website"));
    assert!(modal.contains("Live Demo"));

    for uri in ["/projects/99", "/projects/abc", "/projects/-1", "/nope.css"] {
        let (status, page) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(page.contains("404"), "{}", uri);
    }
}
