use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_site::config::{PanelConfig, DEFAULT_API_BASE};
use portfolio_site::mappers::language_color_mapper::LanguageColorMapper;
use portfolio_site::models::portfolio::PortfolioContent;
use portfolio_site::panels::profile_data_panel::ProfileDataPanel;
use portfolio_site::services::github_profile_service::GitHubProfileService;
use portfolio_site::{router, templates, AppState};


// Command line interface
#[derive(Parser)]
#[clap(name="portfolio-site", about="Personal portfolio server with a live GitHub panel")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "handle", env = "GITHUB_USERNAME")]
    handle: String,

    #[clap(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[clap(long = "api_base", env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fetch console arguments
    let opt = Opt::parse();

    // Enable console logging, RUST_LOG wins over --log
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=info,mio=info", opt.log_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    // Register templates
    let registry = templates::registry().context("Failed to register templates")?;

    let config = PanelConfig::new(&opt.handle, opt.token, &opt.api_base)?;
    log::info!("{:?}", config);

    // Create reqwest client
    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    // Mount the GitHub panel; its fetch runs in the background
    let service = Arc::new(GitHubProfileService::new(client, config));
    let panel = Arc::new(ProfileDataPanel::mount(service));

    let app_state = Arc::new(AppState {
        registry,
        panel: panel.clone(),
        content: PortfolioContent::default(),
        language_colors: LanguageColorMapper::new(),
        static_dir: opt.static_dir.into(),
    });
    let app = router(app_state);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    tracing::info!(%sock_addr, "Now listening on http://{}", sock_addr);

    axum::Server::try_bind(&sock_addr)
        .with_context(|| format!("Failed to bind {}", sock_addr))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(task) = panel.unmount() {
        if !task.is_finished() {
            log::info!("Shutting down before GitHub responded");
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutdown signal received");
}
