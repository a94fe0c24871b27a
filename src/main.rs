// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::dashboard_service::DashboardService;
use crate::application::metrics_service::MetricsService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sample_data::SampleDataRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, get_chart, get_data, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    // Generate the dataset once and hand it out behind the repository
    // trait (infrastructure layer)
    let today = chrono::Utc::now().date_naive();
    let repository = Arc::new(SampleDataRepository::generate(
        config.dataset.records,
        config.dataset.seed,
        today,
    ));

    // Create services (application layer)
    let metrics_service = MetricsService::new(repository);
    let chart_service = ChartService::new(metrics_service.clone());
    let dashboard_service = DashboardService::new(metrics_service.clone(), chart_service.clone());

    // Create application state
    let state = Arc::new(AppState {
        metrics_service,
        chart_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/data", get(get_data))
        .route("/api/charts", get(get_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    println!("Starting pulse-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
