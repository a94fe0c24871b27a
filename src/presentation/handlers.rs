// HTTP request handlers
use crate::domain::chart::{ChartKind, ChartSpec};
use crate::domain::filter::FilterSpec;
use crate::domain::metrics::{KpiSummary, TopCustomer};
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_dashboard_page;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FilterQuery {
    pub period: Option<String>,
    pub sku: Option<String>,
    pub industry: Option<String>,
}

impl FilterQuery {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec::from_params(
            self.period.as_deref(),
            self.sku.as_deref(),
            self.industry.as_deref(),
        )
    }
}

#[derive(Deserialize)]
pub struct ChartQuery {
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    pub period: Option<String>,
    pub sku: Option<String>,
    pub industry: Option<String>,
}

/// Filters echoed back with `None` rendered as "all".
#[derive(Serialize)]
pub struct AppliedFilters {
    pub period: &'static str,
    pub sku: String,
    pub industry: String,
}

impl AppliedFilters {
    fn from_spec(spec: &FilterSpec) -> Self {
        Self {
            period: spec.period.as_str(),
            sku: spec.sku.clone().unwrap_or_else(|| "all".to_string()),
            industry: spec.industry.clone().unwrap_or_else(|| "all".to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct DataResponse {
    pub filters: AppliedFilters,
    pub summary: KpiSummary,
    pub top_customers: Vec<TopCustomer>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records = state.metrics_service.record_count().await;
    Json(json!({
        "status": "healthy",
        "records": records,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Render the dashboard page
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let overview = state.dashboard_service.overview().await;
    match render_dashboard_page(&overview) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to render dashboard page: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Summary KPIs and top customers for the filtered dataset
pub async fn get_data(
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<DataResponse> {
    let spec = query.to_spec();
    let summary = state.metrics_service.kpis(&spec).await;
    let top_customers = state.metrics_service.top_customers(&spec, 10).await;

    Json(DataResponse {
        filters: AppliedFilters::from_spec(&spec),
        summary,
        top_customers,
    })
}

/// Chart spec for one of the fixed chart kinds
pub async fn get_chart(
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartSpec>, ApiError> {
    let kind: ChartKind = query
        .chart_type
        .as_deref()
        .unwrap_or("revenue_trend")
        .parse()?;
    let spec = FilterSpec::from_params(
        query.period.as_deref(),
        query.sku.as_deref(),
        query.industry.as_deref(),
    );

    Ok(Json(state.chart_service.build_chart(kind, &spec).await))
}
