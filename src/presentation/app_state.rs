// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::dashboard_service::DashboardService;
use crate::application::metrics_service::MetricsService;

#[derive(Clone)]
pub struct AppState {
    pub metrics_service: MetricsService,
    pub chart_service: ChartService,
    pub dashboard_service: DashboardService,
}
