// Dashboard page domain model
use super::chart::ChartSpec;
use super::metrics::{KpiSummary, TopCustomer};

/// Everything the dashboard page needs, pre-aggregated: headline KPIs
/// with year-over-year growth, the three charts, and the top-customers
/// table.
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    pub kpis: KpiSummary,
    pub revenue_display: String,
    pub revenue_growth_display: String,
    pub customer_growth_display: String,
    pub revenue_trend: ChartSpec,
    pub sku_distribution: ChartSpec,
    pub industry_customers: ChartSpec,
    pub top_customers: Vec<TopCustomer>,
}
