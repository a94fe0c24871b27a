// Dashboard service - Use case for assembling the dashboard page
use crate::application::chart_service::ChartService;
use crate::application::metrics_service::MetricsService;
use crate::domain::chart::ChartKind;
use crate::domain::dashboard::DashboardOverview;
use crate::domain::filter::{FilterSpec, Period};
use crate::domain::metrics::{format_inr, percentage_change};

#[derive(Clone)]
pub struct DashboardService {
    metrics: MetricsService,
    charts: ChartService,
}

impl DashboardService {
    pub fn new(metrics: MetricsService, charts: ChartService) -> Self {
        Self { metrics, charts }
    }

    /// Pre-aggregate everything the dashboard page renders: current-year
    /// KPIs with growth against the last-year slice, the three charts,
    /// and the top-10 customer table.
    pub async fn overview(&self) -> DashboardOverview {
        let current = FilterSpec::default();
        let last_year = FilterSpec {
            period: Period::LastYear,
            ..FilterSpec::default()
        };

        let kpis = self.metrics.kpis(&current).await;
        let previous = self.metrics.kpis(&last_year).await;

        let revenue_growth =
            percentage_change(kpis.total_revenue, previous.total_revenue);
        let customer_growth = percentage_change(
            kpis.total_customers as f64,
            previous.total_customers as f64,
        );

        DashboardOverview {
            revenue_display: format_inr(kpis.total_revenue),
            revenue_growth_display: format!("{revenue_growth:+.1}%"),
            customer_growth_display: format!("{customer_growth:+.1}%"),
            revenue_trend: self.charts.build_chart(ChartKind::RevenueTrend, &current).await,
            sku_distribution: self
                .charts
                .build_chart(ChartKind::SkuDistribution, &current)
                .await,
            industry_customers: self
                .charts
                .build_chart(ChartKind::IndustryCustomers, &current)
                .await,
            top_customers: self.metrics.top_customers(&current, 10).await,
            kpis,
        }
    }
}
