// Chart service - Use case for building chart specs
use crate::application::metrics_service::MetricsService;
use crate::domain::chart::{ChartKind, ChartSpec, INDUSTRY_PALETTE, SKU_PALETTE};
use crate::domain::filter::FilterSpec;

#[derive(Clone)]
pub struct ChartService {
    metrics: MetricsService,
}

impl ChartService {
    pub fn new(metrics: MetricsService) -> Self {
        Self { metrics }
    }

    /// Build the declarative spec for one chart kind over the filtered
    /// dataset. Total for every kind; unknown kinds are rejected at
    /// parse time.
    pub async fn build_chart(&self, kind: ChartKind, spec: &FilterSpec) -> ChartSpec {
        match kind {
            ChartKind::RevenueTrend => {
                let monthly = self.metrics.monthly_revenue(spec).await;
                let (months, revenue) = monthly.into_iter().unzip();
                ChartSpec::trend_line("Revenue Trend", months, revenue)
            }
            ChartKind::SkuDistribution => {
                let by_sku = self.metrics.revenue_by_sku(spec).await;
                let (labels, values) = by_sku.into_iter().unzip();
                ChartSpec::pie("Revenue by SKU", labels, values, &SKU_PALETTE)
            }
            ChartKind::IndustryCustomers => {
                let by_industry = self.metrics.customers_by_industry(spec).await;
                let (industries, counts) = by_industry
                    .into_iter()
                    .map(|(industry, count)| (industry, count as f64))
                    .unzip();
                ChartSpec::bar("Customers by Industry", industries, counts, &INDUSTRY_PALETTE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_repository::DatasetRepository;
    use crate::domain::chart::Trace;
    use crate::domain::record::{Activity, Dataset, Record};
    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate};
    use std::sync::Arc;

    struct FixedRepository {
        dataset: Arc<Dataset>,
    }

    #[async_trait]
    impl DatasetRepository for FixedRepository {
        async fn dataset(&self) -> Arc<Dataset> {
            self.dataset.clone()
        }
    }

    fn record(date: NaiveDate, sku: &str, industry: &str, revenue: f64) -> Record {
        Record {
            date,
            customer_id: "CUST_0001".to_string(),
            customer_name: "Company_1".to_string(),
            industry: industry.to_string(),
            sku: sku.to_string(),
            region: "North".to_string(),
            revenue_inr: revenue,
            days_active: 5,
            downloads: 0,
            searches: 0,
            activity: Activity::classify(5),
        }
    }

    fn charts() -> ChartService {
        let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let records = vec![
            record(reference.with_month(1).unwrap(), "Starter", "Technology", 100.0),
            record(reference.with_month(1).unwrap(), "Premium", "Finance", 200.0),
            record(reference.with_month(3).unwrap(), "Starter", "Technology", 300.0),
            record(reference.with_month(5).unwrap(), "Enterprise", "Retail", 400.0),
        ];
        let dataset = Arc::new(Dataset::new(records, reference));
        ChartService::new(MetricsService::new(Arc::new(FixedRepository { dataset })))
    }

    #[tokio::test]
    async fn test_revenue_trend_series_covers_distinct_months() {
        let spec = FilterSpec::default();
        let chart = charts().build_chart(ChartKind::RevenueTrend, &spec).await;

        assert_eq!(chart.data.len(), 1);
        match &chart.data[0] {
            Trace::Line { x, y, .. } => {
                assert_eq!(x.len(), 3);
                assert_eq!(y.len(), 3);
                assert_eq!(x[0], "2025-01");
                assert_eq!(y[0], 300.0);
            }
            other => panic!("expected a line trace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sku_distribution_is_a_pie_with_palette() {
        let chart = charts()
            .build_chart(ChartKind::SkuDistribution, &FilterSpec::default())
            .await;

        match &chart.data[0] {
            Trace::Pie { labels, values, marker } => {
                assert_eq!(labels.len(), 3);
                assert_eq!(values.iter().sum::<f64>(), 1000.0);
                assert_eq!(marker.colors.len(), labels.len());
            }
            other => panic!("expected a pie trace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_industry_customers_is_a_bar() {
        let chart = charts()
            .build_chart(ChartKind::IndustryCustomers, &FilterSpec::default())
            .await;

        match &chart.data[0] {
            Trace::Bar { x, y, marker } => {
                assert_eq!(x.len(), 3);
                assert!(y.iter().all(|&count| count == 1.0));
                assert_eq!(marker.color.len(), x.len());
            }
            other => panic!("expected a bar trace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_filter_yields_empty_series() {
        let spec = FilterSpec::from_params(None, None, Some("NonexistentIndustry"));
        let chart = charts().build_chart(ChartKind::RevenueTrend, &spec).await;

        match &chart.data[0] {
            Trace::Line { x, y, .. } => {
                assert!(x.is_empty());
                assert!(y.is_empty());
            }
            other => panic!("expected a line trace, got {other:?}"),
        }
    }
}
