// Metrics service - Use case for filtering and aggregating the dataset
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::filter::FilterSpec;
use crate::domain::metrics::{KpiSummary, TopCustomer, format_inr};
use crate::domain::record::{Dataset, Record};
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Select the records matching a filter. Selection only, the dataset is
/// never mutated.
pub fn filter<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> Vec<&'a Record> {
    dataset
        .records
        .iter()
        .filter(|record| spec.matches(record, dataset.reference_date))
        .collect()
}

#[derive(Clone)]
pub struct MetricsService {
    repository: Arc<dyn DatasetRepository>,
}

impl MetricsService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_count(&self) -> usize {
        self.repository.dataset().await.len()
    }

    /// Summary KPIs over the filtered records. An empty selection yields
    /// the all-zero summary.
    pub async fn kpis(&self, spec: &FilterSpec) -> KpiSummary {
        let dataset = self.repository.dataset().await;
        let selected = filter(&dataset, spec);
        tracing::debug!(
            "kpis: selected {} of {} records for {:?}",
            selected.len(),
            dataset.len(),
            spec
        );
        summarize(&selected)
    }

    /// Revenue summed per calendar month, keyed `YYYY-MM` in ascending
    /// order.
    pub async fn monthly_revenue(&self, spec: &FilterSpec) -> BTreeMap<String, f64> {
        let dataset = self.repository.dataset().await;
        let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
        for record in filter(&dataset, spec) {
            let month = format!("{:04}-{:02}", record.date.year(), record.date.month());
            *monthly.entry(month).or_insert(0.0) += record.revenue_inr;
        }
        monthly
    }

    /// Revenue summed per SKU.
    pub async fn revenue_by_sku(&self, spec: &FilterSpec) -> BTreeMap<String, f64> {
        let dataset = self.repository.dataset().await;
        let mut by_sku: BTreeMap<String, f64> = BTreeMap::new();
        for record in filter(&dataset, spec) {
            *by_sku.entry(record.sku.clone()).or_insert(0.0) += record.revenue_inr;
        }
        by_sku
    }

    /// Unique customer count per industry.
    pub async fn customers_by_industry(&self, spec: &FilterSpec) -> BTreeMap<String, usize> {
        let dataset = self.repository.dataset().await;
        let mut by_industry: BTreeMap<String, HashSet<&str>> = BTreeMap::new();
        for record in filter(&dataset, spec) {
            by_industry
                .entry(record.industry.clone())
                .or_default()
                .insert(record.customer_id.as_str());
        }
        by_industry
            .into_iter()
            .map(|(industry, customers)| (industry, customers.len()))
            .collect()
    }

    /// Top `n` customers by summed revenue. The sort is stable and
    /// descending, so revenue ties keep first-appearance order.
    pub async fn top_customers(&self, spec: &FilterSpec, n: usize) -> Vec<TopCustomer> {
        let dataset = self.repository.dataset().await;
        let selected = filter(&dataset, spec);

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut accums: Vec<CustomerAccum> = Vec::new();
        for record in &selected {
            match index.get(record.customer_id.as_str()) {
                Some(&slot) => accums[slot].add(record),
                None => {
                    index.insert(record.customer_id.as_str(), accums.len());
                    accums.push(CustomerAccum::start(record));
                }
            }
        }

        accums.sort_by(|a, b| b.revenue_inr.total_cmp(&a.revenue_inr));
        accums.truncate(n);
        accums.into_iter().map(CustomerAccum::finish).collect()
    }
}

struct CustomerAccum {
    customer_id: String,
    customer_name: String,
    industry: String,
    sku: String,
    region: String,
    revenue_inr: f64,
    days_active_total: u64,
    records: usize,
}

impl CustomerAccum {
    fn start(record: &Record) -> Self {
        Self {
            customer_id: record.customer_id.clone(),
            customer_name: record.customer_name.clone(),
            industry: record.industry.clone(),
            sku: record.sku.clone(),
            region: record.region.clone(),
            revenue_inr: record.revenue_inr,
            days_active_total: record.days_active as u64,
            records: 1,
        }
    }

    fn add(&mut self, record: &Record) {
        self.revenue_inr += record.revenue_inr;
        self.days_active_total += record.days_active as u64;
        self.records += 1;
    }

    fn finish(self) -> TopCustomer {
        TopCustomer {
            revenue_display: format_inr(self.revenue_inr),
            avg_days_active: self.days_active_total as f64 / self.records as f64,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            industry: self.industry,
            sku: self.sku,
            region: self.region,
            revenue_inr: self.revenue_inr,
        }
    }
}

fn summarize(records: &[&Record]) -> KpiSummary {
    let total_revenue: f64 = records.iter().map(|r| r.revenue_inr).sum();
    let customers: HashSet<&str> = records.iter().map(|r| r.customer_id.as_str()).collect();
    let total_customers = customers.len();
    let avg_revenue_per_customer = if total_customers > 0 {
        total_revenue / total_customers as f64
    } else {
        0.0
    };

    KpiSummary {
        records: records.len(),
        total_revenue,
        total_customers,
        avg_revenue_per_customer,
        total_downloads: records.iter().map(|r| r.downloads as u64).sum(),
        total_searches: records.iter().map(|r| r.searches as u64).sum(),
        active_users: records.iter().filter(|r| r.activity.is_active()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::Period;
    use crate::domain::record::Activity;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FixedRepository {
        dataset: Arc<Dataset>,
    }

    #[async_trait]
    impl DatasetRepository for FixedRepository {
        async fn dataset(&self) -> Arc<Dataset> {
            self.dataset.clone()
        }
    }

    fn record(
        date: NaiveDate,
        customer: &str,
        industry: &str,
        sku: &str,
        revenue: f64,
        days_active: u32,
    ) -> Record {
        Record {
            date,
            customer_id: customer.to_string(),
            customer_name: format!("{customer} Inc"),
            industry: industry.to_string(),
            sku: sku.to_string(),
            region: "North".to_string(),
            revenue_inr: revenue,
            days_active,
            downloads: 10,
            searches: 20,
            activity: Activity::classify(days_active),
        }
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service() -> MetricsService {
        let reference = day(2025, 6, 15);
        let records = vec![
            record(day(2025, 1, 10), "CUST_0001", "Technology", "Starter", 200_000.0, 25),
            record(day(2025, 2, 5), "CUST_0002", "Finance", "Enterprise", 900_000.0, 0),
            record(day(2025, 2, 20), "CUST_0001", "Technology", "Starter", 300_000.0, 12),
            record(day(2024, 11, 3), "CUST_0003", "Retail", "Premium", 700_000.0, 4),
        ];
        let dataset = Arc::new(Dataset::new(records, reference));
        MetricsService::new(Arc::new(FixedRepository { dataset }))
    }

    #[test]
    fn test_filter_is_a_subset() {
        let reference = day(2025, 6, 15);
        let dataset = Dataset::new(
            vec![
                record(day(2025, 3, 1), "CUST_0001", "Technology", "Starter", 1.0, 1),
                record(day(2024, 3, 1), "CUST_0002", "Finance", "Premium", 2.0, 2),
            ],
            reference,
        );

        for spec in [
            FilterSpec::default(),
            FilterSpec::from_params(Some("all_time"), Some("Premium"), None),
            FilterSpec::from_params(Some("last_year"), None, Some("Finance")),
            FilterSpec::from_params(None, Some("NoSuchSku"), None),
        ] {
            let selected = filter(&dataset, &spec);
            assert!(selected.len() <= dataset.len());
            assert!(selected.iter().all(|r| dataset.records.contains(*r)));
        }
    }

    #[tokio::test]
    async fn test_kpis_current_year() {
        let kpis = service().kpis(&FilterSpec::default()).await;
        assert_eq!(kpis.records, 3);
        assert_eq!(kpis.total_revenue, 1_400_000.0);
        assert_eq!(kpis.total_customers, 2);
        assert_eq!(kpis.avg_revenue_per_customer, 700_000.0);
        assert_eq!(kpis.active_users, 2);
    }

    #[tokio::test]
    async fn test_unknown_industry_yields_zero_summary() {
        let spec = FilterSpec::from_params(None, None, Some("NonexistentIndustry"));
        let kpis = service().kpis(&spec).await;
        assert_eq!(kpis, KpiSummary::default());
    }

    #[tokio::test]
    async fn test_monthly_revenue_is_ordered_and_deterministic() {
        let svc = service();
        let spec = FilterSpec::from_params(Some("all_time"), None, None);
        let first = svc.monthly_revenue(&spec).await;
        let second = svc.monthly_revenue(&spec).await;
        assert_eq!(first, second);

        let months: Vec<&String> = first.keys().collect();
        assert_eq!(months, vec!["2024-11", "2025-01", "2025-02"]);
        assert_eq!(first["2025-02"], 1_200_000.0);
    }

    #[tokio::test]
    async fn test_customers_by_industry_counts_unique() {
        let svc = service();
        let by_industry = svc
            .customers_by_industry(&FilterSpec::default())
            .await;
        assert_eq!(by_industry["Technology"], 1);
        assert_eq!(by_industry["Finance"], 1);
        assert!(!by_industry.contains_key("Retail"));
    }

    #[tokio::test]
    async fn test_top_customers_ties_keep_first_appearance_order() {
        let reference = day(2025, 6, 15);
        let records = vec![
            record(day(2025, 1, 1), "CUST_0005", "Retail", "Starter", 500.0, 1),
            record(day(2025, 1, 2), "CUST_0006", "Finance", "Starter", 500.0, 1),
            record(day(2025, 1, 3), "CUST_0007", "Technology", "Starter", 900.0, 1),
        ];
        let dataset = Arc::new(Dataset::new(records, reference));
        let svc = MetricsService::new(Arc::new(FixedRepository { dataset }));

        let top = svc.top_customers(&FilterSpec::default(), 3).await;
        assert_eq!(top[0].customer_id, "CUST_0007");
        assert_eq!(top[1].customer_id, "CUST_0005");
        assert_eq!(top[2].customer_id, "CUST_0006");
    }

    #[tokio::test]
    async fn test_top_customers_sums_per_customer() {
        let top = service()
            .top_customers(&FilterSpec::from_params(Some("all_time"), None, None), 2)
            .await;
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].customer_id, "CUST_0002");
        assert_eq!(top[1].customer_id, "CUST_0003");
        assert_eq!(top[0].revenue_display, "₹9.00 L");
    }

    #[tokio::test]
    async fn test_period_filter_excludes_last_year() {
        let spec = FilterSpec {
            period: Period::LastYear,
            ..FilterSpec::default()
        };
        let kpis = service().kpis(&spec).await;
        assert_eq!(kpis.records, 1);
        assert_eq!(kpis.total_revenue, 700_000.0);
    }
}
