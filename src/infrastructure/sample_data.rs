// Sample dataset generation and the in-memory repository
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::record::{Activity, Dataset, Record};
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Education",
    "Government",
    "Consulting",
];

pub const SKUS: [&str; 4] = ["Starter", "Professional", "Enterprise", "Premium"];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

const CUSTOMER_POOL: usize = 150;

/// Records span the trailing three years ending at the reference date.
const WINDOW_DAYS: i64 = 1095;

/// Seasonal revenue weighting: Q4 peaks on year-end budget cycles,
/// Q1 dips.
const MONTH_FACTOR: [f64; 12] = [
    0.85, 0.85, 0.90, 0.95, 1.00, 1.00, 1.00, 1.05, 1.05, 1.15, 1.20, 1.30,
];

const REVENUE_MIN: f64 = 100_000.0;
const REVENUE_MAX: f64 = 5_000_000.0;

/// Generate `n` plausible business records. Deterministic for a given
/// seed and reference date; always succeeds.
pub fn generate(n: usize, seed: u64, today: NaiveDate) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(n);

    for _ in 0..n {
        let date = today - Duration::days(rng.gen_range(0..WINDOW_DAYS));
        let customer = rng.gen_range(0..CUSTOMER_POOL);
        let base = rng.gen_range(REVENUE_MIN..REVENUE_MAX);
        let jitter = rng.gen_range(0.9..1.1);
        let revenue_inr = round2(base * MONTH_FACTOR[date.month0() as usize] * jitter);
        let days_active = rng.gen_range(0..=30);

        records.push(Record {
            date,
            customer_id: format!("CUST_{:04}", customer + 1),
            customer_name: format!("Company_{}", customer + 1),
            industry: INDUSTRIES[rng.gen_range(0..INDUSTRIES.len())].to_string(),
            sku: SKUS[rng.gen_range(0..SKUS.len())].to_string(),
            region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
            revenue_inr,
            days_active,
            downloads: rng.gen_range(0..=500),
            searches: rng.gen_range(0..=800),
            activity: Activity::classify(days_active),
        });
    }

    Dataset::new(records, today)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Repository backed by a dataset generated once at construction.
pub struct SampleDataRepository {
    dataset: Arc<Dataset>,
}

impl SampleDataRepository {
    pub fn generate(n: usize, seed: u64, today: NaiveDate) -> Self {
        let dataset = generate(n, seed, today);
        tracing::info!(
            "generated {} sample records over the {} days ending {}",
            dataset.len(),
            WINDOW_DAYS,
            today
        );
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

#[async_trait]
impl DatasetRepository for SampleDataRepository {
    async fn dataset(&self) -> Arc<Dataset> {
        self.dataset.clone()
    }
}
