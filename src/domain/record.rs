// Business record domain models
use chrono::NaiveDate;

/// One synthetic business event: a customer's revenue and product usage
/// for a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    pub industry: String,
    pub sku: String,
    pub region: String,
    pub revenue_inr: f64,
    /// Active days in the trailing 30-day window.
    pub days_active: u32,
    pub downloads: u32,
    pub searches: u32,
    pub activity: Activity,
}

/// Usage classification derived from `days_active`.
/// Dormant means zero active days in the trailing 30-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Heavy,
    Medium,
    Low,
    Dormant,
}

impl Activity {
    pub fn classify(days_active: u32) -> Self {
        match days_active {
            20.. => Activity::Heavy,
            10.. => Activity::Medium,
            1.. => Activity::Low,
            0 => Activity::Dormant,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Activity::Dormant
    }
}

/// The process-lifetime table of records. Generated once at startup,
/// immutable afterwards. `reference_date` anchors the period filters
/// so that "current year" is stable for the life of the dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub reference_date: NaiveDate,
}

impl Dataset {
    pub fn new(records: Vec<Record>, reference_date: NaiveDate) -> Self {
        Self {
            records,
            reference_date,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
