// KPI domain models and money formatting
use serde::Serialize;

/// Summary KPIs over a filtered dataset. An empty selection yields
/// the all-zero summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KpiSummary {
    pub records: usize,
    pub total_revenue: f64,
    pub total_customers: usize,
    pub avg_revenue_per_customer: f64,
    pub total_downloads: u64,
    pub total_searches: u64,
    pub active_users: usize,
}

/// One row of the top-customers table, revenue summed across the
/// customer's records.
#[derive(Debug, Clone, Serialize)]
pub struct TopCustomer {
    pub customer_id: String,
    pub customer_name: String,
    pub industry: String,
    pub sku: String,
    pub region: String,
    pub revenue_inr: f64,
    pub revenue_display: String,
    pub avg_days_active: f64,
}

/// Format an INR amount compactly: Crores above 1,00,00,000,
/// Lakhs above 1,00,000, plain rupees below.
pub fn format_inr(amount: f64) -> String {
    if amount == 0.0 {
        return "₹0".to_string();
    }
    if amount.abs() >= 10_000_000.0 {
        format!("₹{:.2} Cr", amount / 10_000_000.0)
    } else if amount.abs() >= 100_000.0 {
        format!("₹{:.2} L", amount / 100_000.0)
    } else {
        format!("₹{:.0}", amount)
    }
}

/// Percentage change from `previous` to `current`. A zero baseline
/// reports 100% when anything grew and 0% otherwise.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}
