// Dashboard page rendering - static template with injected aggregates
use crate::domain::dashboard::DashboardOverview;

const DASHBOARD_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Pulse Executive Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
body { font-family: Arial, sans-serif; margin: 0; padding: 24px; background: #f5f6fa; color: #1f2430; }
h1 { margin-top: 0; }
.kpis { display: flex; gap: 16px; margin-bottom: 24px; }
.kpi { background: #fff; border-radius: 8px; padding: 16px 24px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.kpi .label { display: block; font-size: 13px; color: #6b7280; }
.kpi .value { display: block; font-size: 24px; font-weight: bold; }
.kpi .delta { font-size: 13px; color: #10B981; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px; }
.chart { background: #fff; border-radius: 8px; padding: 8px; }
table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 8px; }
th, td { text-align: left; padding: 8px 12px; border-bottom: 1px solid #e5e7eb; font-size: 14px; }
</style>
</head>
<body>
<h1>Pulse Executive Dashboard</h1>
<div class="kpis">
  <div class="kpi"><span class="label">Revenue (current year)</span><span class="value">__REVENUE__</span><span class="delta">__REVENUE_GROWTH__ YoY</span></div>
  <div class="kpi"><span class="label">Customers</span><span class="value">__CUSTOMERS__</span><span class="delta">__CUSTOMER_GROWTH__ YoY</span></div>
  <div class="kpi"><span class="label">Active users</span><span class="value">__ACTIVE_USERS__</span></div>
  <div class="kpi"><span class="label">Downloads</span><span class="value">__DOWNLOADS__</span></div>
</div>
<div class="charts">
  <div id="revenue-trend" class="chart"></div>
  <div id="sku-distribution" class="chart"></div>
  <div id="industry-customers" class="chart"></div>
</div>
<h2>Top Customers</h2>
<table>
  <thead>
    <tr><th>Customer</th><th>Industry</th><th>SKU</th><th>Region</th><th>Revenue</th><th>Avg days active</th></tr>
  </thead>
  <tbody>
__TOP_CUSTOMER_ROWS__
  </tbody>
</table>
<script>
const revenueTrend = __REVENUE_TREND__;
const skuDistribution = __SKU_DISTRIBUTION__;
const industryCustomers = __INDUSTRY_CUSTOMERS__;
Plotly.newPlot('revenue-trend', revenueTrend.data, revenueTrend.layout);
Plotly.newPlot('sku-distribution', skuDistribution.data, skuDistribution.layout);
Plotly.newPlot('industry-customers', industryCustomers.data, industryCustomers.layout);
</script>
</body>
</html>
"##;

/// Inject the pre-aggregated overview into the page template. The
/// charts are embedded as JSON and rendered client-side.
pub fn render_dashboard_page(overview: &DashboardOverview) -> serde_json::Result<String> {
    let rows: String = overview
        .top_customers
        .iter()
        .map(|c| {
            format!(
                "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>\n",
                c.customer_name, c.industry, c.sku, c.region, c.revenue_display, c.avg_days_active
            )
        })
        .collect();

    Ok(DASHBOARD_TEMPLATE
        .replace("__REVENUE__", &overview.revenue_display)
        .replace("__REVENUE_GROWTH__", &overview.revenue_growth_display)
        .replace("__CUSTOMERS__", &overview.kpis.total_customers.to_string())
        .replace("__CUSTOMER_GROWTH__", &overview.customer_growth_display)
        .replace("__ACTIVE_USERS__", &overview.kpis.active_users.to_string())
        .replace("__DOWNLOADS__", &overview.kpis.total_downloads.to_string())
        .replace("__TOP_CUSTOMER_ROWS__", &rows)
        .replace("__REVENUE_TREND__", &serde_json::to_string(&overview.revenue_trend)?)
        .replace(
            "__SKU_DISTRIBUTION__",
            &serde_json::to_string(&overview.sku_distribution)?,
        )
        .replace(
            "__INDUSTRY_CUSTOMERS__",
            &serde_json::to_string(&overview.industry_customers)?,
        ))
}
