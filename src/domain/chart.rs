// Chart spec domain models
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of charts the dashboard can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    RevenueTrend,
    SkuDistribution,
    IndustryCustomers,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported chart type: {0}")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "revenue_trend" => Ok(ChartKind::RevenueTrend),
            "sku_distribution" => Ok(ChartKind::SkuDistribution),
            "industry_customers" => Ok(ChartKind::IndustryCustomers),
            other => Err(UnknownChartKind(other.to_string())),
        }
    }
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::RevenueTrend => "revenue_trend",
            ChartKind::SkuDistribution => "sku_distribution",
            ChartKind::IndustryCustomers => "industry_customers",
        }
    }
}

/// Declarative chart body in the shape the front-end charting library
/// consumes: a list of traces plus a layout. Not interpreted server-side.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Line {
        x: Vec<String>,
        y: Vec<f64>,
        name: String,
        line: LineStyle,
    },
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
        marker: BarMarker,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        marker: PieMarker,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarMarker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub height: u32,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            height: 400,
        }
    }
}

pub const TREND_COLOR: &str = "#3B82F6";

pub const SKU_PALETTE: [&str; 4] = ["#3B82F6", "#8B5CF6", "#10B981", "#F59E0B"];

pub const INDUSTRY_PALETTE: [&str; 8] = [
    "#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444", "#EC4899", "#06B6D4", "#F97316",
];

/// Cycle a palette to cover `n` categories.
pub fn palette_colors(palette: &[&str], n: usize) -> Vec<String> {
    (0..n).map(|i| palette[i % palette.len()].to_string()).collect()
}

impl ChartSpec {
    pub fn trend_line(title: &str, x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            data: vec![Trace::Line {
                x,
                y,
                name: title.to_string(),
                line: LineStyle {
                    color: TREND_COLOR.to_string(),
                },
            }],
            layout: Layout::new(title),
        }
    }

    pub fn pie(title: &str, labels: Vec<String>, values: Vec<f64>, palette: &[&str]) -> Self {
        let colors = palette_colors(palette, labels.len());
        Self {
            data: vec![Trace::Pie {
                labels,
                values,
                marker: PieMarker { colors },
            }],
            layout: Layout::new(title),
        }
    }

    pub fn bar(title: &str, x: Vec<String>, y: Vec<f64>, palette: &[&str]) -> Self {
        let color = palette_colors(palette, x.len());
        Self {
            data: vec![Trace::Bar {
                x,
                y,
                marker: BarMarker { color },
            }],
            layout: Layout::new(title),
        }
    }
}
