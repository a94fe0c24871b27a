// Filter domain model
use crate::domain::record::Record;
use chrono::{Datelike, NaiveDate};

/// Time window a query narrows to, relative to the dataset's
/// reference date. Unknown values fall back to the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    CurrentYear,
    LastYear,
    AllTime,
}

impl Period {
    pub fn parse(value: &str) -> Self {
        match value {
            "last_year" => Period::LastYear,
            "all_time" => Period::AllTime,
            _ => Period::CurrentYear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::CurrentYear => "current_year",
            Period::LastYear => "last_year",
            Period::AllTime => "all_time",
        }
    }

    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Period::CurrentYear => date.year() == reference.year(),
            Period::LastYear => date.year() == reference.year() - 1,
            Period::AllTime => true,
        }
    }
}

/// Validated set of query parameters narrowing a dataset.
/// `None` for sku/industry means "all".
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub period: Period,
    pub sku: Option<String>,
    pub industry: Option<String>,
}

impl FilterSpec {
    pub fn from_params(
        period: Option<&str>,
        sku: Option<&str>,
        industry: Option<&str>,
    ) -> Self {
        Self {
            period: period.map(Period::parse).unwrap_or_default(),
            sku: normalize(sku),
            industry: normalize(industry),
        }
    }

    pub fn matches(&self, record: &Record, reference: NaiveDate) -> bool {
        if !self.period.contains(record.date, reference) {
            return false;
        }
        if let Some(sku) = &self.sku {
            if record.sku != *sku {
                return false;
            }
        }
        if let Some(industry) = &self.industry {
            if record.industry != *industry {
                return false;
            }
        }
        true
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") | Some("all") => None,
        Some(other) => Some(other.to_string()),
    }
}
