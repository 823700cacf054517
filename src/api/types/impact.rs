//! Impact reporting types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::project::{Project, ProjectCategory};

/// Everyday equivalents of the offset total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEquivalents {
    pub cars_off_the_road: f64,
    pub flights_lax_to_nyc: f64,
    pub homes_annual_energy_usage: f64,
    pub trees_planted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactProjectUsage {
    pub project: Project,
    pub offset_kgs: f64,
    /// Vintage years, e.g. "2012" or "2012, 2013"
    pub vintages: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactCategoryUsage {
    pub category: ProjectCategory,
    pub offset_kgs: f64,
    #[serde(default)]
    pub projects: Vec<ImpactProjectUsage>,
}

/// Offset totals for the account (or subaccount) over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactData {
    /// Account display name
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub total_offset_kgs: f64,
    pub equivalents: ImpactEquivalents,
    #[serde(default)]
    pub categories: Vec<ImpactCategoryUsage>,
    pub since_date: String,
    pub to_date: Option<String>,
}

/// Configuration of the public hosted impact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactHostedPageConfig {
    pub enabled: bool,
    /// Names of the equivalents shown on the page
    #[serde(default)]
    pub enabled_equivalents: Vec<String>,
    pub url: String,
}

/// Date range for `GET /impact/data`. Both bounds are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactDataFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ImpactDataFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    pub fn until(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Query parameters, as millisecond-precision UTC timestamps
    /// (`2024-01-01T00:00:00.000Z`).
    pub(crate) fn query(&self) -> ImpactDataQuery {
        let format = |date: DateTime<Utc>| date.to_rfc3339_opts(SecondsFormat::Millis, true);
        ImpactDataQuery {
            from: self.from.map(format),
            to: self.to.map(format),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct ImpactDataQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filter_timestamps_use_millis() {
        let filter = ImpactDataFilter::new()
            .since(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .until(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
        let query = filter.query();
        assert_eq!(query.from.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(query.to.as_deref(), Some("2024-03-01T12:30:00.000Z"));
    }

    #[test]
    fn test_empty_filter() {
        assert_eq!(ImpactDataFilter::new().query(), ImpactDataQuery::default());
    }
}
