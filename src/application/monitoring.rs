//! Monitoring service: Per-city disease trend summaries.
//!
//! Turns raw weekly case series from a [`TrendSource`] into directions,
//! percent changes and one-line summaries for the trends panel.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Disease, DiseaseTrend, TrendDirection};
use crate::ports::TrendSource;

/// One row of the trends panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub disease: Disease,
    pub weekly_cases: Vec<u32>,
    pub direction: TrendDirection,
    pub change_percent: i64,
}

impl From<&DiseaseTrend> for TrendLine {
    fn from(trend: &DiseaseTrend) -> Self {
        Self {
            disease: trend.disease,
            weekly_cases: trend.weekly_cases.to_vec(),
            direction: trend.direction(),
            change_percent: trend.change_percent(),
        }
    }
}

/// Everything the trends panel shows for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityReport {
    pub city: String,
    pub summary: String,
    pub lines: Vec<TrendLine>,
}

/// Service for city trend monitoring.
pub struct CityMonitor<T>
where
    T: TrendSource,
{
    source: Arc<T>,
}

impl<T> CityMonitor<T>
where
    T: TrendSource,
{
    /// Create a new monitor over a trend source.
    pub fn new(source: Arc<T>) -> Self {
        Self { source }
    }

    /// Cities available for selection.
    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        self.source.cities()
    }

    /// Raw case series for a city.
    #[must_use]
    pub fn trends(&self, city: &str) -> Vec<DiseaseTrend> {
        self.source.trends(city)
    }

    /// Diseases whose cases are rising in a city.
    #[must_use]
    pub fn rising(&self, city: &str) -> Vec<Disease> {
        self.source
            .trends(city)
            .iter()
            .filter(|t| t.direction() == TrendDirection::Rising)
            .map(|t| t.disease)
            .collect()
    }

    /// Comma-separated summary, e.g. `Dengue rising (+40%), TB steady (+0%)`.
    #[must_use]
    pub fn summary(&self, city: &str) -> String {
        let trends = self.source.trends(city);
        if trends.is_empty() {
            return format!("No data available for {city}");
        }
        summarize(&trends)
    }

    /// Summary plus per-disease rows.
    #[must_use]
    pub fn report(&self, city: &str) -> CityReport {
        let trends = self.source.trends(city);
        let summary = if trends.is_empty() {
            format!("No data available for {city}")
        } else {
            summarize(&trends)
        };

        tracing::debug!(
            "Trend report for {}: {} series, {} rising",
            city,
            trends.len(),
            trends
                .iter()
                .filter(|t| t.direction() == TrendDirection::Rising)
                .count()
        );

        CityReport {
            city: city.to_string(),
            summary,
            lines: trends.iter().map(TrendLine::from).collect(),
        }
    }
}

fn summarize(trends: &[DiseaseTrend]) -> String {
    trends
        .iter()
        .map(DiseaseTrend::describe)
        .collect::<Vec<_>>()
        .join(", ")
}
