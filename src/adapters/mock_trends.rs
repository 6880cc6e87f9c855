//! Mock surveillance adapter: Implementation of TrendSource.
//!
//! Serves the static four-week series in [`CITY_TRENDS`]. There is no real
//! epidemiological feed behind it.

use crate::domain::trend::CITY_TRENDS;
use crate::domain::{City, DiseaseTrend};
use crate::ports::TrendSource;

/// Trend source backed by the built-in mock table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTrendData;

impl MockTrendData {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TrendSource for MockTrendData {
    fn cities(&self) -> Vec<String> {
        City::ALL.iter().map(|c| c.name().to_string()).collect()
    }

    fn trends(&self, city: &str) -> Vec<DiseaseTrend> {
        let Some(city) = City::lookup(city) else {
            return Vec::new();
        };

        CITY_TRENDS
            .iter()
            .find(|(c, _)| *c == city)
            .map(|(_, series)| {
                series
                    .iter()
                    .map(|&(disease, weekly_cases)| DiseaseTrend {
                        disease,
                        weekly_cases,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
