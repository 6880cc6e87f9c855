//! Trend port: Source of per-city disease-case series.

use crate::domain::DiseaseTrend;

/// Read-only source of surveillance data.
pub trait TrendSource: Send + Sync {
    /// City names in listing order.
    fn cities(&self) -> Vec<String>;

    /// Case series for a city, in listing order.
    ///
    /// Unknown cities yield an empty list rather than an error.
    fn trends(&self, city: &str) -> Vec<DiseaseTrend>;
}
