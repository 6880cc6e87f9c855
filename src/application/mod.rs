//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the screening workflow: assess, monitor, escalate.

mod assessment;
pub mod escalation;
mod monitoring;

pub use assessment::{AssessmentService, RECENT_LIMIT};
pub use escalation::Escalation;
pub use monitoring::{CityMonitor, CityReport, TrendLine};
