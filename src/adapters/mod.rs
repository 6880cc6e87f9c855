//! Adapters layer: Concrete implementations of ports.
//!
//! - `memory`: in-process session history
//! - `mock_trends`: static surveillance table
//! - `sanitize`: PII filtering for logs

pub mod memory;
pub mod mock_trends;
pub mod sanitize;

pub use memory::{HistoryError, InMemoryHistory};
pub use mock_trends::MockTrendData;
