//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the screening services and the data they read or keep
//! (surveillance tables, session history).

mod history;
mod trends;

pub use history::PatientHistory;
pub use trends::TrendSource;
