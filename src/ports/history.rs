//! History port: Trait for session-scoped patient history.
//!
//! The history is owned by the presentation layer and lives only as long as
//! the screening session; nothing is persisted across sessions.

use crate::domain::{PatientRecord, RiskTally};

/// Trait for patient history operations.
pub trait PatientHistory: Send + Sync {
    /// Error type for history operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append a completed assessment.
    ///
    /// # Errors
    /// Returns error if the history cannot be updated.
    fn save(&self, record: &PatientRecord) -> Result<(), Self::Error>;

    /// All records, oldest first.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    fn list(&self) -> Result<Vec<PatientRecord>, Self::Error>;

    /// The most recent `limit` records, oldest first.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    fn recent(&self, limit: usize) -> Result<Vec<PatientRecord>, Self::Error>;

    /// Number of records.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Drop every record.
    ///
    /// # Errors
    /// Returns error if the history cannot be updated.
    fn clear(&self) -> Result<(), Self::Error>;

    /// Patients per risk tier.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    fn tally(&self) -> Result<RiskTally, Self::Error> {
        let records = self.list()?;
        Ok(RiskTally::from_levels(
            records.iter().map(|r| r.risk.risk_level),
        ))
    }
}
