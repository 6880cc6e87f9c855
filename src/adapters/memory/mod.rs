//! In-memory adapter: Implementation of PatientHistory.
//!
//! Keeps the current session's assessments in a `Vec` behind a `Mutex`.
//!
//! # Mutex Behavior
//!
//! A poisoned mutex (from a panic in another thread) fails closed by
//! returning `HistoryError::Poisoned` instead of exposing half-written state.

use std::sync::{Mutex, MutexGuard};

use crate::domain::PatientRecord;
use crate::ports::PatientHistory;

/// Error type for history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History lock poisoned")]
    Poisoned,

    #[error("History is full ({0} records)")]
    Full(usize),
}

/// Session history kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: Mutex<Vec<PatientRecord>>,
    capacity: Option<usize>,
}

impl InMemoryHistory {
    /// Create an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that refuses new records past `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<PatientRecord>>, HistoryError> {
        self.records.lock().map_err(|_| HistoryError::Poisoned)
    }
}

impl PatientHistory for InMemoryHistory {
    type Error = HistoryError;

    fn save(&self, record: &PatientRecord) -> Result<(), Self::Error> {
        let mut records = self.lock()?;
        if let Some(capacity) = self.capacity {
            if records.len() >= capacity {
                return Err(HistoryError::Full(capacity));
            }
        }
        records.push(record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<PatientRecord>, Self::Error> {
        Ok(self.lock()?.clone())
    }

    fn recent(&self, limit: usize) -> Result<Vec<PatientRecord>, Self::Error> {
        let records = self.lock()?;
        let start = records.len().saturating_sub(limit);
        Ok(records[start..].to_vec())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.lock()?.len())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.lock()?.clear();
        Ok(())
    }
}
