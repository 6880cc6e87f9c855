//! Symptom-to-disease evidential weights.
//!
//! The built-in table is static reference data. An override table can be
//! loaded from JSON in the same shape:
//!
//! ```json
//! { "fever": { "Dengue": 0.9, "Typhoid": 0.95 }, "cough": { "TB": 0.95 } }
//! ```
//!
//! A missing (symptom, disease) entry means zero evidential weight.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::disease::Disease;
use super::symptom::Symptom;
use crate::{Result, TriageError};

/// Built-in weights, columns in [`Disease::ALL`] order:
/// Dengue, Typhoid, Flu, TB, Malaria, COVID-19.
pub const DEFAULT_WEIGHTS: [(Symptom, [f64; Disease::COUNT]); Symptom::COUNT] = [
    (Symptom::Fever, [0.9, 0.95, 0.85, 0.7, 0.95, 0.9]),
    (Symptom::Headache, [0.8, 0.85, 0.75, 0.6, 0.8, 0.7]),
    (Symptom::JointPain, [0.9, 0.5, 0.7, 0.4, 0.6, 0.6]),
    (Symptom::Rash, [0.85, 0.3, 0.2, 0.2, 0.4, 0.3]),
    (Symptom::Bleeding, [0.7, 0.2, 0.1, 0.3, 0.3, 0.2]),
    (Symptom::Nausea, [0.6, 0.7, 0.5, 0.4, 0.7, 0.5]),
    (Symptom::StomachPain, [0.3, 0.9, 0.2, 0.3, 0.5, 0.3]),
    (Symptom::Diarrhea, [0.4, 0.85, 0.3, 0.2, 0.4, 0.4]),
    (Symptom::Weakness, [0.7, 0.8, 0.7, 0.85, 0.8, 0.75]),
    (Symptom::LossOfAppetite, [0.5, 0.8, 0.6, 0.75, 0.7, 0.6]),
    (Symptom::Cough, [0.3, 0.4, 0.9, 0.95, 0.3, 0.9]),
    (Symptom::SoreThroat, [0.2, 0.3, 0.85, 0.4, 0.2, 0.7]),
    (Symptom::BodyAche, [0.7, 0.5, 0.8, 0.5, 0.7, 0.85]),
    (Symptom::Fatigue, [0.8, 0.75, 0.8, 0.85, 0.8, 0.8]),
    (Symptom::RunnyNose, [0.2, 0.2, 0.75, 0.2, 0.2, 0.6]),
    (Symptom::WeightLoss, [0.3, 0.4, 0.2, 0.9, 0.5, 0.4]),
    (Symptom::NightSweats, [0.3, 0.4, 0.2, 0.85, 0.6, 0.3]),
    (Symptom::ChestPain, [0.2, 0.3, 0.4, 0.8, 0.3, 0.7]),
    (Symptom::Chills, [0.5, 0.6, 0.6, 0.5, 0.9, 0.5]),
    (Symptom::Sweating, [0.4, 0.5, 0.3, 0.6, 0.85, 0.4]),
    (Symptom::BreathingDifficulty, [0.4, 0.3, 0.5, 0.7, 0.4, 0.9]),
    (Symptom::LossOfTaste, [0.2, 0.2, 0.3, 0.2, 0.2, 0.8]),
];

static BUILTIN: OnceLock<Arc<WeightTable>> = OnceLock::new();

/// Immutable symptom → disease → weight lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    rows: HashMap<Symptom, [Option<f64>; Disease::COUNT]>,
}

impl WeightTable {
    /// Shared handle to the built-in table.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        BUILTIN
            .get_or_init(|| {
                let rows = DEFAULT_WEIGHTS
                    .iter()
                    .map(|(symptom, row)| (*symptom, row.map(Some)))
                    .collect();
                Arc::new(Self { rows })
            })
            .clone()
    }

    /// Build a table from nested name maps, validating every entry.
    ///
    /// # Errors
    /// Returns an error for unknown symptom or disease names, or for a weight
    /// outside `[0, 1]`.
    pub fn from_entries(entries: &BTreeMap<String, BTreeMap<String, f64>>) -> Result<Self> {
        let mut rows = HashMap::with_capacity(entries.len());

        for (symptom_name, by_disease) in entries {
            let symptom = Symptom::lookup(symptom_name).ok_or_else(|| {
                TriageError::Config(format!("Unknown symptom in weight table: {symptom_name}"))
            })?;

            let mut row = [None; Disease::COUNT];
            for (disease_name, &weight) in by_disease {
                let disease = disease_name.parse::<Disease>().map_err(|e| {
                    TriageError::Config(format!("{e} (under symptom {symptom_name})"))
                })?;
                if !(0.0..=1.0).contains(&weight) {
                    return Err(TriageError::InvalidWeight {
                        symptom: symptom_name.clone(),
                        disease: disease_name.clone(),
                        weight,
                    });
                }
                row[disease.index()] = Some(weight);
            }
            rows.insert(symptom, row);
        }

        Ok(Self { rows })
    }

    /// Parse a JSON weight table.
    ///
    /// # Errors
    /// Returns error on malformed JSON or invalid entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(json)?;
        Self::from_entries(&entries)
    }

    /// Load a JSON weight table from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let table = Self::from_json(&json)?;
        tracing::info!(
            "Loaded weight table from {} ({} symptoms)",
            path.as_ref().display(),
            table.rows.len()
        );
        Ok(table)
    }

    /// Weight for a pair, or `None` when the table has no entry.
    #[must_use]
    pub fn weight(&self, symptom: Symptom, disease: Disease) -> Option<f64> {
        self.rows.get(&symptom).and_then(|row| row[disease.index()])
    }

    /// Number of symptoms with at least a row in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::builtin().as_ref().clone()
    }
}
