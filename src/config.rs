//! Scoring configuration.
//!
//! Every threshold, multiplier and point value used by the predictor and the
//! risk classifier lives here. `Default` reproduces the reference rule set;
//! overrides come from a JSON file or individual environment variables.
//!
//! Supported environment variables:
//! - `SYMPTRIAGE_CONFIG_FILE`: JSON file with any subset of the fields below
//! - `SYMPTRIAGE_WEIGHTS_FILE`: JSON weight table (see [`WeightTable`])
//! - `SYMPTRIAGE_CONFIDENCE_FLOOR`
//! - `SYMPTRIAGE_RISK_HIGH_CUTOFF`
//! - `SYMPTRIAGE_RISK_MEDIUM_CUTOFF`
//!
//! [`WeightTable`]: crate::domain::WeightTable

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Disease, WeightTable};
use crate::{Result, TriageError};

pub const CONFIG_FILE_ENV: &str = "SYMPTRIAGE_CONFIG_FILE";
pub const WEIGHTS_FILE_ENV: &str = "SYMPTRIAGE_WEIGHTS_FILE";
const CONFIDENCE_FLOOR_ENV: &str = "SYMPTRIAGE_CONFIDENCE_FLOOR";
const HIGH_CUTOFF_ENV: &str = "SYMPTRIAGE_RISK_HIGH_CUTOFF";
const MEDIUM_CUTOFF_ENV: &str = "SYMPTRIAGE_RISK_MEDIUM_CUTOFF";

/// Disease prediction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Best score must reach this or the result is "No Disease"
    pub confidence_floor: f64,

    /// Reported confidence is clamped to this
    pub max_confidence: f64,

    /// Systolic strictly below this counts as low blood pressure
    pub low_systolic: i32,

    /// Diastolic strictly below this counts as low blood pressure
    pub low_diastolic: i32,

    /// Score multipliers applied on low blood pressure
    pub low_bp_multipliers: Vec<(Disease, f64)>,

    /// Temperature (°F) strictly above this counts as fever
    pub fever_temperature: f64,

    /// Score multipliers applied on fever
    pub fever_multipliers: Vec<(Disease, f64)>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 30.0,
            max_confidence: 100.0,
            low_systolic: 90,
            low_diastolic: 60,
            low_bp_multipliers: vec![(Disease::Dengue, 1.2), (Disease::Typhoid, 1.15)],
            fever_temperature: 100.0,
            fever_multipliers: vec![
                (Disease::Dengue, 1.1),
                (Disease::Typhoid, 1.1),
                (Disease::Flu, 1.1),
                (Disease::Malaria, 1.1),
                (Disease::Covid19, 1.1),
            ],
        }
    }
}

/// Risk classifier parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub elderly_age: i32,
    pub elderly_points: i64,
    pub older_adult_age: i32,
    pub older_adult_points: i64,

    pub many_symptoms: usize,
    pub many_symptoms_points: i64,
    pub several_symptoms: usize,
    pub several_symptoms_points: i64,
    /// Awarded for fewer than `several_symptoms`, including none
    pub few_symptoms_points: i64,

    pub low_systolic: i32,
    pub low_diastolic: i32,
    pub high_systolic: i32,
    pub high_diastolic: i32,
    pub abnormal_bp_points: i64,

    /// Temperature (°F) strictly above this scores `fever_points`
    pub fever_temperature: f64,
    pub fever_points: i64,

    /// Confidence is multiplied by this and truncated
    pub confidence_factor: f64,
    /// Confidence strictly above this adds `high_confidence_points`
    pub high_confidence: f64,
    pub high_confidence_points: i64,

    pub max_score: i64,
    pub high_cutoff: u32,
    pub medium_cutoff: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            elderly_age: 65,
            elderly_points: 30,
            older_adult_age: 50,
            older_adult_points: 15,
            many_symptoms: 4,
            many_symptoms_points: 35,
            several_symptoms: 2,
            several_symptoms_points: 20,
            few_symptoms_points: 10,
            low_systolic: 90,
            low_diastolic: 60,
            high_systolic: 140,
            high_diastolic: 90,
            abnormal_bp_points: 20,
            fever_temperature: 101.0,
            fever_points: 15,
            confidence_factor: 0.3,
            high_confidence: 70.0,
            high_confidence_points: 10,
            max_score: 100,
            high_cutoff: 70,
            medium_cutoff: 40,
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub prediction: PredictionConfig,
    pub risk: RiskConfig,
}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// # Errors
    /// Returns error on malformed JSON or inconsistent values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load config overrides from environment (best-effort).
    ///
    /// Invalid values are logged and ignored.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_path(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config file {}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply scalar overrides from a key lookup.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(x) = parse_var::<f64, _>(&lookup, CONFIDENCE_FLOOR_ENV) {
            if x.is_finite() && x >= 0.0 {
                self.prediction.confidence_floor = x;
            }
        }

        let high = parse_var::<u32, _>(&lookup, HIGH_CUTOFF_ENV).unwrap_or(self.risk.high_cutoff);
        let medium = parse_var::<u32, _>(&lookup, MEDIUM_CUTOFF_ENV).unwrap_or(self.risk.medium_cutoff);
        if medium <= high {
            self.risk.high_cutoff = high;
            self.risk.medium_cutoff = medium;
        } else {
            tracing::warn!(
                "Ignoring risk cutoff overrides: medium ({}) above high ({})",
                medium,
                high
            );
        }

        self
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// Returns `TriageError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let p = &self.prediction;
        if !(p.confidence_floor.is_finite() && p.confidence_floor >= 0.0) {
            return Err(TriageError::Config(format!(
                "confidence_floor must be a non-negative number, got {}",
                p.confidence_floor
            )));
        }
        if let Some((disease, m)) = p
            .low_bp_multipliers
            .iter()
            .chain(&p.fever_multipliers)
            .find(|(_, m)| !(m.is_finite() && *m >= 0.0))
        {
            return Err(TriageError::Config(format!(
                "Multiplier for {disease} must be a non-negative number, got {m}"
            )));
        }

        let r = &self.risk;
        if r.medium_cutoff > r.high_cutoff {
            return Err(TriageError::Config(format!(
                "medium_cutoff ({}) must not exceed high_cutoff ({})",
                r.medium_cutoff, r.high_cutoff
            )));
        }
        if r.several_symptoms > r.many_symptoms || r.older_adult_age > r.elderly_age {
            return Err(TriageError::Config(
                "Risk bands must be ordered from lower to higher thresholds".to_string(),
            ));
        }
        if r.max_score < 0 {
            return Err(TriageError::Config(format!(
                "max_score must be non-negative, got {}",
                r.max_score
            )));
        }

        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}", name, raw);
            None
        }
    }
}

/// Weight table selected by `SYMPTRIAGE_WEIGHTS_FILE`, or the built-in one.
#[must_use]
pub fn weights_from_env_or_default() -> Arc<WeightTable> {
    match std::env::var(WEIGHTS_FILE_ENV) {
        Ok(path) => match WeightTable::from_path(&path) {
            Ok(table) => Arc::new(table),
            Err(e) => {
                tracing::warn!("Ignoring weight table {}: {}", path, e);
                WeightTable::builtin()
            }
        },
        Err(_) => WeightTable::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.prediction.confidence_floor - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.risk.high_cutoff, 70);
        assert_eq!(config.risk.medium_cutoff, 40);
        assert!(!config
            .prediction
            .fever_multipliers
            .iter()
            .any(|(d, _)| *d == Disease::Tb));
    }

    #[test]
    fn test_partial_json() {
        let config = ScoringConfig::from_json(r#"{"risk": {"high_cutoff": 80}}"#).expect("Should parse");
        assert_eq!(config.risk.high_cutoff, 80);
        assert_eq!(config.risk.medium_cutoff, 40);
        assert_eq!(config.prediction, PredictionConfig::default());
    }

    #[test]
    fn test_multipliers_json_shape() {
        let config = ScoringConfig::from_json(
            r#"{"prediction": {"low_bp_multipliers": [["Dengue", 1.5]]}}"#,
        )
        .expect("Should parse");
        assert_eq!(config.prediction.low_bp_multipliers, vec![(Disease::Dengue, 1.5)]);
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(matches!(
            ScoringConfig::from_json(r#"{"risk": {"high_cutoff": 30, "medium_cutoff": 60}}"#),
            Err(TriageError::Config(_))
        ));
        assert!(matches!(
            ScoringConfig::from_json(r#"{"prediction": {"fever_multipliers": [["Flu", -1.0]]}}"#),
            Err(TriageError::Config(_))
        ));
        assert!(matches!(
            ScoringConfig::from_json("[1, 2]"),
            Err(TriageError::Serialization(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = ScoringConfig::default().with_overrides(lookup_from(&[
            (CONFIDENCE_FLOOR_ENV, " 45.5 "),
            (HIGH_CUTOFF_ENV, "75"),
        ]));
        assert!((config.prediction.confidence_floor - 45.5).abs() < f64::EPSILON);
        assert_eq!(config.risk.high_cutoff, 75);
        assert_eq!(config.risk.medium_cutoff, 40);
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let config = ScoringConfig::default().with_overrides(lookup_from(&[
            (CONFIDENCE_FLOOR_ENV, "lots"),
            (HIGH_CUTOFF_ENV, "20"),
        ]));
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("scoring.json");
        std::fs::write(&path, r#"{"prediction": {"confidence_floor": 50.0}}"#).expect("Should write");

        let config = ScoringConfig::from_path(&path).expect("Should load");
        assert!((config.prediction.confidence_floor - 50.0).abs() < f64::EPSILON);
    }
}
