//! Weighted symptom scoring and disease selection.
//!
//! Each candidate's raw score is the mean weight of the symptoms that have an
//! entry for it, on a 0-100 scale. Symptoms with no entry are left out of the
//! denominator rather than counted as zero. Vitals then apply multiplicative
//! boosts, and the best candidate wins if it clears the confidence floor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::disease::{Disease, Prediction};
use super::symptom::{normalize, Symptom};
use super::vitals::Vitals;
use super::weights::WeightTable;
use crate::config::PredictionConfig;

/// Per-candidate scores from one prediction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseScores([f64; Disease::COUNT]);

impl DiseaseScores {
    #[must_use]
    pub fn get(&self, disease: Disease) -> f64 {
        self.0[disease.index()]
    }

    fn scale(&mut self, disease: Disease, factor: f64) {
        self.0[disease.index()] *= factor;
    }

    /// Scores paired with their disease, in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Disease, f64)> + '_ {
        Disease::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Highest-scoring disease; the earliest candidate wins ties.
    #[must_use]
    pub fn best(&self) -> (Disease, f64) {
        self.iter()
            .fold((Disease::ALL[0], self.0[0]), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
    }
}

/// Scores candidate diseases against reported symptoms and vitals.
#[derive(Debug, Clone)]
pub struct DiseasePredictor {
    weights: Arc<WeightTable>,
    config: PredictionConfig,
}

impl Default for DiseasePredictor {
    fn default() -> Self {
        Self::new(WeightTable::builtin(), PredictionConfig::default())
    }
}

impl DiseasePredictor {
    #[must_use]
    pub fn new(weights: Arc<WeightTable>, config: PredictionConfig) -> Self {
        Self { weights, config }
    }

    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    #[must_use]
    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict the most likely disease.
    ///
    /// `age` and `city` are accepted for trend-aware scoring but do not
    /// currently affect the result. Never fails; an empty symptom list or a
    /// best score under the confidence floor yields "No Disease".
    pub fn predict<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        age: i32,
        city: &str,
        vitals: &Vitals,
    ) -> Prediction {
        if symptoms.is_empty() {
            return Prediction::none();
        }

        let scores = self.score(symptoms, vitals);
        let (disease, score) = scores.best();

        tracing::debug!(
            age,
            city,
            symptoms = symptoms.len(),
            best = %disease,
            score,
            "Scored disease candidates"
        );

        // All-zero scores never name a disease, whatever the floor.
        if score <= 0.0 || score < self.config.confidence_floor {
            return Prediction::none();
        }

        Prediction::detected(disease, score.min(self.config.max_confidence))
    }

    /// Raw per-disease scores after vitals adjustment, before the floor and
    /// clamp are applied.
    #[must_use]
    pub fn score<S: AsRef<str>>(&self, symptoms: &[S], vitals: &Vitals) -> DiseaseScores {
        // Repeated symptoms are kept; each occurrence counts.
        let normalized: Vec<Symptom> = symptoms
            .iter()
            .filter_map(|raw| Symptom::lookup(&normalize(raw.as_ref())))
            .collect();

        let mut scores = DiseaseScores::default();
        for disease in Disease::ALL {
            let (sum, matched) = normalized
                .iter()
                .filter_map(|&symptom| self.weights.weight(symptom, disease))
                .fold((0.0_f64, 0_usize), |(sum, n), w| (sum + w, n + 1));

            if matched > 0 {
                scores.0[disease.index()] = (sum / matched as f64) * 100.0;
            }
        }

        self.adjust_for_vitals(&mut scores, vitals);
        scores
    }

    fn adjust_for_vitals(&self, scores: &mut DiseaseScores, vitals: &Vitals) {
        let cfg = &self.config;

        if vitals.bp_systolic < cfg.low_systolic || vitals.bp_diastolic < cfg.low_diastolic {
            for &(disease, factor) in &cfg.low_bp_multipliers {
                scores.scale(disease, factor);
            }
        }

        if vitals.temperature > cfg.fever_temperature {
            for &(disease, factor) in &cfg.fever_multipliers {
                scores.scale(disease, factor);
            }
        }
    }
}
