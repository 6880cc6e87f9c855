//! Additive risk scoring.

use super::risk::{RiskAssessment, RiskBreakdown, RiskLevel};
use super::vitals::Vitals;
use crate::config::RiskConfig;

/// Classifies overall patient risk from age, symptom burden, vitals and the
/// predictor's confidence.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    config: RiskConfig,
}

impl RiskClassifier {
    #[must_use]
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Score and tier a patient.
    ///
    /// `symptoms` are counted as given (no normalization or deduplication).
    /// `city` and `disease` are accepted for trend-aware boosting but do not
    /// currently affect the score.
    pub fn classify<S: AsRef<str>>(
        &self,
        age: i32,
        symptoms: &[S],
        vitals: &Vitals,
        city: &str,
        disease: &str,
        confidence: f64,
    ) -> RiskAssessment {
        let breakdown = self.breakdown(age, symptoms.len(), vitals, confidence);
        let clamped = breakdown.total().min(self.config.max_score).max(0);
        let risk_score = u32::try_from(clamped).unwrap_or(u32::MAX);
        let risk_level = self.level_for(risk_score);

        tracing::debug!(
            city,
            disease,
            raw = breakdown.total(),
            risk_score,
            level = %risk_level,
            "Classified patient risk"
        );

        RiskAssessment {
            risk_level,
            risk_score,
        }
    }

    /// Points contributed by each factor.
    #[must_use]
    pub fn breakdown(
        &self,
        age: i32,
        symptom_count: usize,
        vitals: &Vitals,
        confidence: f64,
    ) -> RiskBreakdown {
        let cfg = &self.config;

        let age_points = if age >= cfg.elderly_age {
            cfg.elderly_points
        } else if age >= cfg.older_adult_age {
            cfg.older_adult_points
        } else {
            0
        };

        let symptom_points = if symptom_count >= cfg.many_symptoms {
            cfg.many_symptoms_points
        } else if symptom_count >= cfg.several_symptoms {
            cfg.several_symptoms_points
        } else {
            cfg.few_symptoms_points
        };

        let abnormal_bp = vitals.bp_systolic < cfg.low_systolic
            || vitals.bp_diastolic < cfg.low_diastolic
            || vitals.bp_systolic > cfg.high_systolic
            || vitals.bp_diastolic > cfg.high_diastolic;

        RiskBreakdown {
            age: age_points,
            symptom_burden: symptom_points,
            blood_pressure: if abnormal_bp { cfg.abnormal_bp_points } else { 0 },
            temperature: if vitals.temperature > cfg.fever_temperature {
                cfg.fever_points
            } else {
                0
            },
            // Truncates toward zero. NaN scores nothing.
            confidence: (confidence.clamp(0.0, 100.0) * cfg.confidence_factor) as i64,
            confidence_bonus: if confidence > cfg.high_confidence {
                cfg.high_confidence_points
            } else {
                0
            },
        }
    }

    /// Map a clamped score onto a tier.
    #[must_use]
    pub fn level_for(&self, score: u32) -> RiskLevel {
        if score >= self.config.high_cutoff {
            RiskLevel::High
        } else if score >= self.config.medium_cutoff {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORMAL: Vitals = Vitals {
        bp_systolic: 120,
        bp_diastolic: 80,
        temperature: 98.6,
    };

    fn classifier() -> RiskClassifier {
        RiskClassifier::default()
    }

    #[test]
    fn test_elderly_tb_scenario() {
        let vitals = Vitals::new(150, 95, 102.0);
        let symptoms = ["fever", "cough", "fatigue", "weakness"];

        let breakdown = classifier().breakdown(70, symptoms.len(), &vitals, 85.0);
        assert_eq!(
            breakdown,
            RiskBreakdown {
                age: 30,
                symptom_burden: 35,
                blood_pressure: 20,
                temperature: 15,
                confidence: 25,
                confidence_bonus: 10,
            }
        );
        assert_eq!(breakdown.total(), 135);

        let risk = classifier().classify(70, &symptoms, &vitals, "Delhi", "TB", 85.0);
        assert_eq!(risk.risk_score, 100);
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_age_bands() {
        let c = classifier();
        assert_eq!(c.breakdown(49, 1, &NORMAL, 0.0).age, 0);
        assert_eq!(c.breakdown(50, 1, &NORMAL, 0.0).age, 15);
        assert_eq!(c.breakdown(64, 1, &NORMAL, 0.0).age, 15);
        assert_eq!(c.breakdown(65, 1, &NORMAL, 0.0).age, 30);

        let at_64 = c.classify(64, &["fever"], &NORMAL, "Pune", "Flu", 50.0).risk_score;
        let at_65 = c.classify(65, &["fever"], &NORMAL, "Pune", "Flu", 50.0).risk_score;
        assert_eq!(at_65 - at_64, 15);
    }

    #[test]
    fn test_symptom_bands_count_raw_entries() {
        let c = classifier();
        assert_eq!(c.breakdown(30, 0, &NORMAL, 0.0).symptom_burden, 10);
        assert_eq!(c.breakdown(30, 1, &NORMAL, 0.0).symptom_burden, 10);
        assert_eq!(c.breakdown(30, 2, &NORMAL, 0.0).symptom_burden, 20);
        assert_eq!(c.breakdown(30, 3, &NORMAL, 0.0).symptom_burden, 20);
        assert_eq!(c.breakdown(30, 4, &NORMAL, 0.0).symptom_burden, 35);

        // Duplicates and unknown phrases still count.
        let risk = c.classify(30, &["fever", "fever", "???", "Temp"], &NORMAL, "", "", 0.0);
        assert_eq!(risk.risk_score, 35);
    }

    #[test]
    fn test_empty_symptoms_still_score() {
        let empty: [&str; 0] = [];
        let risk = classifier().classify(30, &empty, &NORMAL, "Delhi", "No Disease", 0.0);
        assert_eq!(risk.risk_score, 10);
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_blood_pressure_bounds() {
        let c = classifier();
        let bp = |s, d| c.breakdown(30, 1, &Vitals::new(s, d, 98.6), 0.0).blood_pressure;
        assert_eq!(bp(90, 60), 0);
        assert_eq!(bp(140, 90), 0);
        assert_eq!(bp(89, 70), 20);
        assert_eq!(bp(120, 59), 20);
        assert_eq!(bp(141, 80), 20);
        assert_eq!(bp(120, 91), 20);
        // Several abnormal readings still score once.
        assert_eq!(bp(80, 95), 20);
    }

    #[test]
    fn test_temperature_threshold_is_strict() {
        let c = classifier();
        assert_eq!(c.breakdown(30, 1, &Vitals::new(120, 80, 101.0), 0.0).temperature, 0);
        assert_eq!(c.breakdown(30, 1, &Vitals::new(120, 80, 101.1), 0.0).temperature, 15);
    }

    #[test]
    fn test_confidence_points() {
        let c = classifier();
        assert_eq!(c.breakdown(30, 1, &NORMAL, 86.25).confidence, 25);
        assert_eq!(c.breakdown(30, 1, &NORMAL, 3.3).confidence, 0);
        assert_eq!(c.breakdown(30, 1, &NORMAL, 70.0).confidence_bonus, 0);
        assert_eq!(c.breakdown(30, 1, &NORMAL, 70.01).confidence_bonus, 10);
    }

    #[test]
    fn test_extreme_confidence_is_bounded() {
        let c = classifier();
        assert_eq!(c.breakdown(30, 1, &NORMAL, f64::INFINITY).confidence, 30);
        assert_eq!(c.breakdown(30, 1, &NORMAL, f64::MAX).confidence, 30);
        assert_eq!(c.breakdown(30, 1, &NORMAL, -50.0).confidence, 0);
        assert_eq!(c.breakdown(30, 1, &NORMAL, f64::NAN).confidence, 0);

        // 10 + 30 + 10
        let risk = c.classify(30, &["a"], &NORMAL, "Delhi", "TB", f64::INFINITY);
        assert_eq!(risk.risk_score, 50);
        assert_eq!(risk.risk_level, RiskLevel::Medium);

        let risk = c.classify(70, &["a", "b", "c", "d"], &NORMAL, "Delhi", "TB", f64::MAX);
        assert_eq!(risk.risk_score, 100);
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_huge_point_values_do_not_overflow() {
        let c = RiskClassifier::new(RiskConfig {
            elderly_points: i64::MAX,
            many_symptoms_points: i64::MAX,
            max_score: i64::MAX,
            ..RiskConfig::default()
        });
        let risk = c.classify(70, &["a", "b", "c", "d"], &NORMAL, "", "", 90.0);
        assert_eq!(risk.risk_score, u32::MAX);
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_level_thresholds() {
        let c = classifier();
        assert_eq!(c.level_for(100), RiskLevel::High);
        assert_eq!(c.level_for(70), RiskLevel::High);
        assert_eq!(c.level_for(69), RiskLevel::Medium);
        assert_eq!(c.level_for(40), RiskLevel::Medium);
        assert_eq!(c.level_for(39), RiskLevel::Low);
        assert_eq!(c.level_for(0), RiskLevel::Low);
    }

    #[test]
    fn test_medium_scenario() {
        // 15 (age 55) + 20 (3 symptoms) + floor(60 * 0.3) = 18 -> 53
        let risk = classifier().classify(55, &["cough", "fever", "rash"], &NORMAL, "Pune", "Flu", 60.0);
        assert_eq!(risk.risk_score, 53);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_custom_cutoffs() {
        let c = RiskClassifier::new(RiskConfig {
            high_cutoff: 50,
            medium_cutoff: 20,
            ..RiskConfig::default()
        });
        assert_eq!(c.level_for(50), RiskLevel::High);
        assert_eq!(c.level_for(20), RiskLevel::Medium);
    }
}
