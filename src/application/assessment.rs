//! Assessment service: Orchestrates a patient screening.
//!
//! This service coordinates:
//! - Disease prediction from symptoms and vitals
//! - Risk classification using the prediction's confidence
//! - Recording the result in the session history

use std::sync::Arc;

use crate::adapters::HistoryError;
use crate::config::{weights_from_env_or_default, ScoringConfig};
use crate::domain::{
    DiseasePredictor, PatientIntake, PatientRecord, Prediction, RiskAssessment, RiskClassifier,
    RiskTally, WeightTable,
};
use crate::ports::PatientHistory;
use crate::{Result, TriageError};

/// Number of records shown in the history sidebar.
pub const RECENT_LIMIT: usize = 5;

/// Service for running patient assessments.
///
/// The predictor and classifier are immutable; only the history is shared
/// mutable state, and it belongs to the caller.
pub struct AssessmentService<H>
where
    H: PatientHistory,
{
    predictor: DiseasePredictor,
    classifier: RiskClassifier,
    history: Arc<H>,
}

impl<H> AssessmentService<H>
where
    H: PatientHistory,
    H::Error: Into<HistoryError>,
{
    /// Create a service with the built-in weights and default rules.
    pub fn new(history: Arc<H>) -> Self {
        Self::with_config(&ScoringConfig::default(), WeightTable::builtin(), history)
    }

    /// Create a service with explicit scoring configuration.
    pub fn with_config(config: &ScoringConfig, weights: Arc<WeightTable>, history: Arc<H>) -> Self {
        Self {
            predictor: DiseasePredictor::new(weights, config.prediction.clone()),
            classifier: RiskClassifier::new(config.risk.clone()),
            history,
        }
    }

    /// Create a service configured from `SYMPTRIAGE_*` environment variables.
    pub fn from_env(history: Arc<H>) -> Self {
        let config = ScoringConfig::from_env_or_default();
        Self::with_config(&config, weights_from_env_or_default(), history)
    }

    #[must_use]
    pub fn predictor(&self) -> &DiseasePredictor {
        &self.predictor
    }

    #[must_use]
    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Predict and classify without recording anything.
    #[must_use]
    pub fn evaluate(&self, intake: &PatientIntake) -> (Prediction, RiskAssessment) {
        let prediction = self.predictor.predict(
            &intake.symptoms,
            intake.age,
            &intake.city,
            &intake.vitals,
        );
        let risk = self.classifier.classify(
            intake.age,
            &intake.symptoms,
            &intake.vitals,
            &intake.city,
            prediction.label(),
            prediction.confidence,
        );
        (prediction, risk)
    }

    /// Run a full assessment and record it in the history.
    ///
    /// A history failure is logged but does not fail the assessment; the
    /// screener still gets a result.
    pub fn assess(&self, intake: PatientIntake) -> PatientRecord {
        tracing::debug!("Assessing patient ({} symptoms)", intake.symptoms.len());

        let (prediction, risk) = self.evaluate(&intake);
        let record = PatientRecord::new(intake, prediction, risk);

        if let Err(e) = self.history.save(&record) {
            let e: HistoryError = e.into();
            tracing::warn!("Failed to record assessment: {}", e);
        }

        tracing::info!(
            "Assessment complete: disease={}, confidence={:.1}%, risk={} ({})",
            record.prediction.label(),
            record.prediction.confidence,
            record.risk.risk_level,
            record.risk.risk_score
        );

        record
    }

    /// Validate the intake, then assess it.
    ///
    /// # Errors
    /// Returns `TriageError::Validation` if the intake is outside the form
    /// bounds.
    pub fn assess_checked(&self, intake: PatientIntake) -> Result<PatientRecord> {
        intake
            .validate()
            .map_err(|errors| TriageError::Validation(errors.join("; ")))?;
        Ok(self.assess(intake))
    }

    /// Most recent assessments, oldest first.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    pub fn recent(&self, limit: usize) -> Result<Vec<PatientRecord>> {
        self.history
            .recent(limit)
            .map_err(|e| TriageError::History(e.into()))
    }

    /// Every assessment in this session.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    pub fn all(&self) -> Result<Vec<PatientRecord>> {
        self.history
            .list()
            .map_err(|e| TriageError::History(e.into()))
    }

    /// Patients per risk tier.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    pub fn tally(&self) -> Result<RiskTally> {
        self.history
            .tally()
            .map_err(|e| TriageError::History(e.into()))
    }

    /// Ward status announcement, or `None` before anyone is assessed.
    ///
    /// # Errors
    /// Returns error if the history cannot be read.
    pub fn announcement(&self) -> Result<Option<String>> {
        let tally = self.tally()?;
        if tally.total() == 0 {
            return Ok(None);
        }
        Ok(Some(tally.announcement()))
    }

    /// Drop every recorded assessment.
    ///
    /// # Errors
    /// Returns error if the history cannot be updated.
    pub fn clear_history(&self) -> Result<()> {
        tracing::info!("Clearing session history");
        self.history
            .clear()
            .map_err(|e| TriageError::History(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistory;
    use crate::domain::{Disease, Gender, RiskLevel, Vitals};

    fn create_test_service() -> AssessmentService<InMemoryHistory> {
        AssessmentService::new(Arc::new(InMemoryHistory::new()))
    }

    fn dengue_intake() -> PatientIntake {
        PatientIntake::new("Ram", 45, Gender::Male, "Mumbai")
            .with_symptoms(["Fever", "Headache", "Joint Pain", "Rash"])
            .with_vitals(Vitals::new(90, 60, 98.6))
    }

    #[test]
    fn test_assessment_pipeline() {
        let service = create_test_service();
        let record = service.assess(dengue_intake());

        assert_eq!(record.prediction.disease, Some(Disease::Dengue));
        assert!((record.prediction.confidence - 86.25).abs() < 1e-9);
        // 0 (age) + 35 (4 symptoms) + 0 + 0 + 25 + 10
        assert_eq!(record.risk.risk_score, 70);
        assert_eq!(record.risk.risk_level, RiskLevel::High);

        let recent = service.recent(RECENT_LIMIT).expect("Should load history");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, record.id);
    }

    #[test]
    fn test_no_symptoms() {
        let service = create_test_service();
        let record = service.assess(PatientIntake::new("Sita", 30, Gender::Female, "Delhi"));

        assert!(record.prediction.is_none());
        assert_eq!(record.risk.risk_score, 10);
        assert_eq!(record.risk.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_assess_checked_rejects_bad_intake() {
        let service = create_test_service();
        let intake = dengue_intake().with_vitals(Vitals::new(90, 60, 120.0));
        assert!(matches!(
            service.assess_checked(intake),
            Err(TriageError::Validation(msg)) if msg.contains("Temperature")
        ));
        assert!(service.all().expect("Should list").is_empty());

        assert!(service.assess_checked(dengue_intake()).is_ok());
    }

    #[test]
    fn test_evaluate_does_not_record() {
        let service = create_test_service();
        let (prediction, _) = service.evaluate(&dengue_intake());
        assert_eq!(prediction.disease, Some(Disease::Dengue));
        assert!(service.all().expect("Should list").is_empty());
    }

    #[test]
    fn test_history_failure_does_not_fail_assessment() {
        let service = AssessmentService::new(Arc::new(InMemoryHistory::with_capacity(0)));
        let record = service.assess(dengue_intake());
        assert_eq!(record.prediction.disease, Some(Disease::Dengue));
        assert!(service.all().expect("Should list").is_empty());
    }

    #[test]
    fn test_announcement_and_clear() {
        let service = create_test_service();
        assert_eq!(service.announcement().expect("Should tally"), None);

        service.assess(dengue_intake());
        service.assess(PatientIntake::new("Sita", 30, Gender::Female, "Delhi"));

        assert_eq!(
            service.announcement().expect("Should tally").as_deref(),
            Some("Patients 1 normal, 0 medium risk, 1 high risk")
        );

        service.clear_history().expect("Should clear");
        assert_eq!(service.tally().expect("Should tally").total(), 0);
    }

    #[test]
    fn test_custom_config() {
        let config = ScoringConfig::from_json(r#"{"risk": {"high_cutoff": 90}}"#).expect("Should parse");
        let service = AssessmentService::with_config(
            &config,
            WeightTable::builtin(),
            Arc::new(InMemoryHistory::new()),
        );
        let record = service.assess(dengue_intake());
        assert_eq!(record.risk.risk_score, 70);
        assert_eq!(record.risk.risk_level, RiskLevel::Medium);
    }
}
