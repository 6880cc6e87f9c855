//! Domain layer: Core screening types and scoring logic.
//!
//! Everything here is pure and synchronous. The predictor and classifier
//! hold only immutable tables and configuration, so they can be shared
//! across threads without coordination.

mod classification;
mod disease;
mod patient;
mod prediction;
mod risk;
mod symptom;
pub mod trend;
mod vitals;
mod weights;

pub use classification::RiskClassifier;
pub use disease::{Disease, Prediction, UnknownDisease, NO_DISEASE};
pub use patient::{Gender, PatientIntake, PatientRecord, DEFAULT_ESCALATION_PHONE};
pub use prediction::{DiseasePredictor, DiseaseScores};
pub use risk::{RiskAssessment, RiskBreakdown, RiskLevel, RiskTally};
pub use symptom::{
    extract_from_transcript, normalize, Symptom, UnknownSymptom, PICKER_SYMPTOMS, SYMPTOM_VARIANTS,
};
pub use trend::{City, DiseaseTrend, TrendDirection};
pub use vitals::Vitals;
pub use weights::{WeightTable, DEFAULT_WEIGHTS};
