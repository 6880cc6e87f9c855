//! # Symptriage
//!
//! Rule-based symptom triage for community health screening.
//!
//! This crate provides:
//! - Symptom normalization from free-text and voice-transcribed phrases
//! - Weighted disease prediction over a fixed candidate set
//! - Additive risk scoring into LOW / MEDIUM / HIGH tiers
//! - City disease-trend summaries and doctor escalation links
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core screening types and scoring (symptoms, diseases, risk)
//! - `ports`: Trait definitions for history and trend data
//! - `adapters`: Concrete implementations (in-memory history, mock trends)
//! - `application`: Use cases orchestrating domain and ports
//! - `config`: Thresholds, multipliers and point values

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::{
    normalize, Disease, DiseasePredictor, Prediction, RiskAssessment, RiskClassifier, RiskLevel,
    Symptom, Vitals,
};

/// Result type for Symptriage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Main error type for Symptriage
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Weight for {symptom}/{disease} must be within [0, 1], got {weight}")]
    InvalidWeight {
        symptom: String,
        disease: String,
        weight: f64,
    },

    #[error("History operation failed: {0}")]
    History(#[from] adapters::HistoryError),

    #[error("QR code error: {0}")]
    Qr(String),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Predict the most likely disease with the built-in weights and rules.
#[must_use]
pub fn predict<S: AsRef<str>>(symptoms: &[S], age: i32, city: &str, vitals: &Vitals) -> Prediction {
    DiseasePredictor::default().predict(symptoms, age, city, vitals)
}

/// Classify patient risk with the default point values and cutoffs.
#[must_use]
pub fn classify<S: AsRef<str>>(
    age: i32,
    symptoms: &[S],
    vitals: &Vitals,
    city: &str,
    disease: &str,
    confidence: f64,
) -> RiskAssessment {
    RiskClassifier::default().classify(age, symptoms, vitals, city, disease, confidence)
}
