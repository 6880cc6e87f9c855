//! Patient intake and assessment records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::disease::Prediction;
use super::risk::RiskAssessment;
use super::vitals::Vitals;

/// Phone number used when the intake form leaves it blank.
pub const DEFAULT_ESCALATION_PHONE: &str = "917878000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// Single-letter form used in escalation summaries.
    #[must_use]
    pub fn initial(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
        }
    }
}

/// Raw patient data collected by the screening form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientIntake {
    pub name: String,

    /// Age in years
    pub age: i32,

    pub gender: Gender,

    /// Free-text city, ideally one of the surveillance cities
    pub city: String,

    /// Escalation contact, digits with optional `+`, `-` or spaces
    pub phone: String,

    /// Raw symptom phrases as entered or transcribed
    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub vitals: Vitals,
}

impl PatientIntake {
    /// Create intake data with default vitals and no symptoms.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32, gender: Gender, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            city: city.into(),
            phone: DEFAULT_ESCALATION_PHONE.to_string(),
            symptoms: Vec::new(),
            vitals: Vitals::default(),
        }
    }

    #[must_use]
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = vitals;
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Check the intake against the form bounds.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Patient name is required".to_string());
        }
        if !(1..=120).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if let Err(vitals_errors) = self.vitals.validate() {
            errors.extend(vitals_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Phone number with `+`, `-` and spaces stripped, or the default
    /// escalation number when nothing is left.
    #[must_use]
    pub fn dial_number(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| !matches!(c, '+' | '-' | ' '))
            .collect();
        if digits.is_empty() {
            DEFAULT_ESCALATION_PHONE.to_string()
        } else {
            digits
        }
    }
}

/// A completed assessment, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Unique identifier
    pub id: Uuid,

    #[serde(flatten)]
    pub intake: PatientIntake,

    pub prediction: Prediction,

    pub risk: RiskAssessment,

    /// Timestamp of assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PatientRecord {
    #[must_use]
    pub fn new(intake: PatientIntake, prediction: Prediction, risk: RiskAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            intake,
            prediction,
            risk,
            created_at: chrono::Utc::now(),
        }
    }

    /// One-line sidebar entry, e.g. `Ram - Dengue (HIGH)`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "{} - {} ({})",
            self.intake.name,
            self.prediction.label(),
            self.risk.risk_level
        )
    }
}
