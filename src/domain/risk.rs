//! Risk level classification types.

use serde::{Deserialize, Serialize};

/// Overall patient risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Single mild symptom, normal vitals
    Low,
    /// Several symptoms or abnormal vitals
    Medium,
    /// Elderly, heavy symptom burden, or strong disease signal
    High,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - Home care and observation",
            Self::Medium => "Medium risk - Clinic follow-up recommended",
            Self::High => "High risk - Escalate to hospital",
        }
    }

    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (76, 175, 80),    // Green (#4CAF50)
            Self::Medium => (255, 152, 0), // Orange (#FF9800)
            Self::High => (211, 47, 47),   // Red (#D32F2F)
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of the risk classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Thresholded tier
    pub risk_level: RiskLevel,

    /// Additive point total, clamped to 0-100
    pub risk_score: u32,
}

/// Per-factor points behind a risk score, before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub age: i64,
    pub symptom_burden: i64,
    pub blood_pressure: i64,
    pub temperature: i64,
    pub confidence: i64,
    pub confidence_bonus: i64,
}

impl RiskBreakdown {
    /// Unclamped sum of every factor, saturating at the `i64` bounds.
    #[must_use]
    pub fn total(&self) -> i64 {
        [
            self.symptom_burden,
            self.blood_pressure,
            self.temperature,
            self.confidence,
            self.confidence_bonus,
        ]
        .into_iter()
        .fold(self.age, i64::saturating_add)
    }
}

/// Count of assessed patients per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTally {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskTally {
    /// Tally a sequence of risk levels.
    pub fn from_levels<I: IntoIterator<Item = RiskLevel>>(levels: I) -> Self {
        levels.into_iter().fold(Self::default(), |mut tally, level| {
            match level {
                RiskLevel::Low => tally.low += 1,
                RiskLevel::Medium => tally.medium += 1,
                RiskLevel::High => tally.high += 1,
            }
            tally
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Spoken status line for the ward announcement.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!(
            "Patients {} normal, {} medium risk, {} high risk",
            self.low, self.medium, self.high
        )
    }
}
