//! Candidate diseases and prediction results.

use serde::{Deserialize, Serialize};

use super::symptom::Symptom;

/// Label reported when no candidate clears the confidence floor.
pub const NO_DISEASE: &str = "No Disease";

/// The closed set of candidate diseases.
///
/// Declaration order is the scoring and tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disease {
    Dengue,
    Typhoid,
    Flu,
    #[serde(rename = "TB")]
    Tb,
    Malaria,
    #[serde(rename = "COVID-19")]
    Covid19,
}

impl Disease {
    /// Number of candidate diseases.
    pub const COUNT: usize = 6;

    /// Every candidate, in tie-break order.
    pub const ALL: [Disease; Self::COUNT] = [
        Self::Dengue,
        Self::Typhoid,
        Self::Flu,
        Self::Tb,
        Self::Malaria,
        Self::Covid19,
    ];

    /// Display name, as used on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dengue => "Dengue",
            Self::Typhoid => "Typhoid",
            Self::Flu => "Flu",
            Self::Tb => "TB",
            Self::Malaria => "Malaria",
            Self::Covid19 => "COVID-19",
        }
    }

    /// Position in [`Disease::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Canonical presenting symptoms for this disease.
    #[must_use]
    pub fn canonical_symptoms(&self) -> &'static [Symptom; 6] {
        use Symptom::*;
        match self {
            Self::Dengue => &[Fever, Headache, JointPain, Rash, Bleeding, Nausea],
            Self::Typhoid => &[Fever, Headache, StomachPain, Diarrhea, Weakness, LossOfAppetite],
            Self::Flu => &[Fever, Cough, SoreThroat, BodyAche, Fatigue, RunnyNose],
            Self::Tb => &[Cough, Fever, WeightLoss, NightSweats, ChestPain, Fatigue],
            Self::Malaria => &[Fever, Chills, Headache, Nausea, Sweating, Fatigue],
            Self::Covid19 => &[Fever, Cough, BreathingDifficulty, Fatigue, LossOfTaste, BodyAche],
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown disease name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown disease: {0}")]
pub struct UnknownDisease(pub String);

impl std::str::FromStr for Disease {
    type Err = UnknownDisease;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDisease(s.to_string()))
    }
}

/// Outcome of a disease prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning disease, or `None` for "No Disease".
    #[serde(with = "disease_label")]
    pub disease: Option<Disease>,

    /// Mean symptom-weight agreement on a 0-100 scale.
    pub confidence: f64,
}

impl Prediction {
    /// The "No Disease" result.
    #[must_use]
    pub fn none() -> Self {
        Self {
            disease: None,
            confidence: 0.0,
        }
    }

    /// A positive prediction.
    #[must_use]
    pub fn detected(disease: Disease, confidence: f64) -> Self {
        Self {
            disease: Some(disease),
            confidence,
        }
    }

    /// Disease name or the "No Disease" sentinel.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.disease.map_or(NO_DISEASE, |d| d.name())
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.disease.is_none()
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.label(), self.confidence)
    }
}

/// Serializes `Option<Disease>` as its display name or "No Disease".
mod disease_label {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{Disease, NO_DISEASE};

    pub fn serialize<S: Serializer>(value: &Option<Disease>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map_or(NO_DISEASE, |d| d.name()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Disease>, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label == NO_DISEASE {
            return Ok(None);
        }
        label.parse::<Disease>().map(Some).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let names: Vec<_> = Disease::ALL.iter().map(Disease::name).collect();
        assert_eq!(names, ["Dengue", "Typhoid", "Flu", "TB", "Malaria", "COVID-19"]);
        for (i, d) in Disease::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("COVID-19".parse::<Disease>(), Ok(Disease::Covid19));
        assert_eq!("TB".parse::<Disease>(), Ok(Disease::Tb));
        assert!("tb".parse::<Disease>().is_err());
        assert!(NO_DISEASE.parse::<Disease>().is_err());
    }

    #[test]
    fn test_canonical_symptoms() {
        assert!(Disease::Malaria.canonical_symptoms().contains(&Symptom::Chills));
        assert!(Disease::Covid19
            .canonical_symptoms()
            .contains(&Symptom::LossOfTaste));
        assert!(!Disease::Tb.canonical_symptoms().contains(&Symptom::Rash));
    }

    #[test]
    fn test_prediction_label() {
        assert_eq!(Prediction::none().label(), "No Disease");
        assert_eq!(Prediction::detected(Disease::Tb, 85.0).label(), "TB");
        assert_eq!(
            Prediction::detected(Disease::Covid19, 72.5).to_string(),
            "COVID-19 (72.5%)"
        );
    }

    #[test]
    fn test_prediction_serde() {
        let json = serde_json::to_string(&Prediction::none()).expect("Should serialize");
        assert_eq!(json, r#"{"disease":"No Disease","confidence":0.0}"#);

        let parsed: Prediction =
            serde_json::from_str(r#"{"disease":"COVID-19","confidence":90.0}"#).expect("Should parse");
        assert_eq!(parsed.disease, Some(Disease::Covid19));

        assert!(serde_json::from_str::<Prediction>(r#"{"disease":"Measles","confidence":1.0}"#).is_err());
    }
}
