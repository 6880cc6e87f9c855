//! Canonical symptom vocabulary and phrase normalization.
//!
//! Free-form or voice-derived phrases are mapped onto a closed set of 22
//! canonical symptoms. Matching is exact (case-insensitive, trimmed); there is
//! no fuzzy matching.

use serde::{Deserialize, Serialize};

/// A canonical symptom, usable as a weight-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "fever")]
    Fever,
    #[serde(rename = "headache")]
    Headache,
    #[serde(rename = "joint pain")]
    JointPain,
    #[serde(rename = "rash")]
    Rash,
    #[serde(rename = "bleeding")]
    Bleeding,
    #[serde(rename = "nausea")]
    Nausea,
    #[serde(rename = "stomach pain")]
    StomachPain,
    #[serde(rename = "diarrhea")]
    Diarrhea,
    #[serde(rename = "weakness")]
    Weakness,
    #[serde(rename = "loss of appetite")]
    LossOfAppetite,
    #[serde(rename = "cough")]
    Cough,
    #[serde(rename = "sore throat")]
    SoreThroat,
    #[serde(rename = "body ache")]
    BodyAche,
    #[serde(rename = "fatigue")]
    Fatigue,
    #[serde(rename = "runny nose")]
    RunnyNose,
    #[serde(rename = "weight loss")]
    WeightLoss,
    #[serde(rename = "night sweats")]
    NightSweats,
    #[serde(rename = "chest pain")]
    ChestPain,
    #[serde(rename = "chills")]
    Chills,
    #[serde(rename = "sweating")]
    Sweating,
    #[serde(rename = "breathing difficulty")]
    BreathingDifficulty,
    #[serde(rename = "loss of taste")]
    LossOfTaste,
}

impl Symptom {
    /// Number of canonical symptoms.
    pub const COUNT: usize = 22;

    /// Every canonical symptom, in weight-table order.
    pub const ALL: [Symptom; Self::COUNT] = [
        Self::Fever,
        Self::Headache,
        Self::JointPain,
        Self::Rash,
        Self::Bleeding,
        Self::Nausea,
        Self::StomachPain,
        Self::Diarrhea,
        Self::Weakness,
        Self::LossOfAppetite,
        Self::Cough,
        Self::SoreThroat,
        Self::BodyAche,
        Self::Fatigue,
        Self::RunnyNose,
        Self::WeightLoss,
        Self::NightSweats,
        Self::ChestPain,
        Self::Chills,
        Self::Sweating,
        Self::BreathingDifficulty,
        Self::LossOfTaste,
    ];

    /// The canonical lowercase key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::Headache => "headache",
            Self::JointPain => "joint pain",
            Self::Rash => "rash",
            Self::Bleeding => "bleeding",
            Self::Nausea => "nausea",
            Self::StomachPain => "stomach pain",
            Self::Diarrhea => "diarrhea",
            Self::Weakness => "weakness",
            Self::LossOfAppetite => "loss of appetite",
            Self::Cough => "cough",
            Self::SoreThroat => "sore throat",
            Self::BodyAche => "body ache",
            Self::Fatigue => "fatigue",
            Self::RunnyNose => "runny nose",
            Self::WeightLoss => "weight loss",
            Self::NightSweats => "night sweats",
            Self::ChestPain => "chest pain",
            Self::Chills => "chills",
            Self::Sweating => "sweating",
            Self::BreathingDifficulty => "breathing difficulty",
            Self::LossOfTaste => "loss of taste",
        }
    }

    /// Exact lookup of an already-normalized key.
    ///
    /// Returns `None` for anything outside the vocabulary; callers treat that
    /// as "no evidential weight", never as an error.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == key)
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a canonical symptom.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown symptom: {0}")]
pub struct UnknownSymptom(pub String);

impl std::str::FromStr for Symptom {
    type Err = UnknownSymptom;

    /// Parses through [`normalize`], so known variant phrases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::lookup(&normalized).ok_or(UnknownSymptom(normalized))
    }
}

/// Known variant phrases per canonical symptom.
///
/// Each list contains the canonical key itself.
pub const SYMPTOM_VARIANTS: [(Symptom, &[&str]); 6] = [
    (Symptom::Fever, &["fever", "high temperature", "temp"]),
    (Symptom::Headache, &["headache", "head pain", "head ache"]),
    (Symptom::Cough, &["cough", "coughing"]),
    (
        Symptom::BreathingDifficulty,
        &[
            "breathing difficulty",
            "shortness of breath",
            "breathlessness",
            "difficulty breathing",
        ],
    ),
    (
        Symptom::BodyAche,
        &["body ache", "body pain", "muscle pain", "aches"],
    ),
    (
        Symptom::StomachPain,
        &["stomach pain", "abdominal pain", "belly pain"],
    ),
];

/// Symptoms offered by the intake picker, in display order.
///
/// Transcript extraction scans for exactly these; `sweating` is not offered.
pub const PICKER_SYMPTOMS: [Symptom; 21] = [
    Symptom::Fever,
    Symptom::Headache,
    Symptom::Cough,
    Symptom::JointPain,
    Symptom::Rash,
    Symptom::Bleeding,
    Symptom::Nausea,
    Symptom::StomachPain,
    Symptom::Diarrhea,
    Symptom::Weakness,
    Symptom::LossOfAppetite,
    Symptom::SoreThroat,
    Symptom::BodyAche,
    Symptom::Fatigue,
    Symptom::RunnyNose,
    Symptom::WeightLoss,
    Symptom::NightSweats,
    Symptom::ChestPain,
    Symptom::Chills,
    Symptom::BreathingDifficulty,
    Symptom::LossOfTaste,
];

/// Normalize a raw symptom phrase.
///
/// Lowercases and trims, then maps a known variant onto its canonical key.
/// Unrecognized input is returned cleaned but otherwise unchanged; it will
/// simply match nothing in the weight table.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();

    let canonical = SYMPTOM_VARIANTS
        .iter()
        .find(|(_, variants)| variants.contains(&cleaned.as_str()))
        .map(|(symptom, _)| *symptom);

    match canonical {
        Some(symptom) => symptom.as_str().to_string(),
        None => cleaned,
    }
}

/// Pick out picker symptoms mentioned anywhere in a free-text transcript.
///
/// This is a plain substring scan over the lowercased text, returned in
/// picker order with no duplicates.
#[must_use]
pub fn extract_from_transcript(text: &str) -> Vec<Symptom> {
    let text = text.to_lowercase();
    PICKER_SYMPTOMS
        .iter()
        .copied()
        .filter(|symptom| text.contains(symptom.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize("Shortness Of Breath"), "breathing difficulty");
        assert_eq!(normalize("  TEMP "), "fever");
        assert_eq!(normalize("head ache"), "headache");
        assert_eq!(normalize("Coughing"), "cough");
        assert_eq!(normalize("aches"), "body ache");
        assert_eq!(normalize("Belly Pain"), "stomach pain");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize("unknown symptom"), "unknown symptom");
        assert_eq!(normalize("  Joint Pain "), "joint pain");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_exact_not_fuzzy() {
        // Near misses are not corrected.
        assert_eq!(normalize("feverish"), "feverish");
        assert_eq!(normalize("short of breath"), "short of breath");
    }

    #[test]
    fn test_vocabulary_is_closed() {
        assert_eq!(Symptom::ALL.len(), 22);
        for symptom in Symptom::ALL {
            assert_eq!(Symptom::lookup(symptom.as_str()), Some(symptom));
        }
        assert_eq!(Symptom::lookup("Fever"), None);
        assert_eq!(Symptom::lookup("dizziness"), None);
    }

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!("Muscle Pain".parse::<Symptom>(), Ok(Symptom::BodyAche));
        assert_eq!(" Night Sweats".parse::<Symptom>(), Ok(Symptom::NightSweats));
        assert_eq!(
            "dizziness".parse::<Symptom>(),
            Err(UnknownSymptom("dizziness".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_canonical_keys() {
        let json = serde_json::to_string(&Symptom::LossOfTaste).expect("Should serialize");
        assert_eq!(json, "\"loss of taste\"");
        let back: Symptom = serde_json::from_str("\"joint pain\"").expect("Should deserialize");
        assert_eq!(back, Symptom::JointPain);
    }

    #[test]
    fn test_extract_from_transcript() {
        let found = extract_from_transcript("I have a Fever and bad headache, also some joint pain");
        assert_eq!(found, vec![Symptom::Fever, Symptom::Headache, Symptom::JointPain]);
    }

    #[test]
    fn test_extract_skips_unlisted_symptoms() {
        assert!(extract_from_transcript("lots of sweating").is_empty());
        assert!(extract_from_transcript("").is_empty());
    }
}
