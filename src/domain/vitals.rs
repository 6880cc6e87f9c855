//! Basic vital signs captured at intake.

use serde::{Deserialize, Serialize};

/// Blood pressure and temperature reading.
///
/// Missing fields deserialize to the resting defaults (120/80 mmHg, 98.6 °F).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    /// Systolic blood pressure in mmHg
    pub bp_systolic: i32,

    /// Diastolic blood pressure in mmHg
    pub bp_diastolic: i32,

    /// Body temperature in °F
    pub temperature: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            bp_systolic: 120,
            bp_diastolic: 80,
            temperature: 98.6,
        }
    }
}

impl Vitals {
    #[must_use]
    pub fn new(bp_systolic: i32, bp_diastolic: i32, temperature: f64) -> Self {
        Self {
            bp_systolic,
            bp_diastolic,
            temperature,
        }
    }

    /// Check the reading against the intake form bounds.
    ///
    /// Scoring never calls this; it exists for callers that want to reject
    /// implausible input before it reaches the engine.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(60..=200).contains(&self.bp_systolic) {
            errors.push(format!(
                "Systolic BP {} out of range [60, 200]",
                self.bp_systolic
            ));
        }
        if !(40..=150).contains(&self.bp_diastolic) {
            errors.push(format!(
                "Diastolic BP {} out of range [40, 150]",
                self.bp_diastolic
            ));
        }
        if !(95.0..=110.0).contains(&self.temperature) {
            errors.push(format!(
                "Temperature {} out of range [95.0, 110.0]",
                self.temperature
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = Vitals::default();
        assert_eq!(v.bp_systolic, 120);
        assert_eq!(v.bp_diastolic, 80);
        assert!((v.temperature - 98.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let v: Vitals = serde_json::from_str(r#"{"bp_systolic": 85}"#).expect("Should parse");
        assert_eq!(v, Vitals::new(85, 80, 98.6));
    }

    #[test]
    fn test_validation() {
        assert!(Vitals::new(90, 60, 98.6).validate().is_ok());

        let errors = Vitals::new(210, 30, 112.0)
            .validate()
            .expect_err("Should reject out-of-range vitals");
        assert_eq!(errors.len(), 3);
    }
}
