//! Escalation: hand a high-risk patient over to a doctor.
//!
//! Builds a one-line clinical summary, a `wa.me` messaging link carrying it,
//! and a QR code of that link for scanning from a phone.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::adapters::sanitize::sanitize;
use crate::domain::PatientRecord;
use crate::{Result, TriageError};

const MESSAGE_BASE_URL: &str = "https://wa.me";

/// Characters left unescaped in the message text: alphanumerics and `_.-~/`.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Summary and link for one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub summary: String,
    pub phone: String,
    pub link: String,
}

impl Escalation {
    /// Prepare an escalation for a recorded assessment.
    #[must_use]
    pub fn for_record(record: &PatientRecord) -> Self {
        let summary = escalation_summary(record);
        let phone = record.intake.dial_number();
        let link = message_link(&phone, &summary);

        tracing::info!("Prepared escalation link: {}", sanitize(&link));

        Self {
            summary,
            phone,
            link,
        }
    }

    /// QR code of the link as an SVG document.
    ///
    /// # Errors
    /// Returns `TriageError::Qr` if the link does not fit in a QR code.
    pub fn qr_svg(&self) -> Result<String> {
        qr_svg(&self.link)
    }
}

/// e.g. `Patient: Ram, 45M, Dengue 86%, BP 90/60, Risk: HIGH`
#[must_use]
pub fn escalation_summary(record: &PatientRecord) -> String {
    let intake = &record.intake;
    format!(
        "Patient: {}, {}{}, {} {:.0}%, BP {}/{}, Risk: {}",
        intake.name,
        intake.age,
        intake.gender.initial(),
        record.prediction.label(),
        record.prediction.confidence,
        intake.vitals.bp_systolic,
        intake.vitals.bp_diastolic,
        record.risk.risk_level
    )
}

/// `https://wa.me/{phone}?text={encoded}`
#[must_use]
pub fn message_link(phone: &str, text: &str) -> String {
    format!(
        "{MESSAGE_BASE_URL}/{phone}?text={}",
        utf8_percent_encode(text, MESSAGE_TEXT)
    )
}

/// Render any payload as a QR code SVG.
///
/// # Errors
/// Returns `TriageError::Qr` if encoding fails.
pub fn qr_svg(payload: &str) -> Result<String> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| TriageError::Qr(format!("QR generation failed: {e}")))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .max_dimensions(300, 300)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .quiet_zone(true)
        .build())
}
