//! Validation report types.

use std::fmt;

use serde::Serialize;

/// The closed set of field keys a validation finding can point at.
///
/// Serialized (and displayed) as the form's camelCase field identifiers,
/// so a consumer can route each message to the exact input it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Url,
    EmailTo,
    EmailSubject,
    Phone,
    SmsNumber,
    SmsMessage,
    WifiSsid,
    WifiPassword,
    Latitude,
    Longitude,
    VcardEmail,
    VcardPhone,
    VcardUrl,
}

impl FieldKey {
    /// The camelCase key string, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::EmailTo => "emailTo",
            Self::EmailSubject => "emailSubject",
            Self::Phone => "phone",
            Self::SmsNumber => "smsNumber",
            Self::SmsMessage => "smsMessage",
            Self::WifiSsid => "wifiSsid",
            Self::WifiPassword => "wifiPassword",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::VcardEmail => "vcardEmail",
            Self::VcardPhone => "vcardPhone",
            Self::VcardUrl => "vcardUrl",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding: which field, and what to tell the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FieldError {
    /// The input field the message belongs to.
    pub field: FieldKey,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Format the finding for human-readable output: `{field}: {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {}", self.field, self.message)
    }
}

/// Result of validating one content kind against a record.
///
/// `valid` is the only gate a caller needs: it is true exactly when the
/// active kind's presence condition was met AND no field check failed.
/// An untouched form is invalid but carries no errors.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Whether the active kind's required field(s) hold any content.
    pub has_content: bool,
    /// Whether the record is ready to encode for the active kind.
    pub valid: bool,
    /// Field-level findings, in form field order.
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Build a report, deriving `valid` from the two inputs.
    #[must_use]
    pub fn new(has_content: bool, errors: Vec<FieldError>) -> Self {
        Self {
            has_content,
            valid: has_content && errors.is_empty(),
            errors,
        }
    }

    /// Number of field errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// The message attached to `field`, if that field has a finding.
    #[must_use]
    pub fn message_for(&self, field: FieldKey) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
