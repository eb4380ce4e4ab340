//! Shared shape checks used by the validator.
//!
//! These are purely syntactic: no network access, no normalization beyond
//! the trimming each check documents.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Loose email shape: something before `@`, something after, and a dot in
/// the domain part. No whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid email pattern: {err}"),
    }
});

/// Phone shape: optional leading `+`, then 7 to 15 characters drawn from
/// digits, spaces, hyphens, and parentheses.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^\+?[0-9\s\-()]{7,15}$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid phone pattern: {err}"),
    }
});

/// Check an email address shape against the raw value (no trimming:
/// stray whitespace is a user error the form should surface).
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a phone number shape. The value is trimmed first; interior
/// spaces still count toward the 7..=15 length window.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value.trim())
}

/// Complete a URL the way the encoder does: values already starting with
/// the literal `http` pass through, everything else gets `https://`.
#[must_use]
pub fn complete_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_owned()
    } else {
        format!("https://{value}")
    }
}

/// Check that a URL parses after prefix completion. Purely syntactic.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(&complete_url(value)).is_ok()
}

/// Which coordinate a value claims to be; fixes the allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAxis {
    /// Degrees in `[-90, 90]`.
    Latitude,
    /// Degrees in `[-180, 180]`.
    Longitude,
}

impl CoordinateAxis {
    const fn bound(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

/// Check that a coordinate parses as a finite decimal number within the
/// axis range. Trims before parsing; `NaN` and infinities fail the parse
/// step, out-of-range finite values fail the range step.
#[must_use]
pub fn is_valid_coordinate(value: &str, axis: CoordinateAxis) -> bool {
    let Ok(degrees) = value.trim().parse::<f64>() else {
        return false;
    };
    degrees.is_finite() && degrees.abs() <= axis.bound()
}
