//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is excluded from this core module; that
//! concern belongs to the CLI layer.

use std::io::Write;

use crate::report::{FieldKey, ValidationReport};

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  QR PAYLOAD VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(
        writer,
        "  Content present:  {}",
        if report.has_content { "yes" } else { "no" }
    )?;
    writeln!(writer, "  Field errors:     {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FIELD ERRORS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for error in &report.errors {
            writeln!(writer, "  {}", error.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.valid {
        writeln!(writer, "\u{2713} Record is valid and ready to encode")?;
    } else {
        if !report.has_content {
            writeln!(
                writer,
                "\u{2717} No content to encode \u{2014} fill in the primary field for this kind"
            )?;
        }
        if !report.errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} field error(s) found",
                report.errors_count()
            )?;
            writeln!(writer)?;
            writeln!(writer, "  To fix:")?;

            let has_format_error = report.errors.iter().any(|e| {
                matches!(
                    e.field,
                    FieldKey::Url
                        | FieldKey::EmailTo
                        | FieldKey::Phone
                        | FieldKey::SmsNumber
                        | FieldKey::VcardEmail
                        | FieldKey::VcardPhone
                        | FieldKey::VcardUrl
                )
            });
            let has_length_error = report.errors.iter().any(|e| {
                matches!(
                    e.field,
                    FieldKey::EmailSubject
                        | FieldKey::SmsMessage
                        | FieldKey::WifiSsid
                        | FieldKey::WifiPassword
                )
            });
            let has_range_error = report
                .errors
                .iter()
                .any(|e| matches!(e.field, FieldKey::Latitude | FieldKey::Longitude));

            if has_format_error {
                writeln!(
                    writer,
                    "    - Email addresses need a local part, @, and a dotted domain"
                )?;
                writeln!(
                    writer,
                    "    - Phone numbers take 7-15 digits, spaces, hyphens, parentheses, optional leading +"
                )?;
                writeln!(
                    writer,
                    "    - URLs are parsed after https:// is prefixed when the scheme is missing"
                )?;
            }
            if has_length_error {
                writeln!(
                    writer,
                    "    - Length limits: subject 100, SMS message 160, SSID 32, password at least 8"
                )?;
            }
            if has_range_error {
                writeln!(
                    writer,
                    "    - Latitude must fall in -90..90 and longitude in -180..180"
                )?;
            }
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
