//! The `check` pipeline: load a JSON content record from disk, validate
//! one kind, and write the report.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use qrgen::{ContentKind, ContentRecord, ValidationReport, output, validate};

/// Read a JSON [`ContentRecord`] from `path`, validate `kind` against it,
/// and write the report (JSON or human-readable) to `writer`.
///
/// The returned report lets the caller decide the exit code; an invalid
/// record is a report, not an error.
///
/// # Errors
///
/// Returns an error when the file cannot be read, when it does not parse
/// as a content record, or when writing the report fails.
pub fn check_record_file(
    path: &Path,
    kind: ContentKind,
    json: bool,
    writer: &mut dyn Write,
) -> anyhow::Result<ValidationReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    let record: ContentRecord = serde_json::from_str(&content)
        .with_context(|| format!("Invalid content record JSON: {}", path.display()))?;

    let report = validate(kind, &record);
    if json {
        output::write_json(&report, writer)?;
    } else {
        output::write_human(&report, writer)?;
    }
    Ok(report)
}
