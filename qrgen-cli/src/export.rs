//! File export: render a payload and write it next to the caller.
//!
//! The output format follows the file extension, the way the original
//! download picked its format from the chosen filename: `.svg` produces
//! vector markup, everything else PNG.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use qrgen::ContentKind;
use qrgen_render::{RenderOptions, render_png, render_svg};
use tracing::debug;

/// Output encodings the export path can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

/// Pick the export format from the output path's extension.
/// Only `.svg` (any case) selects SVG; everything else is PNG.
#[must_use]
pub fn format_for_path(path: &Path) -> ExportFormat {
    let is_svg = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        ExportFormat::Svg
    } else {
        ExportFormat::Png
    }
}

/// Default export filename for a content kind: `qr-code-<tag>.png`.
#[must_use]
pub fn default_output_path(kind: ContentKind) -> PathBuf {
    PathBuf::from(format!("qr-code-{kind}.png"))
}

/// What an export wrote and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub bytes_written: usize,
}

/// Render `payload` and write it to `path` in the format the extension
/// selects.
///
/// # Errors
///
/// Returns an error when the payload exceeds QR capacity, when image
/// serialization fails, or when the file cannot be written.
pub fn export_file(
    payload: &str,
    options: &RenderOptions,
    path: &Path,
) -> anyhow::Result<ExportOutcome> {
    let format = format_for_path(path);
    let bytes = match format {
        ExportFormat::Svg => render_svg(payload, options)?.into_bytes(),
        ExportFormat::Png => render_png(payload, options)?,
    };
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write QR code to {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote QR code");
    Ok(ExportOutcome {
        path: path.to_path_buf(),
        format,
        bytes_written: bytes.len(),
    })
}
