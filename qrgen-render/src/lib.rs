//! # qrgen-render
//!
//! Turns an encoded payload string into a scannable QR image: an RGB
//! pixel buffer, PNG bytes, SVG markup, or a Unicode half-block string
//! for terminal preview. The QR matrix itself comes from the `qrcode`
//! codec; this crate owns scaling, quiet zone, and color handling.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrgen_render::{RenderOptions, render_png};
//!
//! let options = RenderOptions::default();
//! let png = render_png("WIFI:T:WPA;S:HomeNet;P:hunter2hunter2;H:false;;", &options)?;
//! assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
//! # Ok::<(), qrgen_render::RenderError>(())
//! ```

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::QrCode;
use qrcode::render::{svg, unicode};
use thiserror::Error;
use tracing::debug;

/// Default output edge in pixels; matches the largest export preset.
pub const DEFAULT_PIXEL_WIDTH: u32 = 1024;

/// Default quiet-zone width in modules.
pub const DEFAULT_MARGIN: u32 = 2;

/// QR error correction level: how much of the symbol may be damaged or
/// obscured while staying readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EcLevel {
    /// Low, about 7% recovery.
    L,
    /// Medium, about 15% recovery.
    #[default]
    M,
    /// Quartile, about 25% recovery.
    Q,
    /// High, about 30% recovery.
    H,
}

impl EcLevel {
    /// Single-letter name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`EcLevel`] from its letter name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown error correction level '{0}' (expected L, M, Q, or H)")]
pub struct UnknownEcLevel(String);

impl FromStr for EcLevel {
    type Err = UnknownEcLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(Self::L),
            "M" | "m" => Ok(Self::M),
            "Q" | "q" => Ok(Self::Q),
            "H" | "h" => Ok(Self::H),
            other => Err(UnknownEcLevel(other.to_owned())),
        }
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => Self::L,
            EcLevel::M => Self::M,
            EcLevel::Q => Self::Q,
            EcLevel::H => Self::H,
        }
    }
}

/// An opaque RGB color, written `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// `#000000`.
    pub const BLACK: Self = Self([0, 0, 0]);
    /// `#ffffff`.
    pub const WHITE: Self = Self([255, 255, 255]);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self([red, green, blue]) = self;
        write!(f, "#{red:02x}{green:02x}{blue:02x}")
    }
}

/// Error returned when parsing a [`Color`] from a hex literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid color literal '{0}' (expected #RRGGBB)")]
pub struct InvalidColor(String);

fn hex_component(hex: &str, start: usize, literal: &str) -> Result<u8, InvalidColor> {
    hex.get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .ok_or_else(|| InvalidColor(literal.to_owned()))
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|rest| rest.len() == 6)
            .ok_or_else(|| InvalidColor(s.to_owned()))?;
        Ok(Self([
            hex_component(hex, 0, s)?,
            hex_component(hex, 2, s)?,
            hex_component(hex, 4, s)?,
        ]))
    }
}

/// How to turn a payload into pixels.
///
/// `pixel_width` is a target, not a promise: the raster output uses a
/// whole number of pixels per module, so the actual edge is the largest
/// multiple of the module grid that fits the target (and never below one
/// pixel per module).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub ec_level: EcLevel,
    pub pixel_width: u32,
    pub margin: u32,
    pub dark: Color,
    pub light: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::default(),
            pixel_width: DEFAULT_PIXEL_WIDTH,
            margin: DEFAULT_MARGIN,
            dark: Color::BLACK,
            light: Color::WHITE,
        }
    }
}

/// Rendering failure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload does not fit any QR version at the requested error
    /// correction level, or is otherwise unencodable.
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    /// PNG serialization failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Render the payload into an RGB pixel buffer.
///
/// The margin is painted in the light color around the module grid, and
/// every module becomes a `scale x scale` pixel block.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] when the payload exceeds QR capacity
/// at the configured error correction level.
pub fn render_image(payload: &str, options: &RenderOptions) -> Result<RgbImage, RenderError> {
    let code = QrCode::with_error_correction_level(payload, options.ec_level.into())?;
    // symbol versions cap at 177 modules per side
    let module_count = u32::try_from(code.width()).unwrap_or(u32::MAX);
    let total = module_count.saturating_add(options.margin.saturating_mul(2));
    let scale = options
        .pixel_width
        .checked_div(total)
        .map_or(1, |per_module| per_module.max(1));
    let edge = total.saturating_mul(scale);
    debug!(
        payload_len = payload.len(),
        modules = module_count,
        scale,
        edge,
        "rendering QR image"
    );

    let mut image = RgbImage::from_pixel(edge, edge, Rgb(options.light.0));
    let modules = code.to_colors();
    let mut index = 0usize;
    for y in 0..module_count {
        for x in 0..module_count {
            if modules[index] == qrcode::Color::Dark {
                let left = options.margin.saturating_add(x).saturating_mul(scale);
                let top = options.margin.saturating_add(y).saturating_mul(scale);
                for dy in 0..scale {
                    for dx in 0..scale {
                        image.put_pixel(left + dx, top + dy, Rgb(options.dark.0));
                    }
                }
            }
            index += 1;
        }
    }
    Ok(image)
}

/// Render the payload and serialize it as PNG bytes.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] when the payload exceeds QR capacity,
/// or [`RenderError::Image`] when PNG serialization fails.
pub fn render_png(payload: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let image = render_image(payload, options)?;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Render the payload as SVG markup with the configured colors.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] when the payload exceeds QR capacity.
pub fn render_svg(payload: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(payload, options.ec_level.into())?;
    let dark = options.dark.to_string();
    let light = options.light.to_string();
    let markup = code
        .render()
        .min_dimensions(options.pixel_width, options.pixel_width)
        .quiet_zone(options.margin > 0)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build();
    Ok(markup)
}

/// Render the payload as Unicode half-block art for terminal preview.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] when the payload exceeds QR capacity.
pub fn render_terminal(payload: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(payload, options.ec_level.into())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(options.margin > 0)
        .build())
}
