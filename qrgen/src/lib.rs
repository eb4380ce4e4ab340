//! # qrgen
//!
//! Typed QR payload encoding and field validation.
//!
//! This crate provides a clean separation between **payload encoding**
//! (the scheme strings a QR module consumes) and **field validation**
//! (per-kind shape checks with a structured report). Rendering the
//! payload into an actual QR image lives in `qrgen-render`.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrgen::{ContentKind, ContentRecord, encode, validate};
//!
//! let mut record = ContentRecord::default();
//! record.wifi.ssid = "HomeNet".to_owned();
//! record.wifi.password = "hunter2hunter2".to_owned();
//!
//! let report = validate(ContentKind::Wifi, &record);
//! assert!(report.valid);
//!
//! let payload = encode(ContentKind::Wifi, &record);
//! assert_eq!(payload, "WIFI:T:WPA;S:HomeNet;P:hunter2hunter2;H:false;;");
//! ```

mod content;
pub mod output;
mod pattern;
mod payload;
mod report;
mod validate;

pub use content::{
    ContentKind, ContentRecord, EmailContent, LocationContent, SmsContent, UnknownContentKind,
    VcardContent, WifiContent, WifiSecurity,
};
pub use payload::encode;
pub use report::{FieldError, FieldKey, ValidationReport};
pub use validate::validate;
