//! Content data model: one record aggregating every supported content type.
//!
//! The record is never partially constructed: every sub-record exists with
//! empty defaults from creation, and only its leaf fields are edited. Which
//! sub-record the encoder and validator consult is selected by
//! [`ContentKind`] alone, so stale input under the other kinds is inert.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects which sub-record of a [`ContentRecord`] is active.
///
/// This is a closed set: `encode` and `validate` match on it exhaustively,
/// so adding a content type is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Url,
    Email,
    Phone,
    Sms,
    Wifi,
    Location,
    Vcard,
}

impl ContentKind {
    /// Every kind, in form-tab order.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::Url,
        Self::Email,
        Self::Phone,
        Self::Sms,
        Self::Wifi,
        Self::Location,
        Self::Vcard,
    ];

    /// Lowercase tag name, as used in export filenames (`qr-code-<tag>.png`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::Wifi => "wifi",
            Self::Location => "location",
            Self::Vcard => "vcard",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`ContentKind`] from a tag string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown content kind '{0}' (expected one of: text, url, email, phone, sms, wifi, location, vcard)")]
pub struct UnknownContentKind(String);

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "url" => Ok(Self::Url),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "sms" => Ok(Self::Sms),
            "wifi" => Ok(Self::Wifi),
            "location" => Ok(Self::Location),
            "vcard" => Ok(Self::Vcard),
            other => Err(UnknownContentKind(other.to_owned())),
        }
    }
}

/// WiFi authentication scheme, serialized as the literal token the
/// `WIFI:` payload format expects (`WPA`, `WEP`, or `nopass`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiSecurity {
    /// The literal token emitted into the `T:` field of a WiFi payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Nopass => "nopass",
        }
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email message fields (`mailto:` payload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailContent {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// SMS fields (`sms:` payload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsContent {
    pub number: String,
    pub message: String,
}

/// WiFi network credentials (`WIFI:` payload).
///
/// `hidden` is always carried into the payload's `H:` field, whether or not
/// an editing surface chooses to expose it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiContent {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    pub hidden: bool,
}

/// Geographic coordinates as decimal-degree text (`geo:` payload).
///
/// Kept as strings: the form edits them keystroke by keystroke, and the
/// validator decides whether they parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationContent {
    pub latitude: String,
    pub longitude: String,
}

/// Contact-card fields (vCard 3.0 payload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VcardContent {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub url: String,
}

/// The full editing state: every content type's fields, side by side.
///
/// `Default` yields the pristine form (all fields empty, WiFi security WPA,
/// hidden off). Lives for one editing session; the encoder and validator
/// only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    pub text: String,
    pub url: String,
    pub email: EmailContent,
    pub phone: String,
    pub sms: SmsContent,
    pub wifi: WifiContent,
    pub location: LocationContent,
    pub vcard: VcardContent,
}
