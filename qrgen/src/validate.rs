//! Field validation for each content kind.
//!
//! Two independent questions per kind: does the active sub-record hold
//! any content at all (the presence gate), and do the filled-in fields
//! pass their shape checks. Only the active kind is inspected, so invalid
//! leftovers under other kinds never surface when switching kinds.

use crate::content::{
    ContentKind, ContentRecord, EmailContent, LocationContent, SmsContent, VcardContent,
    WifiContent, WifiSecurity,
};
use crate::pattern::{self, CoordinateAxis};
use crate::report::{FieldError, FieldKey, ValidationReport};

const MAX_EMAIL_SUBJECT_CHARS: usize = 100;
const MAX_SMS_MESSAGE_CHARS: usize = 160;
const MAX_WIFI_SSID_CHARS: usize = 32;
const MIN_WIFI_PASSWORD_CHARS: usize = 8;

fn field_error(field: FieldKey, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_owned(),
    }
}

/// Validate the active content kind against the record.
///
/// Pure and total: never fails, never mutates. Primary scheme fields
/// (the URL, the email address, the phone/SMS number) are shape-checked
/// only once they hold content, so a blank form reports no errors even
/// though it is not valid. Auxiliary constraints (length caps, the WiFi
/// password policy, coordinate ranges, optional vCard fields) are checked
/// unconditionally. Returns the presence gate and collected field errors
/// folded into a single report.
#[must_use]
pub fn validate(kind: ContentKind, record: &ContentRecord) -> ValidationReport {
    let mut errors = Vec::new();

    let has_content = match kind {
        ContentKind::Text => !record.text.trim().is_empty(),
        ContentKind::Url => check_url(&record.url, &mut errors),
        ContentKind::Email => check_email(&record.email, &mut errors),
        ContentKind::Phone => check_phone(&record.phone, &mut errors),
        ContentKind::Sms => check_sms(&record.sms, &mut errors),
        ContentKind::Wifi => check_wifi(&record.wifi, &mut errors),
        ContentKind::Location => check_location(&record.location, &mut errors),
        ContentKind::Vcard => check_vcard(&record.vcard, &mut errors),
    };

    ValidationReport::new(has_content, errors)
}

fn check_url(url: &str, errors: &mut Vec<FieldError>) -> bool {
    let present = !url.trim().is_empty();
    if present && !pattern::is_valid_url(url) {
        errors.push(field_error(FieldKey::Url, "Please enter a valid URL"));
    }
    present
}

fn check_email(email: &EmailContent, errors: &mut Vec<FieldError>) -> bool {
    let present = !email.to.trim().is_empty();
    if present && !pattern::is_valid_email(&email.to) {
        errors.push(field_error(
            FieldKey::EmailTo,
            "Please enter a valid email address",
        ));
    }
    if email.subject.chars().count() > MAX_EMAIL_SUBJECT_CHARS {
        errors.push(field_error(
            FieldKey::EmailSubject,
            "Subject should be less than 100 characters",
        ));
    }
    present
}

fn check_phone(phone: &str, errors: &mut Vec<FieldError>) -> bool {
    let present = !phone.trim().is_empty();
    if present && !pattern::is_valid_phone(phone) {
        errors.push(field_error(
            FieldKey::Phone,
            "Please enter a valid phone number",
        ));
    }
    present
}

fn check_sms(sms: &SmsContent, errors: &mut Vec<FieldError>) -> bool {
    let present = !sms.number.trim().is_empty();
    if present && !pattern::is_valid_phone(&sms.number) {
        errors.push(field_error(
            FieldKey::SmsNumber,
            "Please enter a valid phone number",
        ));
    }
    if sms.message.chars().count() > MAX_SMS_MESSAGE_CHARS {
        errors.push(field_error(
            FieldKey::SmsMessage,
            "SMS message should be less than 160 characters",
        ));
    }
    present
}

fn check_wifi(wifi: &WifiContent, errors: &mut Vec<FieldError>) -> bool {
    if wifi.ssid.chars().count() > MAX_WIFI_SSID_CHARS {
        errors.push(field_error(
            FieldKey::WifiSsid,
            "Network name should be less than 32 characters",
        ));
    }
    // open networks carry no password, so the length floor only applies
    // to secured ones
    if wifi.security != WifiSecurity::Nopass
        && wifi.password.chars().count() < MIN_WIFI_PASSWORD_CHARS
    {
        errors.push(field_error(
            FieldKey::WifiPassword,
            "Password should be at least 8 characters",
        ));
    }
    !wifi.ssid.trim().is_empty()
}

fn check_location(location: &LocationContent, errors: &mut Vec<FieldError>) -> bool {
    if !location.latitude.is_empty()
        && !pattern::is_valid_coordinate(&location.latitude, CoordinateAxis::Latitude)
    {
        errors.push(field_error(
            FieldKey::Latitude,
            "Latitude must be between -90 and 90",
        ));
    }
    if !location.longitude.is_empty()
        && !pattern::is_valid_coordinate(&location.longitude, CoordinateAxis::Longitude)
    {
        errors.push(field_error(
            FieldKey::Longitude,
            "Longitude must be between -180 and 180",
        ));
    }
    !location.latitude.trim().is_empty() && !location.longitude.trim().is_empty()
}

fn check_vcard(vcard: &VcardContent, errors: &mut Vec<FieldError>) -> bool {
    if !vcard.email.is_empty() && !pattern::is_valid_email(&vcard.email) {
        errors.push(field_error(
            FieldKey::VcardEmail,
            "Please enter a valid email address",
        ));
    }
    if !vcard.phone.is_empty() && !pattern::is_valid_phone(&vcard.phone) {
        errors.push(field_error(
            FieldKey::VcardPhone,
            "Please enter a valid phone number",
        ));
    }
    if !vcard.url.is_empty() && !pattern::is_valid_url(&vcard.url) {
        errors.push(field_error(FieldKey::VcardUrl, "Please enter a valid URL"));
    }
    !vcard.first_name.trim().is_empty() || !vcard.last_name.trim().is_empty()
}
