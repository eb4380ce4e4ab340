//! Integration tests for `qrgen::validate`: presence gating, per-field
//! shape checks, and the report surface.

use qrgen::{ContentKind, ContentRecord, FieldKey, WifiSecurity, validate};

fn record_with(populate: impl FnOnce(&mut ContentRecord)) -> ContentRecord {
    let mut record = ContentRecord::default();
    populate(&mut record);
    record
}

// ---- url ----

#[test]
fn test_url_bare_domain_is_valid() {
    let record = record_with(|r| r.url = "example.com".to_owned());
    let report = validate(ContentKind::Url, &record);
    assert!(report.valid, "got: {:?}", report.errors);
}

#[test]
fn test_url_malformed_is_flagged() {
    let record = record_with(|r| r.url = "http://".to_owned());
    let report = validate(ContentKind::Url, &record);
    assert!(!report.valid);
    assert_eq!(
        report.message_for(FieldKey::Url),
        Some("Please enter a valid URL")
    );
}

// ---- email ----

#[test]
fn test_email_shape_and_subject_cap() {
    let record = record_with(|r| r.email.to = "no-at-sign".to_owned());
    let report = validate(ContentKind::Email, &record);
    assert_eq!(
        report.message_for(FieldKey::EmailTo),
        Some("Please enter a valid email address")
    );

    let record = record_with(|r| {
        r.email.to = "a@b.com".to_owned();
        r.email.subject = "x".repeat(101);
    });
    let report = validate(ContentKind::Email, &record);
    assert!(!report.valid);
    assert_eq!(
        report.message_for(FieldKey::EmailSubject),
        Some("Subject should be less than 100 characters")
    );

    let record = record_with(|r| {
        r.email.to = "a@b.com".to_owned();
        r.email.subject = "x".repeat(100);
    });
    assert!(validate(ContentKind::Email, &record).valid);
}

#[test]
fn test_email_subject_cap_counts_characters_not_bytes() {
    // 100 two-byte characters stay within the cap
    let record = record_with(|r| {
        r.email.to = "a@b.com".to_owned();
        r.email.subject = "\u{e9}".repeat(100);
    });
    assert!(validate(ContentKind::Email, &record).valid);
}

// ---- phone / sms ----

#[test]
fn test_phone_rejects_letters() {
    let record = record_with(|r| r.phone = "abc".to_owned());
    let report = validate(ContentKind::Phone, &record);
    assert!(!report.valid);
    assert_eq!(
        report.message_for(FieldKey::Phone),
        Some("Please enter a valid phone number")
    );
}

#[test]
fn test_phone_accepts_formatted_numbers() {
    for number in ["(555) 123-4567", "5551234", "+43 1 23456"] {
        let record = record_with(|r| r.phone = number.to_owned());
        let report = validate(ContentKind::Phone, &record);
        assert!(report.valid, "number: {number}, got: {:?}", report.errors);
    }
}

#[test]
fn test_sms_number_and_message_cap() {
    let record = record_with(|r| {
        r.sms.number = "+123456789".to_owned();
        r.sms.message = "y".repeat(161);
    });
    let report = validate(ContentKind::Sms, &record);
    assert!(!report.valid);
    assert_eq!(
        report.message_for(FieldKey::SmsMessage),
        Some("SMS message should be less than 160 characters")
    );

    let record = record_with(|r| {
        r.sms.number = "+123456789".to_owned();
        r.sms.message = "y".repeat(160);
    });
    assert!(validate(ContentKind::Sms, &record).valid);
}

// ---- wifi ----

#[test]
fn test_wifi_ssid_cap_and_password_floor() {
    let record = record_with(|r| {
        r.wifi.ssid = "s".repeat(33);
        r.wifi.password = "longenough".to_owned();
    });
    let report = validate(ContentKind::Wifi, &record);
    assert_eq!(
        report.message_for(FieldKey::WifiSsid),
        Some("Network name should be less than 32 characters")
    );

    let record = record_with(|r| {
        r.wifi.ssid = "Net".to_owned();
        r.wifi.password = "short".to_owned();
    });
    let report = validate(ContentKind::Wifi, &record);
    assert!(!report.valid);
    assert_eq!(
        report.message_for(FieldKey::WifiPassword),
        Some("Password should be at least 8 characters")
    );
}

#[test]
fn test_wifi_open_network_needs_no_password() {
    let record = record_with(|r| {
        r.wifi.ssid = "Cafe".to_owned();
        r.wifi.security = WifiSecurity::Nopass;
    });
    let report = validate(ContentKind::Wifi, &record);
    assert!(report.valid, "got: {:?}", report.errors);
}

#[test]
fn test_wifi_wep_password_floor_applies() {
    let record = record_with(|r| {
        r.wifi.ssid = "Attic".to_owned();
        r.wifi.password = "1234567".to_owned();
        r.wifi.security = WifiSecurity::Wep;
    });
    let report = validate(ContentKind::Wifi, &record);
    assert!(!report.valid);
    assert!(report.message_for(FieldKey::WifiPassword).is_some());
}

// ---- location ----

#[test]
fn test_latitude_out_of_range_is_flagged() {
    let record = record_with(|r| {
        r.location.latitude = "100".to_owned();
        r.location.longitude = "16".to_owned();
    });
    let report = validate(ContentKind::Location, &record);
    assert!(!report.valid);
    assert_eq!(report.errors_count(), 1);
    assert_eq!(
        report.message_for(FieldKey::Latitude),
        Some("Latitude must be between -90 and 90")
    );
}

#[test]
fn test_location_boundaries_inclusive() {
    let record = record_with(|r| {
        r.location.latitude = "-90".to_owned();
        r.location.longitude = "180".to_owned();
    });
    let report = validate(ContentKind::Location, &record);
    assert!(report.valid, "got: {:?}", report.errors);
}

#[test]
fn test_location_non_numeric_is_flagged() {
    let record = record_with(|r| {
        r.location.latitude = "north".to_owned();
        r.location.longitude = "200".to_owned();
    });
    let report = validate(ContentKind::Location, &record);
    assert!(report.message_for(FieldKey::Latitude).is_some());
    assert_eq!(
        report.message_for(FieldKey::Longitude),
        Some("Longitude must be between -180 and 180")
    );
}

#[test]
fn test_location_needs_both_coordinates() {
    let record = record_with(|r| r.location.latitude = "48".to_owned());
    let report = validate(ContentKind::Location, &record);
    assert!(!report.has_content);
    assert!(!report.valid);
    assert_eq!(report.errors_count(), 0);
}

// ---- vcard ----

#[test]
fn test_vcard_name_alone_is_enough() {
    let record = record_with(|r| r.vcard.first_name = "Ann".to_owned());
    assert!(validate(ContentKind::Vcard, &record).valid);

    let record = record_with(|r| r.vcard.last_name = "Doe".to_owned());
    assert!(validate(ContentKind::Vcard, &record).valid);
}

#[test]
fn test_vcard_optional_fields_checked_when_filled() {
    let record = record_with(|r| {
        r.vcard.first_name = "Ann".to_owned();
        r.vcard.email = "bad".to_owned();
        r.vcard.phone = "bad".to_owned();
        r.vcard.url = "http://".to_owned();
    });
    let report = validate(ContentKind::Vcard, &record);
    assert!(!report.valid);
    assert_eq!(report.errors_count(), 3);
    assert!(report.message_for(FieldKey::VcardEmail).is_some());
    assert!(report.message_for(FieldKey::VcardPhone).is_some());
    assert!(report.message_for(FieldKey::VcardUrl).is_some());
}

#[test]
fn test_vcard_contact_fields_without_name_lack_content() {
    let record = record_with(|r| r.vcard.email = "a@b.com".to_owned());
    let report = validate(ContentKind::Vcard, &record);
    assert!(!report.has_content);
    assert!(!report.valid);
    assert_eq!(report.errors_count(), 0);
}

// ---- report surface ----

#[test]
fn test_report_serializes_with_camel_case_field_keys() {
    let record = record_with(|r| r.phone = "abc".to_owned());
    let report = validate(ContentKind::Phone, &record);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["has_content"], true);
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["field"], "phone");
    assert_eq!(
        json["errors"][0]["message"],
        "Please enter a valid phone number"
    );
}

#[test]
fn test_error_order_follows_field_order() {
    let record = record_with(|r| {
        r.email.to = "bad".to_owned();
        r.email.subject = "x".repeat(101);
    });
    let report = validate(ContentKind::Email, &record);
    let fields: Vec<FieldKey> = report.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![FieldKey::EmailTo, FieldKey::EmailSubject]);
}
