//! Payload string assembly: one exact output contract per content kind.
//!
//! Scanning apps dispatch on the payload's scheme prefix (`mailto:`,
//! `tel:`, `WIFI:`, ...), so the byte-for-byte shape of these strings is
//! the whole point. Field contents are embedded raw except where a format
//! requires percent-encoding; whether a payload is worth encoding at all
//! is the validator's call, not this module's.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::content::{
    ContentKind, ContentRecord, EmailContent, LocationContent, SmsContent, VcardContent,
    WifiContent,
};
use crate::pattern::complete_url;

/// Characters escaped in `mailto:`/`sms:` query values. Matches
/// JavaScript's `encodeURIComponent`: everything but ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )` is percent-encoded, and a space becomes `%20`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the payload string for the active content kind.
///
/// Pure and total: reads the record, never mutates it, never fails. An
/// empty or half-filled record still yields a well-formed (if useless)
/// payload; the single exception is `Phone`, which yields `""` when the
/// number is blank so no bare `tel:` ever reaches a scanner.
#[must_use]
pub fn encode(kind: ContentKind, record: &ContentRecord) -> String {
    match kind {
        ContentKind::Text => record.text.clone(),
        ContentKind::Url => complete_url(&record.url),
        ContentKind::Email => {
            let EmailContent { to, subject, body } = &record.email;
            let subject = uri_component(subject);
            let body = uri_component(body);
            format!("mailto:{to}?subject={subject}&body={body}")
        }
        ContentKind::Phone => {
            let phone = &record.phone;
            if phone.trim().is_empty() {
                String::new()
            } else {
                // the raw value, untrimmed: dialers cope with spacing
                format!("tel:{phone}")
            }
        }
        ContentKind::Sms => {
            let SmsContent { number, message } = &record.sms;
            let body = uri_component(message);
            format!("sms:{number}?body={body}")
        }
        ContentKind::Wifi => {
            let WifiContent {
                ssid,
                password,
                security,
                hidden,
            } = &record.wifi;
            // fixed field order and the double semicolon terminator are
            // both mandatory for scanners to accept the network
            format!("WIFI:T:{security};S:{ssid};P:{password};H:{hidden};;")
        }
        ContentKind::Location => {
            let LocationContent {
                latitude,
                longitude,
            } = &record.location;
            format!("geo:{latitude},{longitude}")
        }
        ContentKind::Vcard => {
            let VcardContent {
                first_name,
                last_name,
                organization,
                phone,
                email,
                url,
            } = &record.vcard;
            format!(
                "BEGIN:VCARD\n\
                 VERSION:3.0\n\
                 FN:{first_name} {last_name}\n\
                 ORG:{organization}\n\
                 TEL:{phone}\n\
                 EMAIL:{email}\n\
                 URL:{url}\n\
                 END:VCARD"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- percent encoding ----

    #[test]
    fn test_uri_component_space_is_percent_twenty() {
        assert_eq!(uri_component("Hi there"), "Hi%20there");
    }

    #[test]
    fn test_uri_component_keeps_unreserved_marks() {
        assert_eq!(uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_uri_component_escapes_reserved() {
        assert_eq!(uri_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(uri_component("100%"), "100%25");
    }

    #[test]
    fn test_uri_component_escapes_utf8_bytes() {
        assert_eq!(uri_component("caf\u{e9}"), "caf%C3%A9");
    }

    // ---- per-kind contracts ----

    #[test]
    fn test_text_is_verbatim() {
        let mut record = ContentRecord::default();
        record.text = "  anything, even ; WIFI: lookalikes  ".to_owned();
        assert_eq!(encode(ContentKind::Text, &record), record.text);
    }

    #[test]
    fn test_url_completion_only_when_needed() {
        let mut record = ContentRecord::default();
        record.url = "example.com".to_owned();
        assert_eq!(encode(ContentKind::Url, &record), "https://example.com");

        record.url = "http://example.com".to_owned();
        assert_eq!(encode(ContentKind::Url, &record), "http://example.com");
    }

    #[test]
    fn test_phone_blank_yields_empty_payload() {
        let mut record = ContentRecord::default();
        assert_eq!(encode(ContentKind::Phone, &record), "");
        record.phone = "   ".to_owned();
        assert_eq!(encode(ContentKind::Phone, &record), "");
    }

    #[test]
    fn test_phone_keeps_raw_spacing() {
        let mut record = ContentRecord::default();
        record.phone = " +43 1 234 ".to_owned();
        assert_eq!(encode(ContentKind::Phone, &record), "tel: +43 1 234 ");
    }

    #[test]
    fn test_sms_always_emitted() {
        let record = ContentRecord::default();
        assert_eq!(encode(ContentKind::Sms, &record), "sms:?body=");
    }

    #[test]
    fn test_wifi_hidden_flag_literal() {
        let mut record = ContentRecord::default();
        record.wifi.ssid = "Net".to_owned();
        record.wifi.password = "pass1234".to_owned();
        record.wifi.hidden = true;
        assert_eq!(
            encode(ContentKind::Wifi, &record),
            "WIFI:T:WPA;S:Net;P:pass1234;H:true;;"
        );
    }

    #[test]
    fn test_location_raw_concatenation() {
        let mut record = ContentRecord::default();
        record.location.latitude = "48.2082".to_owned();
        record.location.longitude = "16.3738".to_owned();
        assert_eq!(
            encode(ContentKind::Location, &record),
            "geo:48.2082,16.3738"
        );
    }

    #[test]
    fn test_vcard_blank_record_keeps_line_skeleton() {
        let record = ContentRecord::default();
        let payload = encode(ContentKind::Vcard, &record);
        assert_eq!(payload.lines().count(), 8);
        assert!(payload.starts_with("BEGIN:VCARD\nVERSION:3.0\nFN: \n"));
        assert!(payload.ends_with("\nEND:VCARD"));
    }
}
