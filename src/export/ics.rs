//! iCalendar (RFC 5545) encoding of exported events.

use super::CalendarEvent;

pub const PRODUCT_ID: &str = "-//100 Day Savings Challenge//example.com//";

const LINE_LIMIT: usize = 75;
const CRLF: &str = "\r\n";

/// Encodes a batch of events into an interchange document.
pub trait CalendarSerializer {
    fn serialize(&self, events: &[CalendarEvent]) -> String;

    /// Suggested file extension, without the dot.
    fn extension(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct IcsSerializer {
    product_id: String,
}

impl Default for IcsSerializer {
    fn default() -> Self {
        Self::new(PRODUCT_ID)
    }
}

impl IcsSerializer {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }

    fn push_event(out: &mut String, event: &CalendarEvent) {
        push_line(out, "BEGIN:VEVENT");
        push_line(out, &format!("UID:{}", escape_text(&event.uid)));
        push_line(
            out,
            &format!("DTSTAMP:{}", event.stamp.format("%Y%m%dT%H%M%SZ")),
        );
        push_line(out, &format!("SUMMARY:{}", escape_text(&event.title)));
        push_line(
            out,
            &format!("DESCRIPTION:{}", escape_text(&event.description)),
        );
        push_line(
            out,
            &format!("DTSTART;VALUE=DATE:{}", event.start_date.format("%Y%m%d")),
        );
        push_line(
            out,
            &format!("DTEND;VALUE=DATE:{}", event.end_date.format("%Y%m%d")),
        );
        push_line(out, "END:VEVENT");
    }
}

impl CalendarSerializer for IcsSerializer {
    fn serialize(&self, events: &[CalendarEvent]) -> String {
        let mut out = String::new();
        push_line(&mut out, "BEGIN:VCALENDAR");
        push_line(&mut out, "VERSION:2.0");
        push_line(&mut out, &format!("PRODID:{}", escape_text(&self.product_id)));
        for event in events {
            Self::push_event(&mut out, event);
        }
        push_line(&mut out, "END:VCALENDAR");
        out
    }

    fn extension(&self) -> &'static str {
        "ics"
    }
}

/// Escapes a TEXT value: backslash, semicolon, comma and newlines.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Appends a content line folded at 75 octets without splitting UTF-8 sequences.
fn push_line(out: &mut String, line: &str) {
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > LINE_LIMIT {
            out.push_str(CRLF);
            out.push(' ');
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out.push_str(CRLF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn event(description: &str) -> CalendarEvent {
        CalendarEvent {
            uid: "abc@savings-challenge".into(),
            title: "Savings Goal: $28.00".into(),
            description: description.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            stamp: Utc.with_ymd_and_hms(2024, 1, 2, 9, 5, 7).unwrap(),
        }
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_text("a;b,c\\d\ne"), "a\\;b\\,c\\\\d\\ne");
    }

    #[test]
    fn folds_long_lines_at_75_octets() {
        let long = "x".repeat(200);
        let doc = IcsSerializer::default().serialize(&[event(&long)]);
        for line in doc.split(CRLF) {
            assert!(line.len() <= LINE_LIMIT, "line too long: {}", line);
        }
        let unfolded = doc.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{}\r\n", long)));
    }

    #[test]
    fn folding_keeps_multibyte_characters_whole() {
        let long = "💰".repeat(40);
        let doc = IcsSerializer::default().serialize(&[event(&long)]);
        assert!(doc.split(CRLF).all(|line| line.len() <= LINE_LIMIT));
        assert!(doc.replace("\r\n ", "").contains(&long));
    }

    #[test]
    fn writes_all_day_dates_and_utc_stamp() {
        let doc = IcsSerializer::default().serialize(&[event("short")]);
        assert!(doc.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(doc.contains("DTSTART;VALUE=DATE:20240101\r\n"));
        assert!(doc.contains("DTEND;VALUE=DATE:20240102\r\n"));
        assert!(doc.contains("DTSTAMP:20240102T090507Z\r\n"));
        assert!(doc.ends_with("END:VCALENDAR\r\n"));
    }
}
