mod common;

use std::fs;

use assert_fs::{prelude::*, TempDir};
use chrono::Days;
use predicates::prelude::*;
use regex::Regex;
use savings_core::{
    build_export_events,
    export::{CalendarSerializer, IcsSerializer},
    time::FixedClock,
    ChallengeSession, SavingsError,
};

use common::{date, export_instant, fixed_clock, MONDAY_LEDGER, WEDNESDAY_LEDGER};

#[test]
fn export_without_ledger_fails() {
    let err = build_export_events(None, &fixed_clock()).unwrap_err();
    assert!(matches!(err, SavingsError::NoLedgerAvailable));
}

#[test]
fn one_all_day_event_per_week() {
    for ledger in [&*MONDAY_LEDGER, &*WEDNESDAY_LEDGER] {
        let events = build_export_events(Some(ledger), &fixed_clock()).unwrap();
        assert_eq!(events.len(), ledger.weekly_summaries().len());
        for (event, summary) in events.iter().zip(ledger.weekly_summaries()) {
            assert_eq!(event.start_date, summary.week_start);
            assert_eq!(event.end_date, event.start_date + Days::new(1));
            assert_eq!(event.stamp, export_instant());
            assert!(event.title.contains(&format!("${}.00", summary.total)));
        }
    }
}

#[test]
fn equal_totals_are_not_merged() {
    let ledger = &*MONDAY_LEDGER;
    let mut events = build_export_events(Some(ledger), &fixed_clock()).unwrap();
    let duplicate = events[0].clone();
    events.push(duplicate);
    let doc = IcsSerializer::default().serialize(&events);
    assert_eq!(doc.matches("BEGIN:VEVENT").count(), ledger.weekly_summaries().len() + 1);
}

#[test]
fn ics_document_has_required_fields() {
    let events = build_export_events(Some(&WEDNESDAY_LEDGER), &fixed_clock()).unwrap();
    let doc = IcsSerializer::default().serialize(&events);

    assert!(doc.contains("PRODID:-//100 Day Savings Challenge//example.com//\r\n"));
    assert!(doc.contains("DTSTART;VALUE=DATE:20240108\r\n"));
    assert!(doc.contains("DTEND;VALUE=DATE:20240109\r\n"));
    assert!(doc.contains("SUMMARY:Savings Goal: $63.00\r\n"));

    let uid = Regex::new(r"(?m)^UID:[0-9a-f-]{36}@savings-challenge\r$").unwrap();
    assert_eq!(uid.find_iter(&doc).count(), events.len());
    let stamp = Regex::new(r"(?m)^DTSTAMP:20240102T090000Z\r$").unwrap();
    assert_eq!(stamp.find_iter(&doc).count(), events.len());
    assert!(doc.split("\r\n").all(|line| line.len() <= 75));
}

#[test]
fn session_export_writes_calendar_file() {
    let dir = TempDir::new().unwrap();
    let mut session = ChallengeSession::new(Box::new(FixedClock(export_instant())));
    session.generate(date(2024, 1, 1)).unwrap();

    let summary = session.export_to(dir.child("goals.ics").path()).unwrap();
    assert_eq!(summary.event_count, 15);

    dir.child("goals.ics").assert(predicate::path::is_file());
    dir.child("goals.ics")
        .assert(predicate::str::starts_with("BEGIN:VCALENDAR\r\n"));
    let written = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(written.matches("END:VEVENT").count(), 15);
}

#[test]
fn unwritable_target_reports_write_failure() {
    let dir = TempDir::new().unwrap();
    let mut session = ChallengeSession::new(Box::new(fixed_clock()));
    session.generate(date(2024, 1, 3)).unwrap();

    let target = dir.child("no-such-dir").child("goals.ics");
    let err = session.export_to(target.path()).unwrap_err();
    assert!(matches!(err, SavingsError::ExportWriteFailure { .. }));
    target.assert(predicate::path::missing());
    assert!(session.current().is_some());
}
