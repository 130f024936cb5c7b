//! Property-based tests for nfunc using proptest

mod common;

use chrono::{DateTime, FixedOffset, Utc};
use common::{utc, zones};
use nfunc::{datetime, numeric, string};
use nfunc_core::{DateTimeUnit, NfuncError};
use proptest::prelude::*;

// Strategies for generating test data

const DISPLAY: &str = "%-m/%-d/%Y %-I:%M:%S %p";

prop_compose! {
    fn arb_instant()(
        secs in -2_208_988_800i64..4_102_444_800i64, // 1900-01-01 to 2100-01-01
    ) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }
}

/// Quarter-hour offsets from -14:00 to +14:00
fn arb_offset() -> impl Strategy<Value = FixedOffset> {
    (-56i32..=56).prop_map(|quarters| FixedOffset::east_opt(quarters * 900).unwrap())
}

/// Text for an instant seen at an offset, in one of the accepted input forms
fn date_text(dt: &DateTime<FixedOffset>, form: u8) -> String {
    match form {
        0 => dt.to_rfc3339(),
        1 => format!("{} {}", dt.format(DISPLAY), dt.format("%:z")),
        2 => dt.format(DISPLAY).to_string(),
        _ => format!("{} {}", dt.format("%Y-%m-%d"), dt.format("%:z")),
    }
}

prop_compose! {
    fn arb_date_text()(instant in arb_instant(), offset in arb_offset(), form in 0u8..4) -> String {
        date_text(&instant.with_timezone(&offset), form)
    }
}

prop_compose! {
    fn arb_edge_text()(
        secs in prop_oneof![
            -62_135_596_800i64..-62_135_424_000i64, // first two days of year 1
            253_402_128_000i64..=253_402_300_799i64, // last two days of year 9999
        ],
        offset in arb_offset(),
        form in 0u8..2,
    ) -> String {
        date_text(&DateTime::from_timestamp(secs, 0).unwrap().with_timezone(&offset), form)
    }
}

fn arb_unit() -> impl Strategy<Value = DateTimeUnit> {
    prop::sample::select(vec![
        DateTimeUnit::Year,
        DateTimeUnit::Month,
        DateTimeUnit::Day,
        DateTimeUnit::Hour,
        DateTimeUnit::Minute,
    ])
}

fn arb_zone() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "UTC",
        "America/Chicago",
        "America/New_York",
        "Europe/London",
        "Asia/Kolkata",
        "Australia/Lord_Howe",
    ])
}

proptest! {
    #[test]
    fn diff_undoes_add(text in arb_date_text(), addend in -500i32..500, unit in arb_unit()) {
        let zones = utc();
        let base = datetime::normalize(&zones, &text).unwrap().value;
        let sum = datetime::add(&zones, &base, addend, Some(unit)).unwrap();
        let back = datetime::diff(&zones, &sum.value, &base, Some(unit)).unwrap();
        let back: f64 = back.value.parse().unwrap();
        prop_assert!(
            (back - f64::from(addend.abs())).abs() < 1e-9,
            "{} {} {} -> {}",
            text,
            addend,
            unit,
            back
        );
    }

    #[test]
    fn explicit_offset_keeps_instant(
        instant in arb_instant(),
        offset in arb_offset(),
        form in 0u8..2,
    ) {
        let dt = instant.with_timezone(&offset);
        let out = datetime::normalize(&zones("America/Chicago"), &date_text(&dt, form)).unwrap();
        prop_assert_eq!(out.data, Some(instant.timestamp_millis()));
        prop_assert_eq!(out.value, dt.format(DISPLAY).to_string());
    }

    #[test]
    fn date_only_offset_is_midnight(instant in arb_instant(), offset in arb_offset()) {
        let dt = instant.with_timezone(&offset);
        let out = datetime::normalize(&utc(), &date_text(&dt, 3)).unwrap();
        let midnight = dt.date_naive().and_hms_opt(0, 0, 0).unwrap();
        let expected = midnight.and_local_timezone(offset).unwrap();
        prop_assert_eq!(out.data, Some(expected.timestamp_millis()));
        prop_assert!(out.value.ends_with(" 12:00:00 AM"), "{}", out.value);
    }

    #[test]
    fn normalize_is_idempotent(text in arb_date_text(), zone in arb_zone()) {
        let zones = zones(zone);
        let once = datetime::normalize(&zones, &text).unwrap();
        let twice = datetime::normalize(&zones, &once.value).unwrap();
        prop_assert_eq!(&once.value, &twice.value);
    }

    #[test]
    fn zone_conversions_preserve_instant(text in arb_date_text(), zone in arb_zone()) {
        let zones = zones(zone);
        let system = datetime::to_system(&zones, &text).unwrap();
        let local = datetime::to_local(&zones, &text).unwrap();
        let parsed = datetime::normalize(&zones, &text).unwrap();
        prop_assert_eq!(system.data, parsed.data);
        prop_assert_eq!(local.data, parsed.data);
    }

    #[test]
    fn zone_conversions_at_range_edges(text in arb_edge_text(), zone in arb_zone()) {
        let zones = zones(zone);
        match datetime::to_system(&zones, &text) {
            Ok(system) => {
                let text = format!("{} -06:00", system.value);
                let back = datetime::normalize(&zones, &text).unwrap();
                prop_assert_eq!(back.data, system.data);
            }
            Err(NfuncError::OutOfRange(_) | NfuncError::InvalidDate(_)) => {}
            Err(other) => prop_assert!(false, "{}: {}", text, other),
        }
        match datetime::to_local(&zones, &text) {
            Ok(local) => {
                let year = local.value.split(['/', ' ']).nth(2).unwrap();
                prop_assert!(year.len() == 4 && year != "0000", "{}", local.value);
            }
            Err(NfuncError::OutOfRange(_) | NfuncError::InvalidDate(_)) => {}
            Err(other) => prop_assert!(false, "{}: {}", text, other),
        }
    }

    #[test]
    fn invariant_numeric_formatting_never_fails(
        number in any::<f64>().prop_filter("finite", |n| n.is_finite()),
        pattern in prop::sample::select(vec![
            "", "C", "N2", "F0", "E3", "G", "R", "P1", "#,##0.00", "0.###E+0", "0;(0);zero",
        ]),
        precision in -1i32..=99,
    ) {
        prop_assert!(numeric::format_number(number, pattern, "").is_ok());
        prop_assert!(numeric::format_currency(number, "", precision, "").is_ok());
    }

    #[test]
    fn proper_case_is_stable(text in "[a-zA-Z' -]{0,40}") {
        let once = string::proper_case(&text).value;
        prop_assert_eq!(string::proper_case(&once).value, once.clone());
        prop_assert_eq!(once.to_lowercase(), text.to_lowercase());
    }

    #[test]
    fn whole_match_is_a_substring(text in "[a-z0-9]{0,30}", pattern in "[a-z0-9]{1,3}") {
        let out = string::regex_match(&text, &pattern, "", "").unwrap();
        prop_assert!(text.contains(&out.value));
        prop_assert_eq!(out.value.is_empty(), !text.contains(&pattern));
    }
}
