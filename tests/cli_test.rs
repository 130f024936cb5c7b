//! Command-line parsing and end-to-end runs of the nfunc binary

mod common;

use clap::Parser;
use common::utc;
use nfunc::cli::{Cli, Command};
use nfunc::output::get_formatter;
use nfunc_core::{DateTimeUnit, Reply};
use serde_json::Value;
use std::process;

fn run(args: &[&str]) -> Reply {
    let cli = Cli::try_parse_from(args).unwrap();
    Reply::from(cli.command.execute(&utc()))
}

#[test]
fn test_every_command_parses() {
    let commands: &[&[&str]] = &[
        &["nfunc", "date-add", "1/1/2024", "1", "day"],
        &["nfunc", "date-diff", "1/2/2024", "1/1/2024", "h"],
        &["nfunc", "date-parse", "1/1/2024", "--as-utc"],
        &["nfunc", "date-part", "1/1/2024", "year"],
        &["nfunc", "format-date", "1/1/2024", "yyyy", "-t", "HH", "-c", "fr"],
        &["nfunc", "to-system", "1/1/2024"],
        &["nfunc", "to-local", "1/1/2024"],
        &["nfunc", "now"],
        &["nfunc", "from-epoch", "-1000"],
        &["nfunc", "format-currency", "-3.5", "-p", "1", "-s", "EUR"],
        &["nfunc", "format-number", "3.5", "0.00", "--culture", "de"],
        &["nfunc", "format", "3.5", "N1", "--hint", "number"],
        &["nfunc", "proper-case", "abc"],
        &["nfunc", "regex-match", "abc", "b", "-o", "i,m"],
        &["nfunc", "normalize-date", "1/1/2024"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(*args);
        assert!(cli.is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn test_rejects_unknown_values() {
    assert!(Cli::try_parse_from(["nfunc", "date-add", "1/1/2024", "1", "fortnight"]).is_err());
    assert!(Cli::try_parse_from(["nfunc", "format", "1", "N", "--hint", "text"]).is_err());
    assert!(Cli::try_parse_from(["nfunc", "from-epoch", "soon"]).is_err());
    assert!(Cli::try_parse_from(["nfunc"]).is_err());
}

#[test]
fn test_timezone_flags() {
    let cli = Cli::try_parse_from(["nfunc", "-z", "Asia/Tokyo", "now"]).unwrap();
    assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
    assert!(!cli.utc);

    let cli = Cli::try_parse_from(["nfunc", "date-part", "1/1/2024", "mi", "--utc"]).unwrap();
    assert!(cli.utc);
    match cli.command {
        Command::DatePart { unit, .. } => assert_eq!(unit, DateTimeUnit::Minute),
        _ => panic!("Expected DatePart command"),
    }
}

#[test]
fn test_execute_commands() {
    let reply = run(&["nfunc", "date-add", "1/31/2024 12:00:00 AM", "1", "month"]);
    assert_eq!(reply.value, "2/29/2024 12:00:00 AM");

    let reply = run(&["nfunc", "date-diff", "1/2/2024", "1/1/2024 6:00:00 PM", "h"]);
    assert_eq!(reply.value, "6");

    let reply = run(&["nfunc", "format-currency", "-3.5", "-c", "en-US", "-p", "0"]);
    assert_eq!(reply.value, "-$4");

    let reply = run(&[
        "nfunc",
        "format-date",
        "1/15/2024 1:05:00 PM",
        "d MMMM",
        "-t",
        "HH:mm",
        "-c",
        "fr",
    ]);
    assert_eq!(reply.value, "15 janvier 13:05");

    let reply = run(&["nfunc", "normalize-date", "yesterday-ish"]);
    assert!(!reply.is_ok());
}

#[test]
fn test_formatted_output() {
    let reply = run(&["nfunc", "from-epoch", "0"]);
    assert_eq!(get_formatter(false).format_reply(&reply), "12/31/1969 6:00:00 PM\t0");

    let json: Value = serde_json::from_str(&get_formatter(true).format_reply(&reply)).unwrap();
    assert_eq!(json["value"], "12/31/1969 6:00:00 PM");
    assert_eq!(json["data"], 0);
    assert_eq!(json["status"], "ok");
}

#[test]
fn test_binary_end_to_end() {
    let nfunc = || {
        let mut command = process::Command::new(env!("CARGO_BIN_EXE_nfunc"));
        command.env_remove("RUST_LOG").env_remove("NFUNC_TIMEZONE");
        command
    };

    let output = nfunc()
        .args(["--utc", "regex-match", "2024-01-15", r"(\d+)-(\d+)-(\d+)", "-g", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "15");

    let output = nfunc()
        .args(["--json", "date-parse", "not a date"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["data"].is_null());
}
