//! Tests for CLI dispatch logic.

use super::*;
use crate::cli::commands::{dump_command, exec_command};
use crate::commands::input::Kind;

#[test]
fn dump_interval_with_negative_breakpoints() {
    let m = dump_command()
        .try_get_matches_from(["dump", "interval", "-3", "0", "1.5"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.kind, Kind::Interval);
    assert_eq!(params.items, ["-3", "0", "1.5"]);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbosity, 0);
}

#[test]
fn dump_table_after_separator() {
    let m = dump_command()
        .try_get_matches_from(["dump", "table", "--color", "never", "--", "-3=30", "1=10"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.kind, Kind::Table);
    assert_eq!(params.items, ["-3=30", "1=10"]);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_rejects_unknown_kind() {
    let result = dump_command().try_get_matches_from(["dump", "tree", "1"]);

    assert!(result.is_err());
}

#[test]
fn dump_requires_items() {
    let result = dump_command().try_get_matches_from(["dump", "interval"]);

    assert!(result.is_err());
}

#[test]
fn exec_collects_probes() {
    let m = exec_command()
        .try_get_matches_from([
            "exec",
            "interval",
            "0",
            "1",
            "2",
            "--probe=-0.5,1.5",
            "-p",
            "3",
            "--check",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.items, ["0", "1", "2"]);
    assert_eq!(params.probes, ["-0.5", "1.5", "3"]);
    assert!(params.check);
    assert!(!params.compact);
}

#[test]
fn exec_requires_probe() {
    let result = exec_command().try_get_matches_from(["exec", "interval", "0", "1"]);

    assert!(result.is_err());
}

#[test]
fn limits_and_verbosity() {
    let m = exec_command()
        .try_get_matches_from([
            "exec",
            "table",
            "-p",
            "1",
            "--max-keys",
            "8",
            "--max-code-size",
            "4096",
            "-vv",
            "--",
            "1=1",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.limits.get_max_keys(), 8);
    assert_eq!(params.limits.get_max_code_size(), 4096);
    assert_eq!(params.verbosity, 2);
    assert_eq!(params.items, ["1=1"]);
}

#[test]
fn default_limits() {
    let m = dump_command()
        .try_get_matches_from(["dump", "interval", "1"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.limits, jitsearch::CompileLimits::default());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();

    assert!(help.contains("dump"));
    assert!(help.contains("exec"));
}
