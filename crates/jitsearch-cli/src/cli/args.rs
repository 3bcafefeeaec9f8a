//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction, value_parser};

/// Lookup kind (positional).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .value_name("KIND")
        .required(true)
        .value_parser(["interval", "table"])
        .help("What to compile: `interval` breakpoints or a key `table`")
}

/// Breakpoints or `KEY=VALUE` entries (positional, repeated).
pub fn items_arg() -> Arg {
    Arg::new("items")
        .value_name("ITEMS")
        .num_args(1..)
        .required(true)
        .allow_negative_numbers(true)
        .help("Breakpoints (interval) or KEY=VALUE pairs (table); `-` reads stdin")
}

/// Query values (-p/--probe).
pub fn probe_arg() -> Arg {
    Arg::new("probe")
        .short('p')
        .long("probe")
        .value_name("QUERY")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .allow_negative_numbers(true)
        .required(true)
        .help("Query to run against the compiled lookup (repeatable, comma-separated)")
}

/// Compare results against reference lookups (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Compare every result against the reference lookups")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Key count limit (--max-keys).
pub fn max_keys_arg() -> Arg {
    Arg::new("max_keys")
        .long("max-keys")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Reject inputs with more keys than this")
}

/// Code size limit (--max-code-size).
pub fn max_code_size_arg() -> Arg {
    Arg::new("max_code_size")
        .long("max-code-size")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Reject lookups whose code exceeds this many bytes")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
