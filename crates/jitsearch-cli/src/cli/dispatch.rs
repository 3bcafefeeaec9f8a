//! Dispatch logic: extract params from ArgMatches and convert to command args.

use clap::ArgMatches;
use jitsearch::CompileLimits;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::input::Kind;

pub struct DumpParams {
    pub kind: Kind,
    pub items: Vec<String>,
    pub limits: CompileLimits,
    pub color: ColorChoice,
    pub verbosity: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kind: parse_kind(m),
            items: parse_items(m),
            limits: parse_limits(m),
            color: parse_color(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            kind: p.kind,
            items: p.items,
            limits: p.limits,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub kind: Kind,
    pub items: Vec<String>,
    pub probes: Vec<String>,
    pub limits: CompileLimits,
    pub check: bool,
    pub compact: bool,
    pub verbosity: u8,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kind: parse_kind(m),
            items: parse_items(m),
            probes: m
                .get_many::<String>("probe")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            limits: parse_limits(m),
            check: m.get_flag("check"),
            compact: m.get_flag("compact"),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());
        Self {
            kind: p.kind,
            items: p.items,
            probes: p.probes,
            limits: p.limits,
            check: p.check,
            pretty,
        }
    }
}

fn parse_kind(m: &ArgMatches) -> Kind {
    match m.get_one::<String>("kind").map(|s| s.as_str()) {
        Some("table") => Kind::Table,
        _ => Kind::Interval,
    }
}

fn parse_items(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("items")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn parse_limits(m: &ArgMatches) -> CompileLimits {
    let mut limits = CompileLimits::new();
    if let Some(&n) = m.get_one::<usize>("max_keys") {
        limits = limits.max_keys(n);
    }
    if let Some(&n) = m.get_one::<usize>("max_code_size") {
        limits = limits.max_code_size(n);
    }
    limits
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
