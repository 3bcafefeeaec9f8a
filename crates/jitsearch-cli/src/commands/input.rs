//! Parsing of command-line lookup inputs.

use std::io::{self, Read};

/// Which lookup a command builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Interval,
    Table,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid breakpoint `{0}`")]
    Breakpoint(String),

    #[error("invalid entry `{0}` (expected KEY=VALUE)")]
    Entry(String),

    #[error("invalid query `{0}`")]
    Probe(String),

    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Expand a lone `-` into whitespace-separated items read from stdin.
pub fn resolve_items(items: Vec<String>) -> Result<Vec<String>, InputError> {
    if items.len() != 1 || items[0] != "-" {
        return Ok(items);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(split_items(&buf))
}

pub fn split_items(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

pub fn parse_breakpoints(items: &[String]) -> Result<Vec<f32>, InputError> {
    items
        .iter()
        .map(|s| parse_f32(s).ok_or_else(|| InputError::Breakpoint(s.clone())))
        .collect()
}

pub fn parse_entries(items: &[String]) -> Result<Vec<(i32, usize)>, InputError> {
    items
        .iter()
        .map(|s| {
            let entry = s.split_once('=').and_then(|(key, value)| {
                Some((key.trim().parse().ok()?, value.trim().parse().ok()?))
            });
            entry.ok_or_else(|| InputError::Entry(s.clone()))
        })
        .collect()
}

pub fn parse_float_probes(probes: &[String]) -> Result<Vec<f32>, InputError> {
    probes
        .iter()
        .map(|s| parse_f32(s).ok_or_else(|| InputError::Probe(s.clone())))
        .collect()
}

pub fn parse_key_probes(probes: &[String]) -> Result<Vec<i32>, InputError> {
    probes
        .iter()
        .map(|s| s.trim().parse().map_err(|_| InputError::Probe(s.clone())))
        .collect()
}

/// Accepts everything `f32::from_str` does (`inf`, `-inf`, `NaN` included).
fn parse_f32(s: &str) -> Option<f32> {
    s.trim().parse().ok()
}
