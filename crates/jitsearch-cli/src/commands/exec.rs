use std::collections::HashMap;

use jitsearch::oracle::{binary_scan, linear_scan};
use jitsearch::{CompileLimits, Compiler, TABLE_MISS};
use serde::Serialize;

use super::input::{
    Kind, parse_breakpoints, parse_entries, parse_float_probes, parse_key_probes, resolve_items,
};

pub struct ExecArgs {
    pub kind: Kind,
    pub items: Vec<String>,
    pub probes: Vec<String>,
    pub limits: CompileLimits,
    pub check: bool,
    pub pretty: bool,
}

/// One query and its answers.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Interval {
        query: f32,
        result: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        linear: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        binary: Option<i32>,
    },
    Table {
        query: i32,
        result: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected: Option<usize>,
    },
}

impl Row {
    /// False when a reference answer is present and differs.
    pub fn agrees(&self) -> bool {
        match *self {
            Row::Interval {
                result,
                linear,
                binary,
                ..
            } => linear.is_none_or(|r| r == result) && binary.is_none_or(|r| r == result),
            Row::Table {
                result, expected, ..
            } => expected.is_none_or(|r| r == result),
        }
    }
}

pub fn run(args: ExecArgs) {
    let pretty = args.pretty;
    let rows = match evaluate(args) {
        Ok(rows) => rows,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&rows)
    } else {
        serde_json::to_string(&rows)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    let mismatches = rows.iter().filter(|row| !row.agrees()).count();
    if mismatches > 0 {
        eprintln!("error: {mismatches} result(s) disagree with the reference lookups");
        std::process::exit(2);
    }
}

/// Compile, run every query, and collect the answers.
pub fn evaluate(args: ExecArgs) -> Result<Vec<Row>, String> {
    let items = resolve_items(args.items).map_err(|e| e.to_string())?;
    let compiler = Compiler::with_limits(args.limits);
    tracing::debug!(
        items = items.len(),
        queries = args.probes.len(),
        check = args.check,
        "exec"
    );

    match args.kind {
        Kind::Interval => {
            let breakpoints = parse_breakpoints(&items).map_err(|e| e.to_string())?;
            let queries = parse_float_probes(&args.probes).map_err(|e| e.to_string())?;
            let search = compiler
                .interval_search(&breakpoints)
                .map_err(|e| e.to_string())?;

            let rows = queries
                .into_iter()
                .map(|query| Row::Interval {
                    query,
                    result: search.invoke(query),
                    linear: args.check.then(|| linear_scan(&breakpoints, query)),
                    binary: args.check.then(|| binary_scan(&breakpoints, query)),
                })
                .collect();
            search.dispose();
            Ok(rows)
        }
        Kind::Table => {
            let entries = parse_entries(&items).map_err(|e| e.to_string())?;
            let queries = parse_key_probes(&args.probes).map_err(|e| e.to_string())?;
            let reference: HashMap<i32, usize> = entries.iter().copied().collect();
            let table = compiler.key_table(entries).map_err(|e| e.to_string())?;

            let rows = queries
                .into_iter()
                .map(|query| Row::Table {
                    query,
                    result: table.invoke(query),
                    expected: args
                        .check
                        .then(|| reference.get(&query).copied().unwrap_or(TABLE_MISS)),
                })
                .collect();
            table.dispose();
            Ok(rows)
        }
    }
}
