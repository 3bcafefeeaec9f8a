#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;
mod logging;

use cli::{DumpParams, ExecParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            logging::init(params.verbosity);
            commands::dump::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            logging::init(params.verbosity);
            commands::exec::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
