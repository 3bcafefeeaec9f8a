//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jitsearch")
        .about("Compile interval searches and key tables to native x86-64 code")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(exec_command())
}

fn with_limit_args(cmd: Command) -> Command {
    cmd.arg(max_keys_arg())
        .arg(max_code_size_arg())
        .arg(verbose_arg())
}

/// Show generated machine code.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show generated machine code")
        .override_usage(
            "\
  jitsearch dump interval <BREAKPOINT>...
  jitsearch dump table [--] <KEY=VALUE>...",
        )
        .after_help(
            r#"EXAMPLES:
  jitsearch dump interval -3 0 1 3 4 5       # interval search listing
  jitsearch dump table -- -3=30 1=10 5=50    # key table listing
  seq 0 8 | jitsearch dump interval -        # breakpoints from stdin"#,
        )
        .arg(kind_arg())
        .arg(items_arg())
        .arg(color_arg());

    with_limit_args(cmd)
}

/// Compile, run queries, and print JSON results.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Compile, run queries, and print JSON results")
        .override_usage(
            "\
  jitsearch exec interval <BREAKPOINT>... -p <X>...
  jitsearch exec table -p <KEY>... [--] <KEY=VALUE>...",
        )
        .after_help(
            r#"EXAMPLES:
  jitsearch exec interval -3 0 1 3 4 5 --probe=-3.1,0.9,5
  jitsearch exec interval -3 0 1 3 4 5 -p 2.5 --check
  jitsearch exec table -p 1 -p 0 -- -3=30 1=10 5=50

NOTE: Negative table keys start with '-', so put entries after `--`."#,
        )
        .arg(kind_arg())
        .arg(items_arg())
        .arg(probe_arg())
        .arg(check_arg())
        .arg(compact_arg());

    with_limit_args(cmd)
}
