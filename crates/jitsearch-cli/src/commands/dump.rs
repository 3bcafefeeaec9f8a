use jitsearch::{Colors, CompileLimits, Compiler, dump};

use super::input::{Kind, parse_breakpoints, parse_entries, resolve_items};

pub struct DumpArgs {
    pub kind: Kind,
    pub items: Vec<String>,
    pub limits: CompileLimits,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match render(args) {
        Ok(listing) => print!("{listing}"),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Emit and link without mapping, then render the listing.
pub fn render(args: DumpArgs) -> Result<String, String> {
    let items = resolve_items(args.items).map_err(|e| e.to_string())?;
    let compiler = Compiler::with_limits(args.limits);

    let linked = match args.kind {
        Kind::Interval => {
            let breakpoints = parse_breakpoints(&items).map_err(|e| e.to_string())?;
            compiler.emit_interval_search(&breakpoints)
        }
        Kind::Table => {
            let entries = parse_entries(&items).map_err(|e| e.to_string())?;
            compiler.emit_key_table(entries)
        }
    }
    .map_err(|e| e.to_string())?;

    Ok(dump(&linked, Colors::new(args.color)))
}
