use super::input::{
    parse_breakpoints, parse_entries, parse_float_probes, parse_key_probes, resolve_items,
    split_items,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn breakpoints() {
    let values = parse_breakpoints(&strings(&["-3", "0.5", "inf"])).unwrap();

    assert_eq!(values, [-3.0, 0.5, f32::INFINITY]);
}

#[test]
fn bad_breakpoint() {
    let err = parse_breakpoints(&strings(&["1", "two"])).unwrap_err();

    assert_eq!(err.to_string(), "invalid breakpoint `two`");
}

#[test]
fn entries() {
    let entries = parse_entries(&strings(&["-3=30", " 1 = 10 "])).unwrap();

    assert_eq!(entries, [(-3, 30), (1, 10)]);
}

#[test]
fn bad_entries() {
    for item in ["1", "1=", "=2", "a=1", "1=-2", "99999999999=1"] {
        let err = parse_entries(&strings(&[item])).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid entry `{item}` (expected KEY=VALUE)")
        );
    }
}

#[test]
fn probes() {
    let floats = parse_float_probes(&strings(&["NaN", "-0.25"])).unwrap();
    assert!(floats[0].is_nan());
    assert_eq!(floats[1], -0.25);

    assert_eq!(parse_key_probes(&strings(&["-7", "8"])).unwrap(), [-7, 8]);
    assert!(parse_key_probes(&strings(&["1.5"])).is_err());
}

#[test]
fn items_from_text() {
    assert_eq!(split_items(" 1 2\n3\t4\n"), ["1", "2", "3", "4"]);
}

#[test]
fn items_pass_through() {
    let items = strings(&["1", "-"]);

    assert_eq!(resolve_items(items.clone()).unwrap(), items);
}
