use crate::colors::Colors;

#[test]
fn enabled_styles_every_role() {
    let c = Colors::new(true);

    assert_eq!(c.mnemonic, "\x1b[34m");
    assert_eq!(c.operand, "\x1b[32m");
    assert_eq!(c.address, "\x1b[2m");
    assert_eq!(c.reset, "\x1b[0m");
}

#[test]
fn disabled_and_default_are_plain() {
    for c in [Colors::new(false), Colors::default()] {
        let styled = format!("{}{}{}{}", c.mnemonic, c.operand, c.address, c.reset);
        assert!(styled.is_empty());
    }
}
