use jitsearch_asm::dump;
use jitsearch_core::Colors;

use super::emitter::{emit_interval_search, emit_key_table};
use super::error::EmitError;
use super::limits::CompileLimits;

fn interval(values: &[f32]) -> Result<String, EmitError> {
    emit_interval_search(values, &CompileLimits::default()).map(|l| dump(&l, Colors::OFF))
}

fn table(entries: &[(i32, usize)]) -> Result<String, EmitError> {
    emit_key_table(entries, &CompileLimits::default()).map(|l| dump(&l, Colors::OFF))
}

#[test]
fn empty_inputs_are_rejected() {
    assert_eq!(interval(&[]), Err(EmitError::Empty));
    assert_eq!(table(&[]), Err(EmitError::Empty));
}

#[test]
fn unsorted_breakpoints_are_rejected() {
    assert_eq!(
        interval(&[1.0, 3.0, 2.0]),
        Err(EmitError::Unsorted { index: 2 })
    );
}

#[test]
fn repeated_breakpoints_are_rejected() {
    assert_eq!(
        interval(&[1.0, 2.0, 2.0, 3.0]),
        Err(EmitError::Unsorted { index: 2 })
    );
}

#[test]
fn nan_breakpoints_are_rejected() {
    assert_eq!(
        interval(&[1.0, f32::NAN]),
        Err(EmitError::NotANumber { index: 1 })
    );
    assert_eq!(
        interval(&[f32::NAN]),
        Err(EmitError::NotANumber { index: 0 })
    );
}

#[test]
fn infinite_breakpoints_are_accepted() {
    assert!(interval(&[f32::NEG_INFINITY, 0.0, f32::INFINITY]).is_ok());
}

#[test]
fn zero_payload_is_rejected() {
    assert_eq!(
        table(&[(1, 10), (2, 0)]),
        Err(EmitError::NullPayload { key: 2 })
    );
}

#[test]
fn duplicate_keys_are_rejected() {
    assert_eq!(
        table(&[(5, 1), (1, 2), (5, 3)]),
        Err(EmitError::DuplicateKey { key: 5 })
    );
}

#[test]
fn table_entries_are_sorted_before_building() {
    assert_eq!(
        table(&[(5, 50), (-3, 30), (1, 10)]),
        table(&[(-3, 30), (1, 10), (5, 50)])
    );
}

#[test]
fn key_limit() {
    let limits = CompileLimits::new().max_keys(2);

    assert_eq!(
        emit_interval_search(&[1.0, 2.0, 3.0], &limits),
        Err(EmitError::TooManyKeys { count: 3, limit: 2 })
    );
    assert!(emit_key_table(&[(1, 1), (2, 2)], &limits).is_ok());
}

#[test]
fn code_size_limit() {
    let limits = CompileLimits::new().max_code_size(16);

    assert_eq!(
        emit_interval_search(&[2.5], &limits),
        Err(EmitError::CodeTooLarge { size: 29, limit: 16 })
    );
    assert_eq!(
        emit_key_table(&[(7, 70)], &limits),
        Err(EmitError::CodeTooLarge { size: 34, limit: 16 })
    );
}

#[test]
fn pool_follows_code() {
    let linked = emit_interval_search(&[1.0, 2.0], &CompileLimits::default()).unwrap();

    assert_eq!(linked.code_len(), 0x2c);
    assert_eq!(linked.len(), 0x34);
    assert_eq!(linked.pool().len(), 8);
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        [
            EmitError::Empty,
            EmitError::Unsorted { index: 3 },
            EmitError::NotANumber { index: 0 },
            EmitError::DuplicateKey { key: -4 },
            EmitError::NullPayload { key: 9 },
            EmitError::TooManyKeys { count: 5, limit: 4 },
            EmitError::CodeTooLarge { size: 100, limit: 64 },
        ]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"),
        @r"
    no keys to compile
    breakpoint 3 is not greater than the one before it
    breakpoint 0 is NaN
    key -4 appears more than once
    key 9 maps to 0, which is reserved for a miss
    5 keys exceed the limit of 4
    emitted 100 bytes, limit is 64
    "
    );
}
