use jitsearch::CompileLimits;

use super::dump::{DumpArgs, render};
use super::input::Kind;

fn args(kind: Kind, items: &[&str]) -> DumpArgs {
    DumpArgs {
        kind,
        items: items.iter().map(|s| s.to_string()).collect(),
        limits: CompileLimits::default(),
        color: false,
    }
}

#[test]
fn interval_listing() {
    let res = render(args(Kind::Interval, &["0", "1", "2"])).unwrap();

    insta::assert_snapshot!(res, @r"
    0000  0f 2f 05 38 00 00 00           comiss xmm0, [003f]
    0007  0f 83 19 00 00 00              jae 0026
    000d  0f 2f 05 2f 00 00 00           comiss xmm0, [0043]
    0014  0f 83 06 00 00 00              jae 0020
    001a  b8 ff ff ff ff                 mov eax, -1
    001f  c3                             ret
    0020  b8 00 00 00 00                 mov eax, 0
    0025  c3                             ret
    0026  0f 2f 05 1a 00 00 00           comiss xmm0, [0047]
    002d  0f 83 06 00 00 00              jae 0039
    0033  b8 01 00 00 00                 mov eax, 1
    0038  c3                             ret
    0039  b8 ff ff ff ff                 mov eax, -1
    003e  c3                             ret
    003f  00 00 80 3f                    .f32 1.0
    0043  00 00 00 00                    .f32 0.0
    0047  00 00 00 40                    .f32 2.0
    ");
}

#[test]
fn table_listing() {
    let res = render(args(Kind::Table, &["1=10", "-3=30"])).unwrap();

    insta::assert_snapshot!(res, @r"
    0000  81 ff 01 00 00 00              cmp edi, 1
    0006  0f 8d 22 00 00 00              jge 002e
    000c  81 ff fd ff ff ff              cmp edi, -3
    0012  0f 85 0b 00 00 00              jne 0023
    0018  48 b8 1e 00 00 00 00 00 00 00  mov rax, 30
    0022  c3                             ret
    0023  48 b8 00 00 00 00 00 00 00 00  mov rax, 0
    002d  c3                             ret
    002e  0f 85 0b 00 00 00              jne 003f
    0034  48 b8 0a 00 00 00 00 00 00 00  mov rax, 10
    003e  c3                             ret
    003f  48 b8 00 00 00 00 00 00 00 00  mov rax, 0
    0049  c3                             ret
    ");
}

#[test]
fn errors_are_reported() {
    insta::assert_snapshot!(
        render(args(Kind::Interval, &["2", "1"])).unwrap_err(),
        @"invalid input: breakpoint 1 is not greater than the one before it"
    );
    insta::assert_snapshot!(
        render(args(Kind::Table, &["1=0"])).unwrap_err(),
        @"invalid payload for key 1: 0 is reserved for a miss"
    );
    insta::assert_snapshot!(
        render(args(Kind::Table, &["1:2"])).unwrap_err(),
        @"invalid entry `1:2` (expected KEY=VALUE)"
    );
}

#[test]
fn limits_are_applied() {
    let mut args = args(Kind::Interval, &["0", "1", "2"]);
    args.limits = CompileLimits::new().max_keys(2);

    insta::assert_snapshot!(render(args).unwrap_err(), @"invalid input: 3 keys exceed the limit of 2");
}
