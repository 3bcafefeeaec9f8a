use jitsearch_core::Colors;

use super::assembler::Assembler;
use super::dump::dump;
use super::encoding::Cond;
use super::label::Label;
use super::link::{Linked, link};

fn linked(asm: Assembler) -> Linked {
    link(asm.finish()).unwrap()
}

#[test]
fn float_compare_with_pool() {
    let mut asm = Assembler::new();
    asm.comiss_xmm0(Label(0));
    asm.jcc(Cond::AboveOrEqual, Label(1));
    asm.mov_eax(-1);
    asm.ret();
    asm.define(Label(1));
    asm.mov_eax(-1);
    asm.ret();
    asm.begin_pool();
    asm.pool_f32(Label(0), 2.5);

    let res = dump(&linked(asm), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    0000  0f 2f 05 12 00 00 00           comiss xmm0, [0019]
    0007  0f 83 06 00 00 00              jae 0013
    000d  b8 ff ff ff ff                 mov eax, -1
    0012  c3                             ret
    0013  b8 ff ff ff ff                 mov eax, -1
    0018  c3                             ret
    0019  00 00 20 40                    .f32 2.5
    ");
}

#[test]
fn integer_compare_with_wide_immediate() {
    let mut asm = Assembler::new();
    asm.cmp_edi(7);
    asm.jcc(Cond::NotEqual, Label(0));
    asm.mov_rax(42);
    asm.ret();
    asm.define(Label(0));
    asm.mov_rax(0);
    asm.ret();

    let res = dump(&linked(asm), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    0000  81 ff 07 00 00 00              cmp edi, 7
    0006  0f 85 0b 00 00 00              jne 0017
    000c  48 b8 2a 00 00 00 00 00 00 00  mov rax, 42
    0016  c3                             ret
    0017  48 b8 00 00 00 00 00 00 00 00  mov rax, 0
    0021  c3                             ret
    ");
}

#[test]
fn colored_output_wraps_mnemonics() {
    let mut asm = Assembler::new();
    asm.ret();

    let res = dump(&linked(asm), Colors::ON);

    assert!(res.contains("\x1b[34mret\x1b[0m"), "{res:?}");
}

#[test]
fn empty_buffer_dumps_nothing() {
    let res = dump(&linked(Assembler::new()), Colors::OFF);

    assert_eq!(res, "");
}
