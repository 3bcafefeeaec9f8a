//! Human-readable listing of linked code.
//!
//! One line per instruction: offset, raw bytes, then the decoded form. Branch
//! and rip-relative operands are shown as absolute offsets into the buffer.
//! The constant pool follows as `.f32` entries.

use std::fmt::Write as _;

use jitsearch_core::Colors;

use crate::encoding::Opcode;
use crate::link::Linked;

/// Width of the raw-bytes column: ten bytes, the longest template.
const BYTES_WIDTH: usize = 10 * 3 - 1;

/// Render a linked buffer as an annotated listing.
pub fn dump(linked: &Linked, colors: Colors) -> String {
    let mut out = String::new();
    let bytes = linked.as_bytes();
    let code_len = linked.code_len();

    let mut offset = 0;
    while offset < code_len {
        let rest = &bytes[offset..code_len];
        let Some(opcode) = Opcode::decode(rest) else {
            line(&mut out, offset, &rest[..1], &format!(".byte 0x{:02x}", rest[0]), colors);
            offset += 1;
            continue;
        };
        let size = opcode.size();
        let text = render(opcode, offset, &rest[..size], colors);
        line(&mut out, offset, &rest[..size], &text, colors);
        offset += size;
    }

    for chunk in bytes[code_len..].chunks(4) {
        let text = match <[u8; 4]>::try_from(chunk) {
            Ok(raw) => format!(
                "{}.f32{} {}{:?}{}",
                colors.mnemonic,
                colors.reset,
                colors.operand,
                f32::from_le_bytes(raw),
                colors.reset
            ),
            Err(_) => format!(".byte {:02x?}", chunk),
        };
        line(&mut out, offset, chunk, &text, colors);
        offset += chunk.len();
    }

    out
}

fn line(out: &mut String, offset: usize, raw: &[u8], text: &str, colors: Colors) {
    let hex = raw
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "{}{offset:04x}  {hex:<width$}{}  {text}",
        colors.address,
        colors.reset,
        width = BYTES_WIDTH
    )
    .unwrap();
}

fn render(opcode: Opcode, offset: usize, raw: &[u8], colors: Colors) -> String {
    let operand = &raw[opcode.prefix().len()..];
    let mnemonic = format!("{}{}{}", colors.mnemonic, opcode.mnemonic(), colors.reset);
    let green = |s: String| format!("{}{s}{}", colors.operand, colors.reset);

    match opcode {
        Opcode::ComissXmm0Rip => {
            let target = relative_target(offset + raw.len(), operand);
            format!("{mnemonic} xmm0, [{}]", green(format!("{target:04x}")))
        }
        Opcode::Jae | Opcode::Jge | Opcode::Jne => {
            let target = relative_target(offset + raw.len(), operand);
            format!("{mnemonic} {}", green(format!("{target:04x}")))
        }
        Opcode::CmpEdiImm32 => format!("{mnemonic} edi, {}", read_i32(operand)),
        Opcode::MovEaxImm32 => format!("{mnemonic} eax, {}", read_i32(operand)),
        Opcode::MovRaxImm64 => {
            let mut imm = [0u8; 8];
            imm.copy_from_slice(&operand[..8]);
            format!("{mnemonic} rax, {}", u64::from_le_bytes(imm))
        }
        Opcode::Ret => mnemonic,
    }
}

fn read_i32(operand: &[u8]) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&operand[..4]);
    i32::from_le_bytes(raw)
}

/// Absolute offset reached by a 32-bit displacement measured from `next`.
fn relative_target(next: usize, operand: &[u8]) -> i64 {
    next as i64 + read_i32(operand) as i64
}
