//! Fixed-width x86-64 instruction templates.
//!
//! Every template is an opcode prefix followed by exactly one operand field
//! (or none, for `ret`). Label-bearing operands are 4-byte placeholders that
//! the link pass overwrites; immediates are written directly.
//!
//! Register use follows the System V AMD64 convention: the `f32` query
//! arrives in `xmm0`, the `i32` query in `edi`, results leave in `eax`/`rax`.

use crate::label::UsageKind;

/// Width of every label placeholder (`disp32`/`rel32`).
pub const PLACEHOLDER_SIZE: usize = 4;

/// Operand field that follows a template's opcode bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    /// No operand.
    None,
    /// 32-bit rip-relative displacement to a constant-pool slot.
    Disp32,
    /// 32-bit branch displacement.
    Rel32,
    /// 32-bit immediate.
    Imm32,
    /// 64-bit immediate.
    Imm64,
}

impl Operand {
    pub fn size(self) -> usize {
        match self {
            Self::None => 0,
            Self::Disp32 | Self::Rel32 | Self::Imm32 => 4,
            Self::Imm64 => 8,
        }
    }

    /// How the link pass treats this operand, if it refers to a label.
    pub fn usage_kind(self) -> Option<UsageKind> {
        match self {
            Self::Disp32 => Some(UsageKind::Dereference),
            Self::Rel32 => Some(UsageKind::Jump),
            Self::None | Self::Imm32 | Self::Imm64 => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Opcode {
    /// `comiss xmm0, dword ptr [rip + disp32]`
    ComissXmm0Rip,
    /// `jae rel32` (unsigned/float "greater or equal")
    Jae,
    /// `jge rel32` (signed "greater or equal")
    Jge,
    /// `jne rel32`
    Jne,
    /// `cmp edi, imm32`
    CmpEdiImm32,
    /// `mov eax, imm32`
    MovEaxImm32,
    /// `mov rax, imm64`
    MovRaxImm64,
    /// `ret`
    Ret,
}

impl Opcode {
    pub const ALL: [Opcode; 8] = [
        Self::ComissXmm0Rip,
        Self::Jae,
        Self::Jge,
        Self::Jne,
        Self::CmpEdiImm32,
        Self::MovEaxImm32,
        Self::MovRaxImm64,
        Self::Ret,
    ];

    /// Opcode bytes preceding the operand field.
    pub fn prefix(self) -> &'static [u8] {
        match self {
            Self::ComissXmm0Rip => &[0x0F, 0x2F, 0x05],
            Self::Jae => &[0x0F, 0x83],
            Self::Jge => &[0x0F, 0x8D],
            Self::Jne => &[0x0F, 0x85],
            Self::CmpEdiImm32 => &[0x81, 0xFF],
            Self::MovEaxImm32 => &[0xB8],
            Self::MovRaxImm64 => &[0x48, 0xB8],
            Self::Ret => &[0xC3],
        }
    }

    pub fn operand(self) -> Operand {
        match self {
            Self::ComissXmm0Rip => Operand::Disp32,
            Self::Jae | Self::Jge | Self::Jne => Operand::Rel32,
            Self::CmpEdiImm32 | Self::MovEaxImm32 => Operand::Imm32,
            Self::MovRaxImm64 => Operand::Imm64,
            Self::Ret => Operand::None,
        }
    }

    /// Encoded size in bytes, prefix plus operand.
    pub fn size(self) -> usize {
        self.prefix().len() + self.operand().size()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::ComissXmm0Rip => "comiss",
            Self::Jae => "jae",
            Self::Jge => "jge",
            Self::Jne => "jne",
            Self::CmpEdiImm32 => "cmp",
            Self::MovEaxImm32 | Self::MovRaxImm64 => "mov",
            Self::Ret => "ret",
        }
    }

    /// Recognize the template whose prefix starts `bytes`.
    ///
    /// Prefixes are prefix-free among themselves, so at most one matches.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| bytes.starts_with(op.prefix()) && bytes.len() >= op.size())
    }
}

/// Branch conditions available to codegen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cond {
    /// Above or equal (CF = 0). After `comiss`, taken for `x >= c`; an
    /// unordered compare sets CF, so NaN falls through.
    AboveOrEqual,
    /// Signed greater or equal.
    GreaterOrEqual,
    NotEqual,
}

impl Cond {
    pub fn opcode(self) -> Opcode {
        match self {
            Self::AboveOrEqual => Opcode::Jae,
            Self::GreaterOrEqual => Opcode::Jge,
            Self::NotEqual => Opcode::Jne,
        }
    }
}
