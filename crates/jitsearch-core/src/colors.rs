//! ANSI styling for code listings.

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Styles for the parts of a listing line.
///
/// Standard 16-color codes only, readable on light and dark themes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colors {
    /// Instruction and directive names.
    pub mnemonic: &'static str,
    /// Branch targets, pool references and constants.
    pub operand: &'static str,
    /// Offset and raw-byte columns.
    pub address: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        mnemonic: BLUE,
        operand: GREEN,
        address: DIM,
        reset: RESET,
    };

    pub const OFF: Self = Self {
        mnemonic: "",
        operand: "",
        address: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
