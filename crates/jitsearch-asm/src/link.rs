//! Relocation pass: patch every placeholder with its final displacement.

use crate::assembler::Unlinked;
use crate::encoding::PLACEHOLDER_SIZE;
use crate::label::Label;

/// Error during linking. Every variant indicates a codegen defect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("no definition for {0:?}")]
    MissingLabel(Label),

    #[error("{0:?} is defined more than once")]
    DuplicateLabel(Label),

    #[error("displacement {displacement} to {label:?} does not fit in 32 bits")]
    DisplacementOverflow { label: Label, displacement: i64 },

    #[error("placeholder at {offset} runs past the end of a {len}-byte buffer")]
    PlaceholderOutOfBounds { offset: usize, len: usize },
}

/// Fully resolved code, ready to be mapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Linked {
    bytes: Vec<u8>,
    code_len: usize,
}

impl Linked {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total size including the constant pool.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Size of the instruction stream, excluding the constant pool.
    pub fn code_len(&self) -> usize {
        self.code_len
    }

    /// Trailing constant-pool bytes.
    pub fn pool(&self) -> &[u8] {
        &self.bytes[self.code_len..]
    }
}

/// Resolve all label usages against their definitions.
///
/// Runs over every usage before returning; the buffer is only handed back
/// once no placeholder is left unpatched.
pub fn link(unlinked: Unlinked) -> Result<Linked, LinkError> {
    let Unlinked {
        mut code,
        definitions,
        usages,
        redefined,
        code_len,
    } = unlinked;

    if let Some(&label) = redefined.first() {
        return Err(LinkError::DuplicateLabel(label));
    }

    for usage in &usages {
        let &target = definitions
            .get(&usage.label)
            .ok_or(LinkError::MissingLabel(usage.label))?;

        let displacement = target as i64 - usage.offset as i64 - usage.kind.correction();
        let Ok(rel) = i32::try_from(displacement) else {
            return Err(LinkError::DisplacementOverflow {
                label: usage.label,
                displacement,
            });
        };

        let len = code.len();
        let field = code
            .get_mut(usage.offset..usage.offset + PLACEHOLDER_SIZE)
            .ok_or(LinkError::PlaceholderOutOfBounds {
                offset: usage.offset,
                len,
            })?;
        field.copy_from_slice(&rel.to_le_bytes());
    }

    tracing::trace!(
        usages = usages.len(),
        definitions = definitions.len(),
        bytes = code.len(),
        "linked"
    );

    Ok(Linked {
        bytes: code,
        code_len,
    })
}
