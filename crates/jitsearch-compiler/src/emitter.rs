//! Validate, build, emit, link.

use std::num::NonZeroUsize;

use jitsearch_asm::{Linked, Unlinked, link};
use jitsearch_core::{Entry, breakpoints, build_tree};

use crate::codegen::{emit_interval, emit_table};
use crate::error::EmitError;
use crate::limits::CompileLimits;

/// Compile strictly increasing, NaN-free breakpoints into a linked interval search.
pub fn emit_interval_search(values: &[f32], limits: &CompileLimits) -> Result<Linked, EmitError> {
    check_count(values.len(), limits)?;
    for (index, value) in values.iter().enumerate() {
        if value.is_nan() {
            return Err(EmitError::NotANumber { index });
        }
        if index > 0 && *value <= values[index - 1] {
            return Err(EmitError::Unsorted { index });
        }
    }

    let root = build_tree(&breakpoints(values))?;
    tracing::debug!(
        keys = values.len(),
        height = root.height(),
        "interval tree built"
    );

    finish(emit_interval(&root, values.len()), limits)
}

/// Compile key/payload pairs into a linked key table.
///
/// Entries may come in any order. Keys must be unique and payloads non-zero.
pub fn emit_key_table(entries: &[(i32, usize)], limits: &CompileLimits) -> Result<Linked, EmitError> {
    check_count(entries.len(), limits)?;

    let mut items = Vec::with_capacity(entries.len());
    for &(key, value) in entries {
        let Some(value) = NonZeroUsize::new(value) else {
            return Err(EmitError::NullPayload { key });
        };
        items.push(Entry { key, value });
    }
    items.sort_unstable_by_key(|entry| entry.key);
    if let Some(pair) = items.windows(2).find(|pair| pair[0].key == pair[1].key) {
        return Err(EmitError::DuplicateKey { key: pair[0].key });
    }

    let root = build_tree(&items)?;
    tracing::debug!(keys = items.len(), height = root.height(), "table tree built");

    finish(emit_table(&root), limits)
}

fn check_count(count: usize, limits: &CompileLimits) -> Result<(), EmitError> {
    if count == 0 {
        return Err(EmitError::Empty);
    }
    if count > limits.max_keys {
        return Err(EmitError::TooManyKeys {
            count,
            limit: limits.max_keys,
        });
    }
    Ok(())
}

fn finish(unlinked: Unlinked, limits: &CompileLimits) -> Result<Linked, EmitError> {
    let size = unlinked.code.len();
    if size > limits.max_code_size {
        return Err(EmitError::CodeTooLarge {
            size,
            limit: limits.max_code_size,
        });
    }

    let linked = link(unlinked)?;
    tracing::debug!(
        code = linked.code_len(),
        pool = linked.pool().len(),
        "code emitted"
    );
    Ok(linked)
}
