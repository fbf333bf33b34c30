mod diagnostic;
mod error;

pub use diagnostic::Diagnostic;
pub use error::CompareError;

use log::debug;

use crate::constants::{MEMORY_SIZE, REGISTER_COUNT};
use crate::dump::DumpImage;

/// Result of checking a dump against its reference, in report order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub diagnostics: Vec<Diagnostic>,
}

impl Comparison {
    pub fn failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_mismatch()).count()
    }
}

/// Checks the reference sizes, then every memory address and register.
///
/// When the reference has fewer than `REGISTER_COUNT` registers the
/// element-wise pass is skipped. Oversized references are flagged but only
/// their first `MEMORY_SIZE` / `REGISTER_COUNT` entries are compared.
pub fn compare(actual: &DumpImage, expected: &DumpImage) -> Result<Comparison, CompareError> {
    let mut diagnostics = Vec::new();

    if expected.memory.len() > MEMORY_SIZE {
        diagnostics.push(Diagnostic::MemoryOverflow {
            count: expected.memory.len(),
        });
    }
    if expected.registers.len() > REGISTER_COUNT {
        diagnostics.push(Diagnostic::RegisterOverflow {
            count: expected.registers.len(),
        });
    }
    if expected.registers.len() < REGISTER_COUNT {
        diagnostics.push(Diagnostic::UnspecifiedRegisters {
            missing: REGISTER_COUNT - expected.registers.len(),
        });
        debug!("skipping element comparison, reference registers incomplete");
        return Ok(Comparison { diagnostics });
    }

    check_len("memory", &actual.memory, MEMORY_SIZE)?;
    check_len("registers", &actual.registers, REGISTER_COUNT)?;
    if expected.memory.len() < MEMORY_SIZE {
        return Err(CompareError::UnpaddedReference {
            found: expected.memory.len(),
        });
    }

    for (address, (want, got)) in expected
        .memory
        .iter()
        .zip(&actual.memory)
        .take(MEMORY_SIZE)
        .enumerate()
    {
        if want != got {
            diagnostics.push(Diagnostic::MemoryMismatch {
                address,
                expected: want.clone(),
                actual: got.clone(),
            });
        }
    }
    for (register, (want, got)) in expected
        .registers
        .iter()
        .zip(&actual.registers)
        .take(REGISTER_COUNT)
        .enumerate()
    {
        if want != got {
            diagnostics.push(Diagnostic::RegisterMismatch {
                register,
                expected: want.clone(),
                actual: got.clone(),
            });
        }
    }

    Ok(Comparison { diagnostics })
}

fn check_len(section: &'static str, values: &[String], expected: usize) -> Result<(), CompareError> {
    if values.len() < expected {
        return Err(CompareError::TruncatedOutput {
            section,
            found: values.len(),
            expected,
        });
    }
    Ok(())
}
