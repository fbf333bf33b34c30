use std::fmt;

use crate::constants::{MEMORY_SIZE, REGISTER_COUNT};

/// One problem found while checking a dump against its reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    MemoryOverflow {
        count: usize,
    },
    RegisterOverflow {
        count: usize,
    },
    /// Fewer than `REGISTER_COUNT` registers in the reference.
    UnspecifiedRegisters {
        missing: usize,
    },
    MemoryMismatch {
        address: usize,
        expected: String,
        actual: String,
    },
    RegisterMismatch {
        register: usize,
        expected: String,
        actual: String,
    },
}

impl Diagnostic {
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Diagnostic::MemoryMismatch { .. } | Diagnostic::RegisterMismatch { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MemoryOverflow { .. } => {
                write!(f, "Error: Memory exceeds {} addresses", MEMORY_SIZE)
            }
            Diagnostic::RegisterOverflow { .. } => {
                write!(f, "Error: Number of registers exceeds {}", REGISTER_COUNT)
            }
            Diagnostic::UnspecifiedRegisters { missing } => {
                write!(f, "Error: {} registers are unspecified", missing)
            }
            // Memory lines keep the leading space of the established report format.
            Diagnostic::MemoryMismatch {
                address,
                expected,
                actual,
            } => write!(
                f,
                " Error: At address 0x{:02x} should be {} but is {}",
                address, expected, actual
            ),
            Diagnostic::RegisterMismatch {
                register,
                expected,
                actual,
            } => write!(
                f,
                "Error: Register 0x{:02x} should be {} but is {}",
                register, expected, actual
            ),
        }
    }
}
