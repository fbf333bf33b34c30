use std::io::{self, Write};

use crate::constants::*;

/// Memory and register values of one ByteSyzed state, kept as the
/// two-character strings they were read as.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpImage {
    pub memory: Vec<String>,
    pub registers: Vec<String>,
}

impl DumpImage {
    pub fn new(memory: Vec<String>, registers: Vec<String>) -> Self {
        Self { memory, registers }
    }

    /// Builds an image from raw machine state, formatted the way the
    /// emulator writes its file dump.
    pub fn from_bytes(memory: &[u8], registers: &[u8]) -> Self {
        Self {
            memory: memory.iter().map(|b| format!("{:02X}", b)).collect(),
            registers: registers.iter().map(|b| format!("{:02X}", b)).collect(),
        }
    }

    /// Fills memory with `PAD_VALUE` up to `MEMORY_SIZE`. Registers are
    /// never padded.
    pub fn pad_memory(&mut self) {
        if self.memory.len() < MEMORY_SIZE {
            self.memory.resize(MEMORY_SIZE, PAD_VALUE.to_string());
        }
    }

    /// Writes the image in output-file format, one value per line.
    pub fn write_output<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for value in self.memory.iter().chain(self.registers.iter()) {
            writeln!(w, "{}", value)?;
        }
        Ok(())
    }
}
