#![allow(dead_code)]

pub mod ring_logger;

pub use ring_logger::{init_logger, records_containing};

use std::fs;
use std::path::{Path, PathBuf};

use bytesyzed_debugger::constants::{MEMORY_SIZE, REGISTER_COUNT};
use bytesyzed_debugger::dump::DumpImage;

/// Scratch directory unique to one test.
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "bytesyzed_debugger_{}_{}",
            std::process::id(),
            test
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `image` the way the emulator dumps it.
    pub fn write_dump(&self, name: &str, image: &DumpImage) -> PathBuf {
        let mut buf = Vec::new();
        image.write_output(&mut buf).unwrap();
        self.write(name, std::str::from_utf8(&buf).unwrap())
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Zeroed memory with a distinct value in every register.
pub fn sample_state() -> (Vec<u8>, Vec<u8>) {
    let memory = vec![0u8; MEMORY_SIZE];
    let registers = (0..REGISTER_COUNT as u8).map(|r| r * 0x11).collect();
    (memory, registers)
}

/// Renders a debug file listing `memory` and `registers` in tagged blocks.
pub fn debug_file_text(memory: &[&str], registers: &[&str]) -> String {
    let mut text = String::from("; generated reference\n");
    text.push_str("!mem#-------------\n");
    for v in memory {
        text.push_str(&format!("0x{}\n", v));
    }
    text.push_str("!mem!-------------\n");
    text.push_str("!regs#------------\n");
    for v in registers {
        text.push_str(&format!("0x{}\n", v));
    }
    text.push_str("!regs!------------\n");
    text
}

pub fn hex_strings(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

pub fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

pub fn output_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn fixture(path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
