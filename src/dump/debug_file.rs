use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::error::ParseError;
use super::image::DumpImage;
use super::value_at;
use crate::constants::*;

/// Which tagged block the scanner is inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Neutral,
    Memory,
    Registers,
}

impl ScanState {
    /// State after seeing `line`. Markers are checked before the line is
    /// captured, so a start marker is captured and an end marker is not.
    pub fn next(self, line: &str) -> ScanState {
        if line.starts_with(MEM_START) {
            return ScanState::Memory;
        }
        if line.starts_with(REGS_START) {
            return ScanState::Registers;
        }
        match self {
            ScanState::Memory if line.starts_with(MEM_END) => ScanState::Neutral,
            ScanState::Registers if line.starts_with(REGS_END) => ScanState::Neutral,
            state => state,
        }
    }
}

pub fn parse_debug_file(path: &Path) -> Result<DumpImage, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    parse_debug(BufReader::new(file), path)
}

/// Reads the `!mem#` and `!regs#` blocks of a debug file. `path` is only
/// used for error reporting.
pub fn parse_debug<R: BufRead>(reader: R, path: &Path) -> Result<DumpImage, ParseError> {
    let mut state = ScanState::Neutral;
    let mut image = DumpImage::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ParseError::io(path, e))?;
        state = state.next(&line);

        let target = match state {
            ScanState::Neutral => continue,
            ScanState::Memory => &mut image.memory,
            ScanState::Registers => &mut image.registers,
        };
        let value = value_at(&line, DEBUG_VALUE_COLUMNS).ok_or_else(|| ParseError::ShortLine {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.clone(),
        })?;
        target.push(value.to_string());
    }

    // The first capture of each block comes from its start marker.
    // A block that never opened has nothing to drop and is a malformed file.
    for (block, values) in [(MEM_START, &mut image.memory), (REGS_START, &mut image.registers)] {
        if values.is_empty() {
            return Err(ParseError::MissingBlock {
                path: path.to_path_buf(),
                block,
            });
        }
        let divider = values.remove(0);
        debug!("{}: dropped {} divider capture {:?}", path.display(), block, divider);
    }

    debug!(
        "{}: {} memory entries, {} registers before padding",
        path.display(),
        image.memory.len(),
        image.registers.len()
    );
    image.pad_memory();
    Ok(image)
}
