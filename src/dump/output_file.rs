use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::error::ParseError;
use super::image::DumpImage;
use super::value_at;
use crate::constants::*;

pub fn parse_output_file(path: &Path) -> Result<DumpImage, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    parse_output(BufReader::new(file), path)
}

/// Reads a positional dump: the first `MEMORY_SIZE` lines are memory, the
/// next `REGISTER_COUNT` lines are registers, anything after is ignored.
///
/// A short file is not an error here; the returned sequences are simply
/// shorter.
pub fn parse_output<R: BufRead>(reader: R, path: &Path) -> Result<DumpImage, ParseError> {
    let mut image = DumpImage::default();

    for (idx, line) in reader
        .lines()
        .take(MEMORY_SIZE + REGISTER_COUNT)
        .enumerate()
    {
        let line = line.map_err(|e| ParseError::io(path, e))?;
        let value = value_at(&line, OUTPUT_VALUE_COLUMNS).ok_or_else(|| ParseError::ShortLine {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.clone(),
        })?;

        if idx < MEMORY_SIZE {
            image.memory.push(value.to_string());
        } else {
            image.registers.push(value.to_string());
        }
    }

    debug!(
        "{}: read {} memory entries and {} registers",
        path.display(),
        image.memory.len(),
        image.registers.len()
    );
    Ok(image)
}
