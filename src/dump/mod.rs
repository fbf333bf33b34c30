mod debug_file;
mod error;
mod image;
mod output_file;

pub use debug_file::{ScanState, parse_debug, parse_debug_file};
pub use error::ParseError;
pub use image::DumpImage;
pub use output_file::{parse_output, parse_output_file};

/// Slice of `line` at the half-open column range, if the line reaches it.
fn value_at(line: &str, (start, end): (usize, usize)) -> Option<&str> {
    line.get(start..end)
}
