pub mod args;
pub mod compare;
pub mod constants;
pub mod dump;
pub mod error;

pub use error::Error;

use log::info;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use compare::compare;
use dump::{parse_debug_file, parse_output_file};

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()));

    // Redirect records to the file instead of stderr when a path is given.
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Checks the dump at `output` against the reference at `debug_file`,
/// writing the banner and every diagnostic to `out`.
///
/// Returns whether anything was reported. Mismatches are not errors; only
/// malformed input or a truncated dump is.
pub fn debug<W: Write>(output: &Path, debug_file: &Path, out: &mut W) -> Result<bool, Error> {
    let actual = parse_output_file(output)?;
    let expected = parse_debug_file(debug_file)?;
    writeln!(
        out,
        "Testing {} against {}",
        output.display(),
        debug_file.display()
    )?;

    let comparison = compare(&actual, &expected)?;
    for diagnostic in &comparison.diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }

    writeln!(out, "Testing Complete")?;
    info!(
        "{}: {} diagnostics, {} value mismatches",
        output.display(),
        comparison.diagnostics.len(),
        comparison.mismatch_count()
    );
    Ok(comparison.failed())
}

/// Entry point used by the binary. The failure flag is informational and
/// does not change the exit status.
pub fn run(args: args::Args) -> Result<(), Error> {
    setup_logging(&args.log_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = debug(&args.output, &args.debug, &mut out)?;
    Ok(())
}
