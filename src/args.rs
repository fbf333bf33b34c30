use std::path::PathBuf;

use clap::Parser;

/// Compare a ByteSyzed memory dump against a debug reference file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Dump written by the emulator (256 memory lines, then 16 register lines)
    pub output: PathBuf,

    /// Hand-written reference file with !mem# and !regs# blocks
    pub debug: PathBuf,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
