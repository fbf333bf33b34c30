use clap::Parser;

use bytesyzed_debugger::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = bytesyzed_debugger::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
