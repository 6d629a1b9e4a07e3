//! CLI entry point for the fragment generator

use clap::Parser;
use fragmentgen::io::cli::{Cli, FileProcessor};
use fragmentgen::io::logging;

fn main() -> fragmentgen::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
