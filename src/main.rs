//! Brick Stencil - operator assembly CLI
//!
//! Assembles the parity-coupled stencil operator for an N x N grid and
//! writes it out for an external solver.
//!
//! # Usage
//!
//! ```bash
//! brick-stencil 8 --format mtx --output operator.mtx
//! RUST_LOG=debug brick-stencil 4 --format dense
//! ```

use std::path::PathBuf;

use brick_stencil::{
    error::Result,
    output::{emit, OutputFormat},
    Assembler,
};
use clap::Parser;
use log::{info, LevelFilter};

/// Parity-coupled grid stencil assembler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension N (the operator is N² x N²)
    #[arg(value_name = "N")]
    n: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose > 0 {
        let level = match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Assemble the operator
    let mut assembler = Assembler::new(args.n)?;
    let matrix = assembler.assemble()?;
    info!(
        "assembled {} unknowns, {} non-zeros",
        matrix.nrows(),
        matrix.nnz()
    );

    // Write it out
    emit(
        args.output.as_deref(),
        &matrix,
        assembler.stats(),
        args.format,
    )?;

    Ok(())
}
