//! Matrix output for the CLI frontend.
//!
//! Writes an assembled operator to stdout or a file in one of several
//! text formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::assembly::AssemblyStats;
use crate::error::{Result, StencilError};
use crate::sparse::CsrMatrix;

/// Largest operator size the dense writer accepts.
pub const MAX_DENSE_UNKNOWNS: usize = 1024;

/// Text format for the assembled matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Shape, non-zero count and rows per node class
    Summary,
    /// One `row col value` line per stored entry (0-based)
    Triplets,
    /// Whitespace-separated dense table
    Dense,
    /// Matrix Market coordinate format (1-based)
    Mtx,
}

fn io_error(e: io::Error) -> StencilError {
    StencilError::output(e.to_string())
}

fn file_error(path: &Path) -> impl Fn(io::Error) -> StencilError + '_ {
    move |e| StencilError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// Write `matrix` to `out` in the given format.
pub fn write_matrix<W: Write>(
    out: &mut W,
    matrix: &CsrMatrix,
    stats: &AssemblyStats,
    format: OutputFormat,
) -> Result<()> {
    write_with(out, matrix, stats, format, io_error)
}

/// Write a short human-readable summary.
pub fn write_summary<W: Write>(out: &mut W, matrix: &CsrMatrix, stats: &AssemblyStats) -> Result<()> {
    summary_lines(out, matrix, stats).map_err(io_error)
}

/// Write one `row col value` line per stored entry.
pub fn write_triplets<W: Write>(out: &mut W, matrix: &CsrMatrix) -> Result<()> {
    triplet_lines(out, matrix).map_err(io_error)
}

/// Write the matrix as a dense table, one line per row.
///
/// Fails with [`StencilError::OutputError`] for more than
/// [`MAX_DENSE_UNKNOWNS`] rows.
pub fn write_dense<W: Write>(out: &mut W, matrix: &CsrMatrix) -> Result<()> {
    check_dense(matrix)?;
    dense_lines(out, matrix).map_err(io_error)
}

/// Write the matrix in Matrix Market `coordinate real general` format.
pub fn write_matrix_market<W: Write>(out: &mut W, matrix: &CsrMatrix) -> Result<()> {
    matrix_market_lines(out, matrix).map_err(io_error)
}

fn write_with<W, F>(
    out: &mut W,
    matrix: &CsrMatrix,
    stats: &AssemblyStats,
    format: OutputFormat,
    on_io_error: F,
) -> Result<()>
where
    W: Write,
    F: Fn(io::Error) -> StencilError,
{
    let written = match format {
        OutputFormat::Summary => summary_lines(out, matrix, stats),
        OutputFormat::Triplets => triplet_lines(out, matrix),
        OutputFormat::Dense => {
            check_dense(matrix)?;
            dense_lines(out, matrix)
        }
        OutputFormat::Mtx => matrix_market_lines(out, matrix),
    };
    written.map_err(on_io_error)
}

fn check_dense(matrix: &CsrMatrix) -> Result<()> {
    if matrix.nrows() > MAX_DENSE_UNKNOWNS {
        return Err(StencilError::output(format!(
            "dense output limited to {MAX_DENSE_UNKNOWNS} rows, matrix has {}",
            matrix.nrows()
        )));
    }
    Ok(())
}

fn summary_lines<W: Write>(out: &mut W, matrix: &CsrMatrix, stats: &AssemblyStats) -> io::Result<()> {
    writeln!(out, "shape:    {} x {}", matrix.nrows(), matrix.ncols())?;
    write!(out, "{stats}")
}

fn triplet_lines<W: Write>(out: &mut W, matrix: &CsrMatrix) -> io::Result<()> {
    for r in 0..matrix.nrows() {
        for (c, v) in matrix.row(r) {
            writeln!(out, "{r} {c} {v}")?;
        }
    }
    Ok(())
}

fn dense_lines<W: Write>(out: &mut W, matrix: &CsrMatrix) -> io::Result<()> {
    let dense = matrix.to_dense();
    for row in dense.chunks(matrix.ncols()) {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

fn matrix_market_lines<W: Write>(out: &mut W, matrix: &CsrMatrix) -> io::Result<()> {
    writeln!(out, "%%MatrixMarket matrix coordinate real general")?;
    writeln!(out, "{} {} {}", matrix.nrows(), matrix.ncols(), matrix.nnz())?;
    for r in 0..matrix.nrows() {
        for (c, v) in matrix.row(r) {
            writeln!(out, "{} {} {v}", r + 1, c + 1)?;
        }
    }
    Ok(())
}

/// Write `matrix` to the file at `path`, or to stdout when `path` is None.
///
/// Any io failure on a file, including mid-write, is reported as
/// [`StencilError::FileWriteError`] carrying the path.
pub fn emit(
    path: Option<&Path>,
    matrix: &CsrMatrix,
    stats: &AssemblyStats,
    format: OutputFormat,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(file_error(path))?;
            let mut out = BufWriter::new(file);
            write_with(&mut out, matrix, stats, format, file_error(path))?;
            out.flush().map_err(file_error(path))
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_matrix(&mut out, matrix, stats, format)?;
            out.flush().map_err(io_error)
        }
    }
}
