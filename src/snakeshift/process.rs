//! Line-oriented file processing
//!
//! `process_file` is a thin I/O wrapper around the string-based conversion
//! in [`crate::snakeshift::convert`]: it reads the input file line by line,
//! converts each line, and writes the results to the output file in order.
//! There is no recovery on mid-stream faults and no cleanup of a partially
//! written output file.

use crate::snakeshift::convert::convert_line;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Errors that can occur while processing a file
#[derive(Debug)]
pub enum ProcessError {
    /// The input file does not exist or cannot be opened for reading
    InputNotFound(String),
    /// The output file cannot be created or opened for writing
    OutputUnwritable(String),
    /// A read or write failed mid-stream
    Io(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InputNotFound(msg) => write!(f, "Cannot read input: {}", msg),
            ProcessError::OutputUnwritable(msg) => write!(f, "Cannot write output: {}", msg),
            ProcessError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Read `input`, convert every whitespace-separated word on every line, and
/// write the converted lines to `output` (created or truncated).
///
/// Lines are read lazily in file order; each output line is the converted
/// tokens joined with single spaces plus a terminating `\n`, so a blank
/// input line comes out as a bare newline. Returns the number of lines
/// written.
///
/// # Errors
///
/// [`ProcessError::InputNotFound`] if the input cannot be opened,
/// [`ProcessError::OutputUnwritable`] if the output cannot be created, and
/// [`ProcessError::Io`] for any fault while reading or writing. A fault
/// mid-stream may leave the output file partially written.
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<usize, ProcessError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let infile = File::open(input)
        .map_err(|e| ProcessError::InputNotFound(format!("{}: {}", input.display(), e)))?;
    let outfile = File::create(output)
        .map_err(|e| ProcessError::OutputUnwritable(format!("{}: {}", output.display(), e)))?;

    let reader = BufReader::new(infile);
    let mut writer = BufWriter::new(outfile);

    let mut lines_written = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| ProcessError::Io(e.to_string()))?;
        writeln!(writer, "{}", convert_line(&line))
            .map_err(|e| ProcessError::Io(e.to_string()))?;
        lines_written += 1;
    }

    // Flush before the handle drops so a late write error surfaces.
    writer.flush().map_err(|e| ProcessError::Io(e.to_string()))?;
    Ok(lines_written)
}
