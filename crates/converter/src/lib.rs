use std::{
    fmt::Write as _,
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument, warn};

pub mod word;
pub mod words;

pub use word::{ParseWordError, WORD_BITS, WORD_BYTES, Word};
pub use words::Words;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Specified path does not exist: {}", .0.display())]
    PathDoesNotExist(PathBuf),
    #[error("Failed to read file {}: {}", .0.display(), .1)]
    ReadFileError(PathBuf, io::Error),
    #[error("Failed to write file {}: {}", .0.display(), .1)]
    WriteFileError(PathBuf, io::Error),
}

/// Convert the binary at `input` into one line of 32 binary digits per
/// little-endian word, written to `output`.
///
/// The output is created or truncated only once the input has been read.
/// Trailing bytes that do not fill a word are dropped. Returns the number of
/// lines written.
#[instrument(skip_all)]
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<usize, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();
    debug!(input = %input.display(), output = %output.display(), "converting");

    if !input.exists() {
        return Err(ConvertError::PathDoesNotExist(input.to_path_buf()));
    }

    let data =
        fs::read(input).map_err(|err| ConvertError::ReadFileError(input.to_path_buf(), err))?;
    debug!(bytes = data.len(), "read input");

    let write_error = |err| ConvertError::WriteFileError(output.to_path_buf(), err);

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(output)
        .map_err(write_error)?;

    let mut writer = BufWriter::new(file);
    let lines = write_binary(&data, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    debug!(lines, "output written");
    Ok(lines)
}

/// Write one binary line per complete word of `data` into `writer`
pub fn write_binary<W: Write>(data: &[u8], mut writer: W) -> io::Result<usize> {
    let mut words = Words::new(data);

    let mut lines = 0;
    for word in words.by_ref() {
        writeln!(writer, "{word}")?;
        lines += 1;
    }

    let remainder = words.remainder();
    if !remainder.is_empty() {
        warn!(
            dropped = remainder.len(),
            "ignoring trailing bytes that do not form a complete word"
        );
    }

    Ok(lines)
}

pub fn convert_to_binary(data: &[u8]) -> Result<String, std::fmt::Error> {
    let words = Words::new(data);

    let mut output = String::with_capacity(words.len() * (WORD_BITS + 1));
    for word in words {
        writeln!(output, "{word}")?;
    }
    Ok(output)
}
