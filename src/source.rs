//! Input and output endpoints.
//!
//! The CLI follows the usual `-` convention: a positional `-` reads standard
//! input, and `--output -` (or omitting `--output` entirely) writes standard
//! output.
//!
//! Each input is opened, fully read, and released before the next one is
//! touched. The output is opened up front — an unusable destination fails
//! before any input is processed — but written exactly once, after the whole
//! index has been serialized, so an aborted run leaves at worst a truncated
//! file and never a partially-serialized document.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("cannot read {origin}: {source}")]
    Read { origin: String, source: io::Error },
    #[error("cannot write {target}: {source}")]
    Write { target: String, source: io::Error },
}

/// One readable metadata source given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, spelled `-`.
    Stdin,
    /// A metadata.json file on disk.
    File(PathBuf),
}

impl Input {
    /// Interpret a positional argument, mapping `-` to standard input.
    pub fn from_arg(arg: &Path) -> Input {
        if arg == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    /// Display label used in errors and the build summary.
    pub fn origin(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Read this source to the end.
    pub fn read(&self) -> Result<String, SourceError> {
        let contents = match self {
            Input::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .map(|_| buf)
            }
            Input::File(path) => std::fs::read_to_string(path),
        };
        contents.map_err(|source| SourceError::Read {
            origin: self.origin(),
            source,
        })
    }
}

/// Where the serialized index goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output, the default.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret the `--output` argument, mapping absence and `-` to
    /// standard output.
    pub fn from_arg(arg: Option<&Path>) -> OutputTarget {
        match arg {
            None => OutputTarget::Stdout,
            Some(path) if path == Path::new("-") => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path.to_path_buf()),
        }
    }

    /// Display label used in errors and the build summary.
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "<stdout>".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }

    /// Open the destination for writing.
    ///
    /// Files are created (and truncated) here, before any input is read, so
    /// an unwritable path aborts the run up front.
    pub fn open(&self) -> Result<OutputHandle, SourceError> {
        let sink = match self {
            OutputTarget::Stdout => Sink::Stdout,
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| SourceError::Write {
                    target: self.describe(),
                    source,
                })?;
                Sink::File(file)
            }
        };
        Ok(OutputHandle {
            target: self.describe(),
            sink,
        })
    }
}

/// An opened output destination. Written exactly once.
#[derive(Debug)]
pub struct OutputHandle {
    target: String,
    sink: Sink,
}

#[derive(Debug)]
enum Sink {
    Stdout,
    File(File),
}

impl OutputHandle {
    /// Write the serialized document, followed by a trailing newline.
    pub fn write_document(&mut self, document: &str) -> Result<(), SourceError> {
        let result = match &mut self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                write_all(&mut out, document)
            }
            Sink::File(file) => write_all(file, document),
        };
        result.map_err(|source| SourceError::Write {
            target: self.target.clone(),
            source,
        })
    }
}

fn write_all(writer: &mut impl Write, document: &str) -> io::Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
