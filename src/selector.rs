use crate::common::{DEFAULT_INPUT_PATH, LINE_MARKER};
use log::debug;
use std::fmt::{self, Display};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    ReadInput { path: PathBuf, error: io::Error },
    WriteOutput(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReadInput { path, .. } => {
                write!(f, "failed to read the log file {}", path.display())
            }
            Error::WriteOutput(_) => {
                write!(f, "failed to write the selected lines")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadInput { error, .. } => Some(error),
            Error::WriteOutput(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Picks the marked lines out of a captured log dump.
///
/// The dump interleaves record lines with continuation lines, so only every
/// other line (starting with the first) is considered. Of those, the ones
/// that begin with [`LINE_MARKER`] are kept.
#[derive(Debug, Clone)]
pub struct LogSelector {
    input_path: PathBuf,
}

impl Default for LogSelector {
    fn default() -> Self {
        LogSelector::new()
    }
}

impl LogSelector {
    pub fn new() -> Self {
        LogSelector::with_input_path(DEFAULT_INPUT_PATH)
    }

    pub fn with_input_path<P: AsRef<Path>>(input_path: P) -> Self {
        LogSelector {
            input_path: input_path.as_ref().to_path_buf(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn read_input(&self) -> Result<String> {
        debug!("reading {}", self.input_path.display());
        fs::read_to_string(&self.input_path).map_err(|error| Error::ReadInput {
            path: self.input_path.clone(),
            error,
        })
    }

    /// Reads the input, then writes the kept lines to `writer` followed by a
    /// single newline. Nothing is written if the input can't be read.
    pub fn run<W: Write>(&self, mut writer: W) -> Result<()> {
        let content = self.read_input()?;
        let lines = filter_lines(&content);
        debug!(
            "kept {} of {} lines from {}",
            lines.len(),
            content.split('\n').count(),
            self.input_path.display()
        );
        let output = render(&lines);
        writeln!(writer, "{output}").map_err(Error::WriteOutput)?;
        writer.flush().map_err(Error::WriteOutput)?;
        debug!("wrote {} bytes", output.len() + 1);
        Ok(())
    }
}

/// Lines at even positions (0, 2, 4, ...) of `content` split on `'\n'`.
/// A trailing newline yields a trailing empty line, and `'\r'` is left alone.
pub fn select_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').step_by(2)
}

/// An empty line has no first character and never matches.
pub fn starts_with_one(line: &str) -> bool {
    line.chars().next() == Some(LINE_MARKER)
}

pub fn filter_lines(content: &str) -> Vec<&str> {
    select_lines(content)
        .filter(|line| starts_with_one(line))
        .collect()
}

pub fn render(lines: &[&str]) -> String {
    lines.join("\n")
}
