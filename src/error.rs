// error.rs
//
// Error types for loading hex dumps and parsing address selections.
// Instruction decoding has no error type: unknown encodings are rendered
// as placeholder mnemonics.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to build a memory image from a hex dump. Always fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The text after `@` is not a base-16 `u32`.
    #[error("line {line}: invalid address '{token}'")]
    InvalidAddress { line: usize, token: String },

    /// A data token is not a base-16 byte.
    #[error("line {line}: invalid byte '{token}'")]
    InvalidByte { line: usize, token: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn invalid_address(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidAddress { line, token: token.into() }
    }

    pub fn invalid_byte(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidByte { line, token: token.into() }
    }

    /// The 1-based line the error points at, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidAddress { line, .. } | Self::InvalidByte { line, .. } => Some(*line),
            Self::Io { .. } => None,
        }
    }

    /// Like [`LoadError::with_source_context`], reading the input back from `path`.
    pub fn with_file_context(&self, path: &Path) -> String {
        if self.line().is_none() {
            return self.to_string();
        }
        match fs::read_to_string(path) {
            Ok(source) => self.with_source_context(&source),
            Err(_) => format!("Error at {} (could not read {})", self, path.display()),
        }
    }

    /// Render the error followed by a few lines of the input around it.
    pub fn with_source_context(&self, source: &str) -> String {
        let Some(line_num) = self.line() else {
            return self.to_string();
        };
        let lines: Vec<&str> = source.lines().collect();
        let start = line_num.saturating_sub(3);
        let end = (line_num + 2).min(lines.len());
        let mut context = format!("Error at {}\n", self);
        for (i, text) in lines.iter().enumerate().take(end).skip(start) {
            let marker = if i + 1 == line_num { ">>> " } else { "    " };
            context.push_str(&format!("{}{:4}: {}\n", marker, i + 1, text));
        }
        context
    }
}

/// A malformed address spec on the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid address '{token}' in '{spec}'")]
    InvalidNumber { spec: String, token: String },

    #[error("range '{spec}' ends before it starts")]
    ReversedRange { spec: String },

    #[error("address spec '{spec}' runs past the end of the address space")]
    Overflow { spec: String },

    #[error("address spec '{spec}' covers {words} words, more than the limit of {limit}")]
    TooLarge { spec: String, words: u32, limit: u32 },
}
