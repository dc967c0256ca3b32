// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::io;
use std::path::Path;

/// The main error type for jessy parsing and compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum JessyError {
    /// Raised when a non-blank, non-comment line has no `:` separator.
    ParseError {
        line: usize,
        content: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        kind: io::ErrorKind,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an options record cannot be deserialized.
    ConfigError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    RuntimeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl JessyError {
    pub(crate) fn missing_separator(line: usize, content: &str) -> Self {
        JessyError::ParseError {
            line,
            content: content.to_string(),
            hint: Some("Every entry needs a ':' between key and value".into()),
            code: Some(101),
        }
    }

    /// Wrap a read failure, keeping its kind and OS message.
    pub fn from_io_error<P: AsRef<Path>>(err: &io::Error, path: P) -> Self {
        JessyError::FileError {
            message: err.to_string(),
            path: path.as_ref().to_string_lossy().to_string(),
            kind: err.kind(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        }
    }

    /// Numeric code of the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            JessyError::ParseError { code, .. }
            | JessyError::FileError { code, .. }
            | JessyError::ConfigError { code, .. }
            | JessyError::RuntimeError { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for JessyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JessyError::ParseError { line, content, hint, code } =>
                write!(f, "[JESSY] Parse Error at line {}: missing ':' in '{}'{}",
                    line, content, suffix(hint, code)
                ),
            JessyError::FileError { message, path, hint, code, .. } =>
                write!(f, "[JESSY] File Error '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
            JessyError::ConfigError { message, hint, code } =>
                write!(f, "[JESSY] Config Error: {}{}",
                    message, suffix(hint, code)
                ),
            JessyError::RuntimeError { message, hint, code } =>
                write!(f, "[JESSY] Runtime Error: {}{}",
                    message, suffix(hint, code)
                ),
        }
    }
}

impl std::error::Error for JessyError {}
