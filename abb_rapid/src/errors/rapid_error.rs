use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum RapidError {
    /// A list argument had the wrong length or a value is out of its domain.
    InvalidArgument(String),
    /// A dynamic value has a kind RAPID cannot print.
    UnsupportedType(String),
    Io(String),
    NotFound(String),
    /// Only raised when the decoder runs in strict mode.
    Parse { line: usize, message: String },
    Serialization(String),
}

impl RapidError {
    /// Wraps an I/O failure on `path`, keeping missing files distinct.
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RapidError::NotFound(path.display().to_string()),
            _ => RapidError::Io(format!("{}: {}", path.display(), err)),
        }
    }

    pub(crate) fn length_mismatch(what: &str, expected: usize, found: usize) -> Self {
        RapidError::InvalidArgument(format!(
            "{} needs {} values, got {}",
            what, expected, found
        ))
    }
}

impl Error for RapidError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for RapidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RapidError::InvalidArgument(ref msg) => write!(f, "Invalid argument: {}", msg),
            RapidError::UnsupportedType(ref msg) => write!(f, "Unsupported value type: {}", msg),
            RapidError::Io(ref msg) => write!(f, "IO error: {}", msg),
            RapidError::NotFound(ref path) => write!(f, "File not found: {}", path),
            RapidError::Parse { line, ref message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            RapidError::Serialization(ref msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<serde_json::Error> for RapidError {
    fn from(err: serde_json::Error) -> Self {
        RapidError::Serialization(err.to_string())
    }
}
