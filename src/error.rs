//! Error types for script I/O and typed extraction.
//!
//! Parsing and writing are total: malformed script degrades to whatever structure could be
//! recovered, and every [`Node`](crate::Node) tree has a textual form. The errors in this
//! module therefore only come from the edges of the crate:
//!
//! - **I/O**: reading script from a reader or writing it to a writer
//! - **Encoding**: input bytes that are not valid UTF-8
//! - **Type mismatches**: extracting a typed value from a node of the wrong kind
//! - **Serde conversion**: producing a node tree from a `Serialize` type
//!
//! ## Examples
//!
//! ```rust
//! use pdx_script::{parse, Error};
//!
//! let doc = parse("name = { a = 1 }");
//! let name = doc.get("name").cloned().unwrap();
//!
//! let result: Result<String, Error> = String::try_from(name);
//! assert!(matches!(result, Err(Error::TypeMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all failures the crate can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in script input: {0}")]
    Utf8(String),

    /// A node had a different kind than the caller asked for
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for conversion into a node
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::Error;
    ///
    /// let err = Error::type_mismatch("integer", "table");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for values that have no script form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::type_mismatch("scalar", "list");
        assert_eq!(err.to_string(), "Type mismatch: expected scalar, found list");

        let err = Error::unsupported_type("bytes");
        assert_eq!(err.to_string(), "Unsupported type: bytes");

        let err = Error::io("disk full");
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref m) if m.contains("missing file")));
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [0x66, 0xff, 0x6f];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::Utf8(_)));
    }
}
