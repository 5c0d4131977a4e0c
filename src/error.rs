//! Error types for Yamlet serialization and deserialization.
//!
//! Every failure is reported through a single [`Error`] enum. A failed
//! conversion aborts the session; no partial values are produced.
//!
//! ## Error Categories
//!
//! - **Invalid**: the document does not parse, with line/column information
//! - **StructuralMismatch**: a protocol call disagrees with the open
//!   container or with the shape of the document
//! - **KeyNotFound**: a named field lookup found no matching key
//! - **Conversion**: scalar text does not convert to the requested type
//! - **Unsupported**: an event the text format cannot honor
//! - **Io**: reading from or writing to a transport failed
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{from_str, Error};
//!
//! let result: Result<bool, Error> = from_str("{broken");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("parse error: {}", err);
//!     // Parse errors carry 1-based line and column numbers
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during Yamlet
/// serialization/deserialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The document does not parse
    #[error("invalid document at line {line}, column {column}: {msg}")]
    Invalid {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A protocol event disagrees with the open container or the document shape
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// Named field lookup failed
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Scalar text does not convert to the requested type
    #[error("cannot convert {text:?} to {target}")]
    Conversion { text: String, target: &'static str },

    /// An event the backend cannot honor
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Custom error raised by an adapter
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a parse error with 1-based line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Error;
    ///
    /// let err = Error::invalid(10, 5, "unexpected character '&'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn invalid(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Invalid {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a structural mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Error;
    ///
    /// let err = Error::mismatch("sequence end without an open sequence");
    /// assert!(err.to_string().starts_with("structural mismatch"));
    /// ```
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Error::StructuralMismatch(msg.into())
    }

    /// Creates a structural mismatch error of the common
    /// "expected X, found Y" shape.
    pub fn expected(expected: &str, found: &str) -> Self {
        Error::StructuralMismatch(format!("expected {}, found {}", expected, found))
    }

    /// Creates a key lookup error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound(key.into())
    }

    /// Creates a conversion error for scalar text that does not parse as
    /// the requested type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Error;
    ///
    /// let err = Error::conversion("abc", "i32");
    /// assert!(err.to_string().contains("i32"));
    /// ```
    pub fn conversion(text: impl Into<String>, target: &'static str) -> Self {
        Error::Conversion {
            text: text.into(),
            target,
        }
    }

    /// Creates an error for an event the backend cannot honor.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for transport failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
