use core::fmt;

use crate::Kind;

/// Reason a typed access on a [`crate::Value`] could not be served.
///
/// Returned by the `try_*` accessors. The panicking accessors use the same
/// `Display` output as their panic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value holds a different kind than the accessor requires.
    KindMismatch { expected: Kind, found: Kind },
    /// A container operation on a value that is neither an array nor an object.
    NotAContainer { found: Kind },
    /// Read access past the end of an array.
    IndexOutOfBounds { index: usize, len: usize },
    /// Read access to an object key that was never written.
    MissingKey { key: String },
}

impl Error {
    pub(crate) fn kind_mismatch(expected: Kind, found: Kind) -> Self {
        Error::KindMismatch { expected, found }
    }
    pub(crate) fn not_a_container(found: Kind) -> Self {
        Error::NotAContainer { found }
    }
    pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }
    pub(crate) fn missing_key(key: impl Into<String>) -> Self {
        Error::MissingKey { key: key.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KindMismatch { expected, found } => {
                write!(f, "value is not of {expected} type (found {found})")
            }
            Error::NotAContainer { found } => {
                write!(f, "value is not of array or object type (found {found})")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for array of length {len}")
            }
            Error::MissingKey { key } => write!(f, "key \"{key}\" is not present in object"),
        }
    }
}

impl std::error::Error for Error {}

/// Fail fast on a contract violation, reporting the caller's location.
#[cold]
#[track_caller]
pub(crate) fn violation(error: Error) -> ! {
    panic!("{error}")
}
