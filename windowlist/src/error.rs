use alloc::boxed::Box;
use core::fmt;

/// Boxed error type surfaced by host render callbacks.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Errors reported by the windowing engine.
///
/// Invalid configuration and out-of-bounds indices are rejected
/// synchronously; host callback failures are contained at the controller
/// boundary and reported through the error hook rather than unwinding.
#[derive(Debug)]
pub enum Error {
    /// A construction or update parameter is invalid.
    Config {
        /// Name of the offending parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// An index is outside the valid bounds of the collection.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The item count the index was checked against.
        count: usize,
    },
    /// A caller-supplied render callback returned an error.
    HostCallback(BoxError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { param, reason } => {
                write!(f, "invalid configuration: {param} {reason}")
            }
            Error::OutOfBounds { index, count } => {
                write!(f, "index {index} out of bounds for item count {count}")
            }
            Error::HostCallback(err) => write!(f, "host callback failed: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::HostCallback(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl Error {
    pub(crate) fn zero_size(param: &'static str) -> Self {
        Error::Config {
            param,
            reason: "must be greater than zero",
        }
    }

    pub(crate) fn out_of_bounds(index: usize, count: usize) -> Self {
        Error::OutOfBounds { index, count }
    }
}
