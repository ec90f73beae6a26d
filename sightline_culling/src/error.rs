//! Error types for the Sightline culling library
//!
//! This module defines the error types used throughout the crate.
//! The culling algorithms themselves are total: degenerate geometry and
//! on-plane points are handled as policy decisions, not errors. Errors
//! exist for bad configuration, malformed mesh data, and internal
//! consistency violations that should never occur.

use std::fmt;

/// Result type for Sightline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sightline culling errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid configuration (grid resolution, lens parameters)
    InvalidConfig(String),

    /// Malformed mesh data (index count not a multiple of 3, out-of-range index)
    InvalidMesh(String),

    /// Internal consistency violation (e.g. far/near grid length mismatch)
    Inconsistency(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Error::Inconsistency(msg) => write!(f, "Internal inconsistency: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error::Inconsistency`], logging it through the crate logger.
///
/// # Example
///
/// ```no_run
/// use sightline_culling::sightline::Error;
///
/// fn check(far: usize, near: usize) -> Result<(), Error> {
///     if far != near {
///         return Err(sightline_culling::cull_err!("sightline::SampleGrid",
///             "grid length mismatch: {} far vs {} near", far, near));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! cull_err {
    ($source:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::cull_error!($source, "{}", msg);
        $crate::sightline::Error::Inconsistency(msg)
    }};
}

/// Return early with an [`Error::Inconsistency`], logging it first.
#[macro_export]
macro_rules! cull_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::cull_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
