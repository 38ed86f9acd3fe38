//! Binding error types

use thiserror::Error;

use crate::status::Status;

pub use cairn_geom::GeomError;

/// Errors raised by the binding layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A foreign call reported a non-success status. Carries the name of
    /// the failing entry point and the engine's status.
    #[error("{call} failed: {status}")]
    Foreign { call: &'static str, status: Status },

    /// A drawing element appeared with no current point to continue from.
    #[error("path element {index} ({found}) has no preceding move-to")]
    MalformedPath { index: usize, found: &'static str },

    /// A foreign path buffer carried a tag this binding does not know.
    #[error("unknown tag {tag} in foreign path data")]
    UnknownPathTag { tag: u32 },

    /// A foreign path record announced fewer records than its tag needs.
    #[error("foreign path record with tag {tag} has invalid length {length}")]
    InvalidPathData { tag: u32, length: i32 },

    /// The engine reported an enumeration value this binding does not know.
    #[error("engine returned unknown {what} value {value}")]
    UnexpectedEnumValue { what: &'static str, value: i32 },

    /// An embedded NUL cannot cross the C string boundary.
    #[error("embedded NUL byte in {what}")]
    NulByte { what: &'static str },

    /// A value-model error surfaced through the binding.
    #[error(transparent)]
    Geom(#[from] GeomError),
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Translates a status into a typed error at the call site.
pub(crate) fn check(call: &'static str, status: Status) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Foreign { call, status })
    }
}
