//! Geometry error types

use thiserror::Error;

/// Errors raised by the pure value model
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Matrix with zero determinant cannot be inverted
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Rectangle with zero width or height cannot define a mapping
    #[error("rectangle has zero width or height")]
    DegenerateRect,

    /// Componentwise division by a zero component
    #[error("division by a zero component")]
    DivisionByZero,
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeomError>;
