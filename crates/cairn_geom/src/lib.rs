//! Cairn geometry and colour value model
//!
//! The pure value types shared by the cairn graphics bindings:
//!
//! - **Vector**: immutable 2D point with componentwise arithmetic
//! - **Matrix**: 2D affine transform
//! - **Rect**: axis-aligned rectangle, integer or real
//! - **Colour**: RGBA colour convertible through HSV, HLS and YIQ
//!
//! Everything here is plain numerics; no drawing-engine calls happen in
//! this crate. Angles are in radians throughout.

pub mod colour;
pub mod error;
pub mod matrix;
pub mod rect;
pub mod vector;

pub use colour::Colour;
pub use error::{GeomError, Result};
pub use matrix::Matrix;
pub use rect::{IntRect, RealRect, Rect};
pub use vector::Vector;
