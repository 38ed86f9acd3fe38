//! Cairn rendering bindings
//!
//! A typed, ownership-aware layer over the cairo 2D rendering engine.
//!
//! # Features
//!
//! - Drawing contexts with fluent, fallible call chains
//! - Structured paths that round-trip through the engine's flat buffers
//! - Solid, gradient and surface-backed paint sources
//! - Group rendering into intermediate surfaces
//! - Image surfaces with PNG export
//! - Font faces, rendering options and scaled fonts
//! - Toy-API text selection and measurement
//! - Every engine status translated into a typed error
//!
//! Wrapper objects own one engine reference each; `Clone` shares the
//! underlying engine object rather than copying it.

pub mod context;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod font;
mod handle;
pub mod path;
pub mod pattern;
mod properties;
pub mod status;
pub mod surface;

pub use cairn_geom as geom;
pub use cairn_geom::{Colour, GeomError, IntRect, Matrix, RealRect, Rect, Vector};

pub use context::Context;
pub use enums::{
    Antialias, Content, Extend, FillRule, Filter, FontSlant, FontWeight, Format, HintMetrics,
    HintStyle, LineCap, LineJoin, Operator,
};
pub use error::{Error, Result};
pub use font::{FontExtents, FontFace, FontOptions, ScaledFont, TextExtents};
pub use path::{Element, Path, PathBuilder, Segment};
pub use pattern::Pattern;
pub use status::Status;
pub use surface::Surface;
