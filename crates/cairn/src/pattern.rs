//! Paint sources: solid colours, gradients, surface patterns

use cairn_geom::{Colour, Vector};

use crate::error::Result;
use crate::ffi;
use crate::handle::{ForeignRefCounted, Handle};
use crate::properties::foreign_props;
use crate::status::Status;
use crate::surface::Surface;

pub(crate) struct PatternKind;

unsafe impl ForeignRefCounted for PatternKind {
    type Raw = ffi::cairo_pattern_t;
    const KIND: &'static str = "pattern";

    unsafe fn reference(raw: *mut Self::Raw) {
        ffi::cairo_pattern_reference(raw);
    }

    unsafe fn destroy(raw: *mut Self::Raw) {
        ffi::cairo_pattern_destroy(raw);
    }

    unsafe fn status(raw: *mut Self::Raw) -> Status {
        Status(ffi::cairo_pattern_status(raw))
    }
}

/// A paint source. Cloning shares the one underlying engine pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    handle: Handle<PatternKind>,
}

impl Pattern {
    /// A solid-colour source.
    pub fn solid(colour: Colour) -> Result<Self> {
        let raw =
            unsafe { ffi::cairo_pattern_create_rgba(colour.r, colour.g, colour.b, colour.a) };
        let handle = unsafe { Handle::wrap(raw, "cairo_pattern_create_rgba")? };
        Ok(Pattern { handle })
    }

    /// A linear gradient along the line from `p0` to `p1`.
    pub fn linear(p0: impl Into<Vector>, p1: impl Into<Vector>) -> Result<Self> {
        let (p0, p1) = (p0.into(), p1.into());
        let raw = unsafe { ffi::cairo_pattern_create_linear(p0.x, p0.y, p1.x, p1.y) };
        let handle = unsafe { Handle::wrap(raw, "cairo_pattern_create_linear")? };
        Ok(Pattern { handle })
    }

    /// A radial gradient between two circles.
    pub fn radial(
        c0: impl Into<Vector>,
        r0: f64,
        c1: impl Into<Vector>,
        r1: f64,
    ) -> Result<Self> {
        let (c0, c1) = (c0.into(), c1.into());
        let raw = unsafe { ffi::cairo_pattern_create_radial(c0.x, c0.y, r0, c1.x, c1.y, r1) };
        let handle = unsafe { Handle::wrap(raw, "cairo_pattern_create_radial")? };
        Ok(Pattern { handle })
    }

    /// A pattern sourcing pixels from another surface.
    pub fn for_surface(surface: &Surface) -> Result<Self> {
        let raw = unsafe { ffi::cairo_pattern_create_for_surface(surface.as_ptr()) };
        let handle = unsafe { Handle::wrap(raw, "cairo_pattern_create_for_surface")? };
        Ok(Pattern { handle })
    }

    /// Wraps an already-owned raw pattern reference.
    ///
    /// # Safety
    ///
    /// `raw` must carry a reference the wrapper may release.
    pub(crate) unsafe fn from_owned(
        raw: *mut ffi::cairo_pattern_t,
        call: &'static str,
    ) -> Result<Self> {
        let handle = Handle::wrap(raw, call)?;
        Ok(Pattern { handle })
    }

    fn raw(&self) -> *mut ffi::cairo_pattern_t {
        self.handle.as_ptr()
    }

    fn check(&self, call: &'static str) -> Result<()> {
        self.handle.check(call)
    }

    /// The pattern's current status.
    pub fn status(&self) -> Status {
        self.handle.status()
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.raw()
    }

    /// The engine-side reference count, counting every live share.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_pattern_get_reference_count(self.raw()) }
    }

    /// Appends a gradient colour stop at `offset` in `[0, 1]`.
    ///
    /// Fails on non-gradient patterns, which the engine reports as a
    /// pattern type mismatch.
    pub fn add_colour_stop(&mut self, offset: f64, colour: Colour) -> Result<&mut Self> {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgba(
                self.raw(),
                offset,
                colour.r,
                colour.g,
                colour.b,
                colour.a,
            )
        };
        self.check("cairo_pattern_add_color_stop_rgba")?;
        Ok(self)
    }

    /// The solid colour of an rgba pattern. Fails on any other kind.
    pub fn rgba(&self) -> Result<Colour> {
        let (mut r, mut g, mut b, mut a) = (0.0, 0.0, 0.0, 0.0);
        let status = unsafe {
            ffi::cairo_pattern_get_rgba(self.raw(), &mut r, &mut g, &mut b, &mut a)
        };
        crate::error::check("cairo_pattern_get_rgba", Status(status))?;
        Ok(Colour::from_rgba(r, g, b, a))
    }

    foreign_props! {
        /// How the pattern extends past its natural area.
        enum Extend extend, set_extend, with_extend => (cairo_pattern_get_extend, cairo_pattern_set_extend);

        /// Pixel filter applied when the pattern is resampled.
        enum Filter filter, set_filter, with_filter => (cairo_pattern_get_filter, cairo_pattern_set_filter);

        /// The pattern-space transformation, mapping user space to
        /// pattern space.
        matrix matrix, set_matrix, with_matrix => (cairo_pattern_get_matrix, cairo_pattern_set_matrix);
    }
}
