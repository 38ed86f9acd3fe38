//! Font faces, rendering options, scaled fonts and text measurement

use std::ffi::{CStr, CString};

use cairn_geom::Matrix;

use crate::enums::{FontSlant, FontWeight};
use crate::error::{Error, Result};
use crate::ffi;
use crate::handle::{ForeignRefCounted, Handle};
use crate::properties::{foreign_props, matrix_to_raw};
use crate::status::Status;

/// Vertical metrics of a font at its scaled size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

impl From<ffi::cairo_font_extents_t> for FontExtents {
    fn from(raw: ffi::cairo_font_extents_t) -> Self {
        FontExtents {
            ascent: raw.ascent,
            descent: raw.descent,
            height: raw.height,
            max_x_advance: raw.max_x_advance,
            max_y_advance: raw.max_y_advance,
        }
    }
}

/// Metrics of one laid-out piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

impl From<ffi::cairo_text_extents_t> for TextExtents {
    fn from(raw: ffi::cairo_text_extents_t) -> Self {
        TextExtents {
            x_bearing: raw.x_bearing,
            y_bearing: raw.y_bearing,
            width: raw.width,
            height: raw.height,
            x_advance: raw.x_advance,
            y_advance: raw.y_advance,
        }
    }
}

pub(crate) struct FontFaceKind;

unsafe impl ForeignRefCounted for FontFaceKind {
    type Raw = ffi::cairo_font_face_t;
    const KIND: &'static str = "font face";

    unsafe fn reference(raw: *mut Self::Raw) {
        ffi::cairo_font_face_reference(raw);
    }

    unsafe fn destroy(raw: *mut Self::Raw) {
        ffi::cairo_font_face_destroy(raw);
    }

    unsafe fn status(raw: *mut Self::Raw) -> Status {
        Status(ffi::cairo_font_face_status(raw))
    }
}

/// An unscaled font selection. Cloning shares the one underlying engine
/// face.
#[derive(Clone, Debug)]
pub struct FontFace {
    handle: Handle<FontFaceKind>,
}

impl FontFace {
    /// Creates a toy-API face from a family name.
    pub fn toy(family: &str, slant: FontSlant, weight: FontWeight) -> Result<Self> {
        let family = CString::new(family).map_err(|_| Error::NulByte { what: "font family" })?;
        let raw = unsafe {
            ffi::cairo_toy_font_face_create(family.as_ptr(), slant.as_raw(), weight.as_raw())
        };
        let handle = unsafe { Handle::wrap(raw, "cairo_toy_font_face_create")? };
        Ok(FontFace { handle })
    }

    /// Wraps an already-owned raw face reference.
    ///
    /// # Safety
    ///
    /// `raw` must carry a reference the wrapper may release.
    pub(crate) unsafe fn from_owned(
        raw: *mut ffi::cairo_font_face_t,
        call: &'static str,
    ) -> Result<Self> {
        let handle = Handle::wrap(raw, call)?;
        Ok(FontFace { handle })
    }

    /// The face's current status.
    pub fn status(&self) -> Status {
        self.handle.status()
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_font_face_t {
        self.handle.as_ptr()
    }

    /// The engine-side reference count, counting every live share.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_font_face_get_reference_count(self.as_ptr()) }
    }

    /// The family a toy face was created with.
    pub fn family(&self) -> Result<String> {
        let raw = unsafe { ffi::cairo_toy_font_face_get_family(self.as_ptr()) };
        self.handle.check("cairo_toy_font_face_get_family")?;
        let family = unsafe { CStr::from_ptr(raw) };
        Ok(family.to_string_lossy().into_owned())
    }

    pub fn slant(&self) -> Result<FontSlant> {
        let raw = unsafe { ffi::cairo_toy_font_face_get_slant(self.as_ptr()) };
        FontSlant::from_raw(raw).ok_or(Error::UnexpectedEnumValue {
            what: "FontSlant",
            value: raw,
        })
    }

    pub fn weight(&self) -> Result<FontWeight> {
        let raw = unsafe { ffi::cairo_toy_font_face_get_weight(self.as_ptr()) };
        FontWeight::from_raw(raw).ok_or(Error::UnexpectedEnumValue {
            what: "FontWeight",
            value: raw,
        })
    }
}

/// Rendering options carried alongside a font: antialiasing and hinting.
///
/// Unlike the other wrappers this owns a private engine object rather
/// than a shared reference; the engine offers copy and destroy but no
/// reference counting for options, so `Clone` makes a real copy.
#[derive(Debug)]
pub struct FontOptions {
    raw: *mut ffi::cairo_font_options_t,
}

impl FontOptions {
    pub fn new() -> Result<Self> {
        let raw = unsafe { ffi::cairo_font_options_create() };
        let options = FontOptions { raw };
        options.check("cairo_font_options_create")?;
        Ok(options)
    }

    fn raw(&self) -> *mut ffi::cairo_font_options_t {
        self.raw
    }

    fn check(&self, call: &'static str) -> Result<()> {
        let status = Status(unsafe { ffi::cairo_font_options_status(self.raw) });
        crate::error::check(call, status)
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_font_options_t {
        self.raw
    }

    foreign_props! {
        /// Antialiasing mode requested for glyph rendering.
        enum Antialias antialias, set_antialias, with_antialias => (cairo_font_options_get_antialias, cairo_font_options_set_antialias);

        /// How aggressively glyph outlines are fitted to the pixel grid.
        enum HintStyle hint_style, set_hint_style, with_hint_style => (cairo_font_options_get_hint_style, cairo_font_options_set_hint_style);

        /// Whether font metrics are quantized to device units.
        enum HintMetrics hint_metrics, set_hint_metrics, with_hint_metrics => (cairo_font_options_get_hint_metrics, cairo_font_options_set_hint_metrics);
    }
}

impl Clone for FontOptions {
    fn clone(&self) -> Self {
        let raw = unsafe { ffi::cairo_font_options_copy(self.raw) };
        FontOptions { raw }
    }
}

impl Drop for FontOptions {
    fn drop(&mut self) {
        unsafe { ffi::cairo_font_options_destroy(self.raw) };
    }
}

impl PartialEq for FontOptions {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::cairo_font_options_equal(self.raw, other.raw) != 0 }
    }
}

pub(crate) struct ScaledFontKind;

unsafe impl ForeignRefCounted for ScaledFontKind {
    type Raw = ffi::cairo_scaled_font_t;
    const KIND: &'static str = "scaled font";

    unsafe fn reference(raw: *mut Self::Raw) {
        ffi::cairo_scaled_font_reference(raw);
    }

    unsafe fn destroy(raw: *mut Self::Raw) {
        ffi::cairo_scaled_font_destroy(raw);
    }

    unsafe fn status(raw: *mut Self::Raw) -> Status {
        Status(ffi::cairo_scaled_font_status(raw))
    }
}

/// A font face combined with a size and transformation. Cloning shares
/// the one underlying engine font.
#[derive(Clone, Debug)]
pub struct ScaledFont {
    handle: Handle<ScaledFontKind>,
}

impl ScaledFont {
    /// Creates a scaled font from a face, the font and device matrices,
    /// and rendering options.
    pub fn new(
        face: &FontFace,
        font_matrix: &Matrix,
        ctm: &Matrix,
        options: &FontOptions,
    ) -> Result<Self> {
        let font_matrix = matrix_to_raw(font_matrix);
        let ctm = matrix_to_raw(ctm);
        let raw = unsafe {
            ffi::cairo_scaled_font_create(face.as_ptr(), &font_matrix, &ctm, options.as_ptr())
        };
        let handle = unsafe { Handle::wrap(raw, "cairo_scaled_font_create")? };
        Ok(ScaledFont { handle })
    }

    /// The face this font was scaled from, re-wrapped with its own
    /// reference.
    pub fn font_face(&self) -> Result<FontFace> {
        let raw = unsafe {
            ffi::cairo_font_face_reference(ffi::cairo_scaled_font_get_font_face(self.as_ptr()))
        };
        unsafe { FontFace::from_owned(raw, "cairo_scaled_font_get_font_face") }
    }

    /// Wraps an already-owned raw font reference.
    ///
    /// # Safety
    ///
    /// `raw` must carry a reference the wrapper may release.
    pub(crate) unsafe fn from_owned(
        raw: *mut ffi::cairo_scaled_font_t,
        call: &'static str,
    ) -> Result<Self> {
        let handle = Handle::wrap(raw, call)?;
        Ok(ScaledFont { handle })
    }

    /// The font's current status.
    pub fn status(&self) -> Status {
        self.handle.status()
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_scaled_font_t {
        self.handle.as_ptr()
    }

    pub fn font_extents(&self) -> Result<FontExtents> {
        let mut raw = ffi::cairo_font_extents_t::default();
        unsafe { ffi::cairo_scaled_font_extents(self.as_ptr(), &mut raw) };
        self.handle.check("cairo_scaled_font_extents")?;
        Ok(raw.into())
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = CString::new(text).map_err(|_| Error::NulByte { what: "text" })?;
        let mut raw = ffi::cairo_text_extents_t::default();
        unsafe { ffi::cairo_scaled_font_text_extents(self.as_ptr(), text.as_ptr(), &mut raw) };
        self.handle.check("cairo_scaled_font_text_extents")?;
        Ok(raw.into())
    }
}
