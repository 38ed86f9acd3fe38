//! Drawing context facade

use std::ffi::CString;

use tracing::debug;

use cairn_geom::{Colour, Matrix, Rect, Vector};

use crate::enums::{Content, FontSlant, FontWeight};
use crate::error::{Error, Result};
use crate::ffi;
use crate::font::{FontExtents, FontFace, FontOptions, ScaledFont, TextExtents};
use crate::handle::{ForeignRefCounted, Handle};
use crate::path::Path;
use crate::pattern::Pattern;
use crate::properties::{foreign_props, matrix_to_raw};
use crate::status::Status;
use crate::surface::Surface;

pub(crate) struct ContextKind;

unsafe impl ForeignRefCounted for ContextKind {
    type Raw = ffi::cairo_t;
    const KIND: &'static str = "context";

    unsafe fn reference(raw: *mut Self::Raw) {
        ffi::cairo_reference(raw);
    }

    unsafe fn destroy(raw: *mut Self::Raw) {
        ffi::cairo_destroy(raw);
    }

    unsafe fn status(raw: *mut Self::Raw) -> Status {
        Status(ffi::cairo_status(raw))
    }
}

/// A drawing context bound to a target [`Surface`].
///
/// Fallible operations return `Result<&mut Self>`, so fluent chains
/// compose with `?`:
///
/// ```no_run
/// # use cairn::{Context, Surface, enums::Format};
/// # use cairn_geom::Colour;
/// # fn demo() -> cairn::Result<()> {
/// let surface = Surface::image(Format::Argb32, 100, 100)?;
/// let mut ctx = Context::new(&surface)?;
/// ctx.set_source_colour(Colour::from_rgb(1.0, 0.5, 0.0))?
///     .with_line_width(2.0)?
///     .move_to((10.0, 10.0))?
///     .line_to((90.0, 90.0))?
///     .stroke()?;
/// # Ok(())
/// # }
/// ```
///
/// Cloning shares the one underlying engine context; state set through
/// any clone is visible through all of them, because the engine is the
/// single source of truth.
#[derive(Clone, Debug)]
pub struct Context {
    handle: Handle<ContextKind>,
}

impl Context {
    pub fn new(surface: &Surface) -> Result<Self> {
        let raw = unsafe { ffi::cairo_create(surface.as_ptr()) };
        let handle = unsafe { Handle::wrap(raw, "cairo_create")? };
        debug!("created drawing context");
        Ok(Context { handle })
    }

    fn raw(&self) -> *mut ffi::cairo_t {
        self.handle.as_ptr()
    }

    fn check(&self, call: &'static str) -> Result<()> {
        self.handle.check(call)
    }

    fn chain(&mut self, call: &'static str) -> Result<&mut Self> {
        self.check(call)?;
        Ok(self)
    }

    /// The context's current status.
    pub fn status(&self) -> Status {
        self.handle.status()
    }

    /// Raw engine pointer; bypasses every wrapper check.
    pub fn as_ptr(&self) -> *mut ffi::cairo_t {
        self.raw()
    }

    /// The engine-side reference count, counting every live share.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_get_reference_count(self.raw()) }
    }

    /// The target surface, re-wrapped with its own reference.
    pub fn target(&self) -> Result<Surface> {
        let raw = unsafe { ffi::cairo_surface_reference(ffi::cairo_get_target(self.raw())) };
        unsafe { Surface::from_owned(raw, "cairo_get_target") }
    }

    // --- graphics state ---

    pub fn save(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_save(self.raw()) };
        self.chain("cairo_save")
    }

    pub fn restore(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_restore(self.raw()) };
        self.chain("cairo_restore")
    }

    // --- group rendering ---

    /// Redirects drawing into a temporary group surface.
    pub fn push_group(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_push_group(self.raw()) };
        self.chain("cairo_push_group")
    }

    pub fn push_group_with_content(&mut self, content: Content) -> Result<&mut Self> {
        unsafe { ffi::cairo_push_group_with_content(self.raw(), content.as_raw()) };
        self.chain("cairo_push_group_with_content")
    }

    /// Ends the group and returns its contents as a pattern.
    pub fn pop_group(&mut self) -> Result<Pattern> {
        let raw = unsafe { ffi::cairo_pop_group(self.raw()) };
        let pattern = unsafe { Pattern::from_owned(raw, "cairo_pop_group")? };
        self.check("cairo_pop_group")?;
        Ok(pattern)
    }

    /// Ends the group and installs its contents as the current source.
    pub fn pop_group_to_source(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_pop_group_to_source(self.raw()) };
        self.chain("cairo_pop_group_to_source")
    }

    /// The surface drawing currently lands on: the innermost group's
    /// intermediate surface, or the target when no group is open.
    pub fn group_target(&self) -> Result<Surface> {
        let raw =
            unsafe { ffi::cairo_surface_reference(ffi::cairo_get_group_target(self.raw())) };
        unsafe { Surface::from_owned(raw, "cairo_get_group_target") }
    }

    // --- path construction ---

    pub fn new_path(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_new_path(self.raw()) };
        self.chain("cairo_new_path")
    }

    pub fn new_sub_path(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_new_sub_path(self.raw()) };
        self.chain("cairo_new_sub_path")
    }

    pub fn move_to(&mut self, p: impl Into<Vector>) -> Result<&mut Self> {
        let p = p.into();
        unsafe { ffi::cairo_move_to(self.raw(), p.x, p.y) };
        self.chain("cairo_move_to")
    }

    pub fn line_to(&mut self, p: impl Into<Vector>) -> Result<&mut Self> {
        let p = p.into();
        unsafe { ffi::cairo_line_to(self.raw(), p.x, p.y) };
        self.chain("cairo_line_to")
    }

    pub fn curve_to(
        &mut self,
        p1: impl Into<Vector>,
        p2: impl Into<Vector>,
        p3: impl Into<Vector>,
    ) -> Result<&mut Self> {
        let (p1, p2, p3) = (p1.into(), p2.into(), p3.into());
        unsafe { ffi::cairo_curve_to(self.raw(), p1.x, p1.y, p2.x, p2.y, p3.x, p3.y) };
        self.chain("cairo_curve_to")
    }

    pub fn close_path(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_close_path(self.raw()) };
        self.chain("cairo_close_path")
    }

    pub fn rel_move_to(&mut self, d: impl Into<Vector>) -> Result<&mut Self> {
        let d = d.into();
        unsafe { ffi::cairo_rel_move_to(self.raw(), d.x, d.y) };
        self.chain("cairo_rel_move_to")
    }

    pub fn rel_line_to(&mut self, d: impl Into<Vector>) -> Result<&mut Self> {
        let d = d.into();
        unsafe { ffi::cairo_rel_line_to(self.raw(), d.x, d.y) };
        self.chain("cairo_rel_line_to")
    }

    pub fn rel_curve_to(
        &mut self,
        d1: impl Into<Vector>,
        d2: impl Into<Vector>,
        d3: impl Into<Vector>,
    ) -> Result<&mut Self> {
        let (d1, d2, d3) = (d1.into(), d2.into(), d3.into());
        unsafe { ffi::cairo_rel_curve_to(self.raw(), d1.x, d1.y, d2.x, d2.y, d3.x, d3.y) };
        self.chain("cairo_rel_curve_to")
    }

    /// Circular arc, sweeping clockwise from `angle1` to `angle2`.
    pub fn arc(
        &mut self,
        center: impl Into<Vector>,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<&mut Self> {
        let center = center.into();
        unsafe { ffi::cairo_arc(self.raw(), center.x, center.y, radius, angle1, angle2) };
        self.chain("cairo_arc")
    }

    pub fn arc_negative(
        &mut self,
        center: impl Into<Vector>,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<&mut Self> {
        let center = center.into();
        unsafe {
            ffi::cairo_arc_negative(self.raw(), center.x, center.y, radius, angle1, angle2)
        };
        self.chain("cairo_arc_negative")
    }

    pub fn rectangle(&mut self, rect: &Rect) -> Result<&mut Self> {
        unsafe {
            ffi::cairo_rectangle(self.raw(), rect.left(), rect.top(), rect.width(), rect.height())
        };
        self.chain("cairo_rectangle")
    }

    /// The current point, if the current path has one.
    pub fn current_point(&self) -> Result<Option<Vector>> {
        if unsafe { ffi::cairo_has_current_point(self.raw()) } == 0 {
            return Ok(None);
        }
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { ffi::cairo_get_current_point(self.raw(), &mut x, &mut y) };
        self.check("cairo_get_current_point")?;
        Ok(Some(Vector::new(x, y)))
    }

    /// Copies the current engine-side path into a structured [`Path`].
    pub fn copy_path(&self) -> Result<Path> {
        let raw = unsafe { ffi::cairo_copy_path(self.raw()) };
        unsafe { Path::take_foreign(raw, "cairo_copy_path") }
    }

    /// Like [`Context::copy_path`], but with curves flattened to line
    /// segments at the engine's own tolerance.
    pub fn copy_path_flat(&self) -> Result<Path> {
        let raw = unsafe { ffi::cairo_copy_path_flat(self.raw()) };
        unsafe { Path::take_foreign(raw, "cairo_copy_path_flat") }
    }

    // --- painting ---

    pub fn paint(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_paint(self.raw()) };
        self.chain("cairo_paint")
    }

    pub fn paint_with_alpha(&mut self, alpha: f64) -> Result<&mut Self> {
        unsafe { ffi::cairo_paint_with_alpha(self.raw(), alpha) };
        self.chain("cairo_paint_with_alpha")
    }

    pub fn mask(&mut self, pattern: &Pattern) -> Result<&mut Self> {
        unsafe { ffi::cairo_mask(self.raw(), pattern.as_ptr()) };
        self.chain("cairo_mask")
    }

    pub fn stroke(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_stroke(self.raw()) };
        self.chain("cairo_stroke")
    }

    pub fn stroke_preserve(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_stroke_preserve(self.raw()) };
        self.chain("cairo_stroke_preserve")
    }

    pub fn fill(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_fill(self.raw()) };
        self.chain("cairo_fill")
    }

    pub fn fill_preserve(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_fill_preserve(self.raw()) };
        self.chain("cairo_fill_preserve")
    }

    pub fn clip(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_clip(self.raw()) };
        self.chain("cairo_clip")
    }

    pub fn clip_preserve(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_clip_preserve(self.raw()) };
        self.chain("cairo_clip_preserve")
    }

    pub fn reset_clip(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_reset_clip(self.raw()) };
        self.chain("cairo_reset_clip")
    }

    // --- extents and hit tests ---

    fn extents_of(
        &self,
        call: &'static str,
        query: unsafe extern "C" fn(*mut ffi::cairo_t, *mut f64, *mut f64, *mut f64, *mut f64),
    ) -> Result<Rect> {
        let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
        unsafe { query(self.raw(), &mut x1, &mut y1, &mut x2, &mut y2) };
        self.check(call)?;
        Ok(Rect::from_corners((x1, y1), (x2, y2)))
    }

    /// User-space bounds of the area a `fill` would affect.
    pub fn fill_extents(&self) -> Result<Rect> {
        self.extents_of("cairo_fill_extents", ffi::cairo_fill_extents)
    }

    /// User-space bounds of the area a `stroke` would affect.
    pub fn stroke_extents(&self) -> Result<Rect> {
        self.extents_of("cairo_stroke_extents", ffi::cairo_stroke_extents)
    }

    /// User-space bounds of the current clip region.
    pub fn clip_extents(&self) -> Result<Rect> {
        self.extents_of("cairo_clip_extents", ffi::cairo_clip_extents)
    }

    /// User-space bounds of the current path's control points.
    pub fn path_extents(&self) -> Result<Rect> {
        self.extents_of("cairo_path_extents", ffi::cairo_path_extents)
    }

    /// Whether `point` lies inside the area a `fill` would cover.
    pub fn in_fill(&self, point: impl Into<Vector>) -> Result<bool> {
        let point = point.into();
        let hit = unsafe { ffi::cairo_in_fill(self.raw(), point.x, point.y) } != 0;
        self.check("cairo_in_fill")?;
        Ok(hit)
    }

    /// Whether `point` lies inside the area a `stroke` would cover.
    pub fn in_stroke(&self, point: impl Into<Vector>) -> Result<bool> {
        let point = point.into();
        let hit = unsafe { ffi::cairo_in_stroke(self.raw(), point.x, point.y) } != 0;
        self.check("cairo_in_stroke")?;
        Ok(hit)
    }

    /// Whether `point` lies inside the current clip region.
    pub fn in_clip(&self, point: impl Into<Vector>) -> Result<bool> {
        let point = point.into();
        let hit = unsafe { ffi::cairo_in_clip(self.raw(), point.x, point.y) } != 0;
        self.check("cairo_in_clip")?;
        Ok(hit)
    }

    // --- source ---

    /// The current source pattern, re-wrapped with its own reference.
    pub fn source(&self) -> Result<Pattern> {
        let raw = unsafe { ffi::cairo_pattern_reference(ffi::cairo_get_source(self.raw())) };
        unsafe { Pattern::from_owned(raw, "cairo_get_source") }
    }

    pub fn set_source(&mut self, source: &Pattern) -> Result<()> {
        unsafe { ffi::cairo_set_source(self.raw(), source.as_ptr()) };
        self.check("cairo_set_source")
    }

    /// Chainable form of [`Context::set_source`].
    pub fn with_source(&mut self, source: &Pattern) -> Result<&mut Self> {
        self.set_source(source)?;
        Ok(self)
    }

    pub fn set_source_colour(&mut self, colour: Colour) -> Result<&mut Self> {
        unsafe { ffi::cairo_set_source_rgba(self.raw(), colour.r, colour.g, colour.b, colour.a) };
        self.chain("cairo_set_source_rgba")
    }

    // --- stateful properties ---

    foreign_props! {
        /// Stroke width in user-space units.
        f64 line_width, set_line_width, with_line_width => (cairo_get_line_width, cairo_set_line_width);

        /// Miter-join length cutoff.
        f64 miter_limit, set_miter_limit, with_miter_limit => (cairo_get_miter_limit, cairo_set_miter_limit);

        /// Curve-subdivision tolerance; the engine's flattening knob,
        /// treated here as an opaque value.
        f64 tolerance, set_tolerance, with_tolerance => (cairo_get_tolerance, cairo_set_tolerance);

        /// Compositing operator for drawing operations.
        enum Operator operator, set_operator, with_operator => (cairo_get_operator, cairo_set_operator);

        enum LineCap line_cap, set_line_cap, with_line_cap => (cairo_get_line_cap, cairo_set_line_cap);

        enum LineJoin line_join, set_line_join, with_line_join => (cairo_get_line_join, cairo_set_line_join);

        enum FillRule fill_rule, set_fill_rule, with_fill_rule => (cairo_get_fill_rule, cairo_set_fill_rule);

        enum Antialias antialias, set_antialias, with_antialias => (cairo_get_antialias, cairo_set_antialias);

        /// The current transformation matrix.
        matrix matrix, set_matrix, with_matrix => (cairo_get_matrix, cairo_set_matrix);

        /// The font matrix, mapping glyph space to user space.
        matrix font_matrix, set_font_matrix, with_font_matrix => (cairo_get_font_matrix, cairo_set_font_matrix);
    }

    /// The dash pattern and offset; an empty pattern means solid lines.
    pub fn dash(&self) -> Result<(Vec<f64>, f64)> {
        let count = unsafe { ffi::cairo_get_dash_count(self.raw()) };
        let mut dashes = vec![0.0; count as usize];
        let mut offset = 0.0;
        unsafe { ffi::cairo_get_dash(self.raw(), dashes.as_mut_ptr(), &mut offset) };
        self.check("cairo_get_dash")?;
        Ok((dashes, offset))
    }

    pub fn set_dash(&mut self, dashes: &[f64], offset: f64) -> Result<()> {
        unsafe {
            ffi::cairo_set_dash(self.raw(), dashes.as_ptr(), dashes.len() as i32, offset)
        };
        self.check("cairo_set_dash")
    }

    /// Chainable form of [`Context::set_dash`].
    pub fn with_dash(&mut self, dashes: &[f64], offset: f64) -> Result<&mut Self> {
        self.set_dash(dashes, offset)?;
        Ok(self)
    }

    // --- coordinate transform ---

    pub fn translate(&mut self, delta: impl Into<Vector>) -> Result<&mut Self> {
        let delta = delta.into();
        unsafe { ffi::cairo_translate(self.raw(), delta.x, delta.y) };
        self.chain("cairo_translate")
    }

    pub fn scale(&mut self, factor: impl Into<Vector>) -> Result<&mut Self> {
        let factor = factor.into();
        unsafe { ffi::cairo_scale(self.raw(), factor.x, factor.y) };
        self.chain("cairo_scale")
    }

    pub fn rotate(&mut self, angle: f64) -> Result<&mut Self> {
        unsafe { ffi::cairo_rotate(self.raw(), angle) };
        self.chain("cairo_rotate")
    }

    /// Pre-multiplies `matrix` onto the current transformation.
    pub fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        let raw = matrix_to_raw(matrix);
        unsafe { ffi::cairo_transform(self.raw(), &raw) };
        self.chain("cairo_transform")
    }

    pub fn identity_matrix(&mut self) -> Result<&mut Self> {
        unsafe { ffi::cairo_identity_matrix(self.raw()) };
        self.chain("cairo_identity_matrix")
    }

    // --- text ---

    /// Selects a toy-API font face by family name.
    pub fn select_font_face(
        &mut self,
        family: &str,
        slant: FontSlant,
        weight: FontWeight,
    ) -> Result<&mut Self> {
        let family = c_string(family, "font family")?;
        unsafe {
            ffi::cairo_select_font_face(self.raw(), family.as_ptr(), slant.as_raw(), weight.as_raw())
        };
        self.chain("cairo_select_font_face")
    }

    /// The current font face, re-wrapped with its own reference.
    pub fn font_face(&self) -> Result<FontFace> {
        let raw = unsafe { ffi::cairo_font_face_reference(ffi::cairo_get_font_face(self.raw())) };
        unsafe { FontFace::from_owned(raw, "cairo_get_font_face") }
    }

    pub fn set_font_face(&mut self, face: &FontFace) -> Result<()> {
        unsafe { ffi::cairo_set_font_face(self.raw(), face.as_ptr()) };
        self.check("cairo_set_font_face")
    }

    /// Chainable form of [`Context::set_font_face`].
    pub fn with_font_face(&mut self, face: &FontFace) -> Result<&mut Self> {
        self.set_font_face(face)?;
        Ok(self)
    }

    /// A copy of the current font options.
    pub fn font_options(&self) -> Result<FontOptions> {
        let options = FontOptions::new()?;
        unsafe { ffi::cairo_get_font_options(self.raw(), options.as_ptr()) };
        self.check("cairo_get_font_options")?;
        Ok(options)
    }

    pub fn set_font_options(&mut self, options: &FontOptions) -> Result<()> {
        unsafe { ffi::cairo_set_font_options(self.raw(), options.as_ptr()) };
        self.check("cairo_set_font_options")
    }

    /// Chainable form of [`Context::set_font_options`].
    pub fn with_font_options(&mut self, options: &FontOptions) -> Result<&mut Self> {
        self.set_font_options(options)?;
        Ok(self)
    }

    pub fn set_font_size(&mut self, size: f64) -> Result<&mut Self> {
        unsafe { ffi::cairo_set_font_size(self.raw(), size) };
        self.chain("cairo_set_font_size")
    }

    pub fn show_text(&mut self, text: &str) -> Result<&mut Self> {
        let text = c_string(text, "text")?;
        unsafe { ffi::cairo_show_text(self.raw(), text.as_ptr()) };
        self.chain("cairo_show_text")
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = c_string(text, "text")?;
        let mut raw = ffi::cairo_text_extents_t::default();
        unsafe { ffi::cairo_text_extents(self.raw(), text.as_ptr(), &mut raw) };
        self.check("cairo_text_extents")?;
        Ok(raw.into())
    }

    pub fn font_extents(&self) -> Result<FontExtents> {
        let mut raw = ffi::cairo_font_extents_t::default();
        unsafe { ffi::cairo_font_extents(self.raw(), &mut raw) };
        self.check("cairo_font_extents")?;
        Ok(raw.into())
    }

    /// The current scaled font, re-wrapped with its own reference.
    pub fn scaled_font(&self) -> Result<ScaledFont> {
        let raw =
            unsafe { ffi::cairo_scaled_font_reference(ffi::cairo_get_scaled_font(self.raw())) };
        unsafe { ScaledFont::from_owned(raw, "cairo_get_scaled_font") }
    }

    pub fn set_scaled_font(&mut self, font: &ScaledFont) -> Result<&mut Self> {
        unsafe { ffi::cairo_set_scaled_font(self.raw(), font.as_ptr()) };
        self.chain("cairo_set_scaled_font")
    }
}

fn c_string(value: &str, what: &'static str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::NulByte { what })
}
