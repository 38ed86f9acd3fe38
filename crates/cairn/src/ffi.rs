//! Raw declarations for the cairo C ABI.
//!
//! Everything in here mirrors cairo.h exactly: opaque handle types, the
//! flat path-data records, and the entry points the high-level wrappers
//! call. Nothing outside this crate should need these directly; every
//! wrapper exposes a raw-pointer escape hatch for the cases that do.
//!
//! Link flags come from `build.rs`, not a `#[link]` attribute, so the
//! library can be located via pkg-config or a directory scan.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_double, c_int, c_uint};

/// Opaque drawing context (`cairo_t`).
#[repr(C)]
pub struct cairo_t {
    _private: [u8; 0],
}

/// Opaque surface (`cairo_surface_t`).
#[repr(C)]
pub struct cairo_surface_t {
    _private: [u8; 0],
}

/// Opaque pattern (`cairo_pattern_t`).
#[repr(C)]
pub struct cairo_pattern_t {
    _private: [u8; 0],
}

/// Opaque scaled font (`cairo_scaled_font_t`).
#[repr(C)]
pub struct cairo_scaled_font_t {
    _private: [u8; 0],
}

/// Opaque font face (`cairo_font_face_t`).
#[repr(C)]
pub struct cairo_font_face_t {
    _private: [u8; 0],
}

/// Opaque font options (`cairo_font_options_t`).
#[repr(C)]
pub struct cairo_font_options_t {
    _private: [u8; 0],
}

pub type cairo_status_t = c_int;
pub type cairo_bool_t = c_int;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct cairo_matrix_t {
    pub xx: c_double,
    pub yx: c_double,
    pub xy: c_double,
    pub yy: c_double,
    pub x0: c_double,
    pub y0: c_double,
}

// cairo_path_data_type_t
pub const CAIRO_PATH_MOVE_TO: c_uint = 0;
pub const CAIRO_PATH_LINE_TO: c_uint = 1;
pub const CAIRO_PATH_CURVE_TO: c_uint = 2;
pub const CAIRO_PATH_CLOSE_PATH: c_uint = 3;

/// Header record of a path element: the tag plus the total record count of
/// the element (itself included).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct cairo_path_data_header {
    pub data_type: c_uint,
    pub length: c_int,
}

/// Coordinate record of a path element.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct cairo_path_data_point {
    pub x: c_double,
    pub y: c_double,
}

/// One record of the flat path buffer: a header or a point, 16 bytes
/// either way. Which field is live depends on position: each element is a
/// header followed by `header.length - 1` points.
#[repr(C)]
#[derive(Clone, Copy)]
pub union cairo_path_data_t {
    pub header: cairo_path_data_header,
    pub point: cairo_path_data_point,
}

/// The buffer returned by `cairo_copy_path`/`cairo_copy_path_flat`; must
/// be released with `cairo_path_destroy`.
#[repr(C)]
pub struct cairo_path_t {
    pub status: cairo_status_t,
    pub data: *mut cairo_path_data_t,
    pub num_data: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct cairo_text_extents_t {
    pub x_bearing: c_double,
    pub y_bearing: c_double,
    pub width: c_double,
    pub height: c_double,
    pub x_advance: c_double,
    pub y_advance: c_double,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct cairo_font_extents_t {
    pub ascent: c_double,
    pub descent: c_double,
    pub height: c_double,
    pub max_x_advance: c_double,
    pub max_y_advance: c_double,
}

extern "C" {
    // misc
    pub fn cairo_status_to_string(status: cairo_status_t) -> *const c_char;
    pub fn cairo_version_string() -> *const c_char;

    // context lifecycle
    pub fn cairo_create(target: *mut cairo_surface_t) -> *mut cairo_t;
    pub fn cairo_reference(cr: *mut cairo_t) -> *mut cairo_t;
    pub fn cairo_destroy(cr: *mut cairo_t);
    pub fn cairo_status(cr: *mut cairo_t) -> cairo_status_t;
    pub fn cairo_get_reference_count(cr: *mut cairo_t) -> c_uint;
    pub fn cairo_save(cr: *mut cairo_t);
    pub fn cairo_restore(cr: *mut cairo_t);
    pub fn cairo_get_target(cr: *mut cairo_t) -> *mut cairo_surface_t;

    // context path construction
    pub fn cairo_new_path(cr: *mut cairo_t);
    pub fn cairo_new_sub_path(cr: *mut cairo_t);
    pub fn cairo_move_to(cr: *mut cairo_t, x: c_double, y: c_double);
    pub fn cairo_line_to(cr: *mut cairo_t, x: c_double, y: c_double);
    pub fn cairo_curve_to(
        cr: *mut cairo_t,
        x1: c_double,
        y1: c_double,
        x2: c_double,
        y2: c_double,
        x3: c_double,
        y3: c_double,
    );
    pub fn cairo_close_path(cr: *mut cairo_t);
    pub fn cairo_rel_move_to(cr: *mut cairo_t, dx: c_double, dy: c_double);
    pub fn cairo_rel_line_to(cr: *mut cairo_t, dx: c_double, dy: c_double);
    pub fn cairo_rel_curve_to(
        cr: *mut cairo_t,
        dx1: c_double,
        dy1: c_double,
        dx2: c_double,
        dy2: c_double,
        dx3: c_double,
        dy3: c_double,
    );
    pub fn cairo_arc(
        cr: *mut cairo_t,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_arc_negative(
        cr: *mut cairo_t,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_rectangle(
        cr: *mut cairo_t,
        x: c_double,
        y: c_double,
        width: c_double,
        height: c_double,
    );
    pub fn cairo_has_current_point(cr: *mut cairo_t) -> cairo_bool_t;
    pub fn cairo_get_current_point(cr: *mut cairo_t, x: *mut c_double, y: *mut c_double);
    pub fn cairo_copy_path(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_copy_path_flat(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_path_destroy(path: *mut cairo_path_t);

    // context painting
    pub fn cairo_paint(cr: *mut cairo_t);
    pub fn cairo_paint_with_alpha(cr: *mut cairo_t, alpha: c_double);
    pub fn cairo_mask(cr: *mut cairo_t, pattern: *mut cairo_pattern_t);
    pub fn cairo_stroke(cr: *mut cairo_t);
    pub fn cairo_stroke_preserve(cr: *mut cairo_t);
    pub fn cairo_fill(cr: *mut cairo_t);
    pub fn cairo_fill_preserve(cr: *mut cairo_t);
    pub fn cairo_clip(cr: *mut cairo_t);
    pub fn cairo_clip_preserve(cr: *mut cairo_t);
    pub fn cairo_reset_clip(cr: *mut cairo_t);

    // context groups
    pub fn cairo_push_group(cr: *mut cairo_t);
    pub fn cairo_push_group_with_content(cr: *mut cairo_t, content: c_int);
    pub fn cairo_pop_group(cr: *mut cairo_t) -> *mut cairo_pattern_t;
    pub fn cairo_pop_group_to_source(cr: *mut cairo_t);
    pub fn cairo_get_group_target(cr: *mut cairo_t) -> *mut cairo_surface_t;

    // context extents and hit tests
    pub fn cairo_fill_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_stroke_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_clip_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_path_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_in_fill(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;
    pub fn cairo_in_stroke(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;
    pub fn cairo_in_clip(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;

    // context source
    pub fn cairo_set_source_rgb(cr: *mut cairo_t, r: c_double, g: c_double, b: c_double);
    pub fn cairo_set_source_rgba(
        cr: *mut cairo_t,
        r: c_double,
        g: c_double,
        b: c_double,
        a: c_double,
    );
    pub fn cairo_set_source(cr: *mut cairo_t, source: *mut cairo_pattern_t);
    pub fn cairo_get_source(cr: *mut cairo_t) -> *mut cairo_pattern_t;

    // context state properties
    pub fn cairo_set_line_width(cr: *mut cairo_t, width: c_double);
    pub fn cairo_get_line_width(cr: *mut cairo_t) -> c_double;
    pub fn cairo_set_miter_limit(cr: *mut cairo_t, limit: c_double);
    pub fn cairo_get_miter_limit(cr: *mut cairo_t) -> c_double;
    pub fn cairo_set_tolerance(cr: *mut cairo_t, tolerance: c_double);
    pub fn cairo_get_tolerance(cr: *mut cairo_t) -> c_double;
    pub fn cairo_set_operator(cr: *mut cairo_t, op: c_int);
    pub fn cairo_get_operator(cr: *mut cairo_t) -> c_int;
    pub fn cairo_set_line_cap(cr: *mut cairo_t, cap: c_int);
    pub fn cairo_get_line_cap(cr: *mut cairo_t) -> c_int;
    pub fn cairo_set_line_join(cr: *mut cairo_t, join: c_int);
    pub fn cairo_get_line_join(cr: *mut cairo_t) -> c_int;
    pub fn cairo_set_fill_rule(cr: *mut cairo_t, rule: c_int);
    pub fn cairo_get_fill_rule(cr: *mut cairo_t) -> c_int;
    pub fn cairo_set_antialias(cr: *mut cairo_t, antialias: c_int);
    pub fn cairo_get_antialias(cr: *mut cairo_t) -> c_int;
    pub fn cairo_set_dash(
        cr: *mut cairo_t,
        dashes: *const c_double,
        num_dashes: c_int,
        offset: c_double,
    );
    pub fn cairo_get_dash_count(cr: *mut cairo_t) -> c_int;
    pub fn cairo_get_dash(cr: *mut cairo_t, dashes: *mut c_double, offset: *mut c_double);

    // context transform
    pub fn cairo_translate(cr: *mut cairo_t, tx: c_double, ty: c_double);
    pub fn cairo_scale(cr: *mut cairo_t, sx: c_double, sy: c_double);
    pub fn cairo_rotate(cr: *mut cairo_t, angle: c_double);
    pub fn cairo_transform(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_set_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_identity_matrix(cr: *mut cairo_t);

    // context text
    pub fn cairo_select_font_face(
        cr: *mut cairo_t,
        family: *const c_char,
        slant: c_int,
        weight: c_int,
    );
    pub fn cairo_set_font_size(cr: *mut cairo_t, size: c_double);
    pub fn cairo_show_text(cr: *mut cairo_t, text: *const c_char);
    pub fn cairo_text_extents(
        cr: *mut cairo_t,
        text: *const c_char,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_font_extents(cr: *mut cairo_t, extents: *mut cairo_font_extents_t);
    pub fn cairo_get_scaled_font(cr: *mut cairo_t) -> *mut cairo_scaled_font_t;
    pub fn cairo_set_scaled_font(cr: *mut cairo_t, font: *mut cairo_scaled_font_t);
    pub fn cairo_get_font_face(cr: *mut cairo_t) -> *mut cairo_font_face_t;
    pub fn cairo_set_font_face(cr: *mut cairo_t, face: *mut cairo_font_face_t);
    pub fn cairo_get_font_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_set_font_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_font_options(cr: *mut cairo_t, options: *mut cairo_font_options_t);
    pub fn cairo_set_font_options(cr: *mut cairo_t, options: *const cairo_font_options_t);

    // font faces
    pub fn cairo_toy_font_face_create(
        family: *const c_char,
        slant: c_int,
        weight: c_int,
    ) -> *mut cairo_font_face_t;
    pub fn cairo_toy_font_face_get_family(face: *mut cairo_font_face_t) -> *const c_char;
    pub fn cairo_toy_font_face_get_slant(face: *mut cairo_font_face_t) -> c_int;
    pub fn cairo_toy_font_face_get_weight(face: *mut cairo_font_face_t) -> c_int;
    pub fn cairo_font_face_reference(face: *mut cairo_font_face_t) -> *mut cairo_font_face_t;
    pub fn cairo_font_face_destroy(face: *mut cairo_font_face_t);
    pub fn cairo_font_face_status(face: *mut cairo_font_face_t) -> cairo_status_t;
    pub fn cairo_font_face_get_reference_count(face: *mut cairo_font_face_t) -> c_uint;

    // font options
    pub fn cairo_font_options_create() -> *mut cairo_font_options_t;
    pub fn cairo_font_options_copy(
        options: *const cairo_font_options_t,
    ) -> *mut cairo_font_options_t;
    pub fn cairo_font_options_destroy(options: *mut cairo_font_options_t);
    pub fn cairo_font_options_status(options: *mut cairo_font_options_t) -> cairo_status_t;
    pub fn cairo_font_options_equal(
        a: *const cairo_font_options_t,
        b: *const cairo_font_options_t,
    ) -> cairo_bool_t;
    pub fn cairo_font_options_set_antialias(options: *mut cairo_font_options_t, aa: c_int);
    pub fn cairo_font_options_get_antialias(options: *mut cairo_font_options_t) -> c_int;
    pub fn cairo_font_options_set_hint_style(options: *mut cairo_font_options_t, style: c_int);
    pub fn cairo_font_options_get_hint_style(options: *mut cairo_font_options_t) -> c_int;
    pub fn cairo_font_options_set_hint_metrics(
        options: *mut cairo_font_options_t,
        metrics: c_int,
    );
    pub fn cairo_font_options_get_hint_metrics(options: *mut cairo_font_options_t) -> c_int;

    // scaled fonts
    pub fn cairo_scaled_font_create(
        face: *mut cairo_font_face_t,
        font_matrix: *const cairo_matrix_t,
        ctm: *const cairo_matrix_t,
        options: *const cairo_font_options_t,
    ) -> *mut cairo_scaled_font_t;
    pub fn cairo_scaled_font_get_font_face(
        font: *mut cairo_scaled_font_t,
    ) -> *mut cairo_font_face_t;
    pub fn cairo_scaled_font_reference(font: *mut cairo_scaled_font_t)
        -> *mut cairo_scaled_font_t;
    pub fn cairo_scaled_font_destroy(font: *mut cairo_scaled_font_t);
    pub fn cairo_scaled_font_status(font: *mut cairo_scaled_font_t) -> cairo_status_t;
    pub fn cairo_scaled_font_extents(
        font: *mut cairo_scaled_font_t,
        extents: *mut cairo_font_extents_t,
    );
    pub fn cairo_scaled_font_text_extents(
        font: *mut cairo_scaled_font_t,
        text: *const c_char,
        extents: *mut cairo_text_extents_t,
    );

    // surfaces
    pub fn cairo_image_surface_create(
        format: c_int,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_surface_reference(surface: *mut cairo_surface_t) -> *mut cairo_surface_t;
    pub fn cairo_surface_destroy(surface: *mut cairo_surface_t);
    pub fn cairo_surface_status(surface: *mut cairo_surface_t) -> cairo_status_t;
    pub fn cairo_surface_get_reference_count(surface: *mut cairo_surface_t) -> c_uint;
    pub fn cairo_surface_flush(surface: *mut cairo_surface_t);
    pub fn cairo_surface_finish(surface: *mut cairo_surface_t);
    pub fn cairo_surface_write_to_png(
        surface: *mut cairo_surface_t,
        filename: *const c_char,
    ) -> cairo_status_t;
    pub fn cairo_image_surface_get_format(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_width(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_height(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_stride(surface: *mut cairo_surface_t) -> c_int;

    // patterns
    pub fn cairo_pattern_create_rgb(
        r: c_double,
        g: c_double,
        b: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_rgba(
        r: c_double,
        g: c_double,
        b: c_double,
        a: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_linear(
        x0: c_double,
        y0: c_double,
        x1: c_double,
        y1: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_radial(
        cx0: c_double,
        cy0: c_double,
        radius0: c_double,
        cx1: c_double,
        cy1: c_double,
        radius1: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_for_surface(
        surface: *mut cairo_surface_t,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_reference(pattern: *mut cairo_pattern_t) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_destroy(pattern: *mut cairo_pattern_t);
    pub fn cairo_pattern_status(pattern: *mut cairo_pattern_t) -> cairo_status_t;
    pub fn cairo_pattern_get_reference_count(pattern: *mut cairo_pattern_t) -> c_uint;
    pub fn cairo_pattern_add_color_stop_rgba(
        pattern: *mut cairo_pattern_t,
        offset: c_double,
        r: c_double,
        g: c_double,
        b: c_double,
        a: c_double,
    );
    pub fn cairo_pattern_get_rgba(
        pattern: *mut cairo_pattern_t,
        r: *mut c_double,
        g: *mut c_double,
        b: *mut c_double,
        a: *mut c_double,
    ) -> cairo_status_t;
    pub fn cairo_pattern_set_extend(pattern: *mut cairo_pattern_t, extend: c_int);
    pub fn cairo_pattern_get_extend(pattern: *mut cairo_pattern_t) -> c_int;
    pub fn cairo_pattern_set_filter(pattern: *mut cairo_pattern_t, filter: c_int);
    pub fn cairo_pattern_get_filter(pattern: *mut cairo_pattern_t) -> c_int;
    pub fn cairo_pattern_set_matrix(pattern: *mut cairo_pattern_t, matrix: *const cairo_matrix_t);
    pub fn cairo_pattern_get_matrix(pattern: *mut cairo_pattern_t, matrix: *mut cairo_matrix_t);
}
