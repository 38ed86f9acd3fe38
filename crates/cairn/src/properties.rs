//! Property translation between wrapper types and foreign get/set pairs
//!
//! Each logical property on a wrapper maps to one foreign getter and one
//! foreign setter. [`foreign_props!`] expands a declaration into three
//! methods: a read accessor that performs the get call and converts the
//! raw result, a plain setter, and a chainable setter. The chainable form
//! is generated as a call to the plain setter plus `Ok(self)`, so the
//! two write paths cannot diverge.
//!
//! The macro expects the surrounding type to provide `fn raw(&self)`
//! returning the engine pointer and `fn check(&self, call) -> Result<()>`
//! translating the object's status.

use cairn_geom::Matrix;

use crate::ffi;

pub(crate) fn matrix_to_raw(m: &Matrix) -> ffi::cairo_matrix_t {
    ffi::cairo_matrix_t {
        xx: m.xx,
        yx: m.yx,
        xy: m.xy,
        yy: m.yy,
        x0: m.x0,
        y0: m.y0,
    }
}

pub(crate) fn matrix_from_raw(raw: &ffi::cairo_matrix_t) -> Matrix {
    Matrix::new(raw.xx, raw.yx, raw.xy, raw.yy, raw.x0, raw.y0)
}

macro_rules! foreign_props {
    () => {};

    (
        $(#[$doc:meta])*
        f64 $get:ident, $set:ident, $with:ident => ($get_fn:ident, $set_fn:ident);
        $($rest:tt)*
    ) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<f64> {
            let value = unsafe { $crate::ffi::$get_fn(self.raw()) };
            self.check(stringify!($get_fn))?;
            Ok(value)
        }

        pub fn $set(&mut self, value: f64) -> $crate::error::Result<()> {
            unsafe { $crate::ffi::$set_fn(self.raw(), value) };
            self.check(stringify!($set_fn))
        }

        /// Chainable form of the matching setter.
        pub fn $with(&mut self, value: f64) -> $crate::error::Result<&mut Self> {
            self.$set(value)?;
            Ok(self)
        }

        foreign_props!($($rest)*);
    };

    (
        $(#[$doc:meta])*
        enum $ty:ident $get:ident, $set:ident, $with:ident => ($get_fn:ident, $set_fn:ident);
        $($rest:tt)*
    ) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<$crate::enums::$ty> {
            let raw = unsafe { $crate::ffi::$get_fn(self.raw()) };
            self.check(stringify!($get_fn))?;
            $crate::enums::$ty::from_raw(raw).ok_or($crate::error::Error::UnexpectedEnumValue {
                what: stringify!($ty),
                value: raw,
            })
        }

        pub fn $set(&mut self, value: $crate::enums::$ty) -> $crate::error::Result<()> {
            unsafe { $crate::ffi::$set_fn(self.raw(), value.as_raw()) };
            self.check(stringify!($set_fn))
        }

        /// Chainable form of the matching setter.
        pub fn $with(&mut self, value: $crate::enums::$ty) -> $crate::error::Result<&mut Self> {
            self.$set(value)?;
            Ok(self)
        }

        foreign_props!($($rest)*);
    };

    (
        $(#[$doc:meta])*
        matrix $get:ident, $set:ident, $with:ident => ($get_fn:ident, $set_fn:ident);
        $($rest:tt)*
    ) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<cairn_geom::Matrix> {
            let mut raw = $crate::ffi::cairo_matrix_t::default();
            unsafe { $crate::ffi::$get_fn(self.raw(), &mut raw) };
            self.check(stringify!($get_fn))?;
            Ok($crate::properties::matrix_from_raw(&raw))
        }

        pub fn $set(&mut self, value: &cairn_geom::Matrix) -> $crate::error::Result<()> {
            let raw = $crate::properties::matrix_to_raw(value);
            unsafe { $crate::ffi::$set_fn(self.raw(), &raw) };
            self.check(stringify!($set_fn))
        }

        /// Chainable form of the matching setter.
        pub fn $with(&mut self, value: &cairn_geom::Matrix) -> $crate::error::Result<&mut Self> {
            self.$set(value)?;
            Ok(self)
        }

        foreign_props!($($rest)*);
    };
}

pub(crate) use foreign_props;
