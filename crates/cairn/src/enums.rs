//! Engine enumerations
//!
//! Discriminants match cairo.h exactly; `from_raw`/`as_raw` convert at the
//! foreign-call boundary.

use std::ffi::c_int;

macro_rules! c_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Converts an engine-reported code; `None` for values this
            /// binding does not know.
            pub fn from_raw(raw: c_int) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub(crate) fn as_raw(self) -> c_int {
                self as c_int
            }
        }
    };
}

c_enum! {
    /// Pixel layout of an image surface
    Format {
        Invalid = -1,
        Argb32 = 0,
        Rgb24 = 1,
        A8 = 2,
        A1 = 3,
        Rgb16_565 = 4,
        Rgb30 = 5,
    }
}

c_enum! {
    /// What channels a surface or group carries
    Content {
        Color = 0x1000,
        Alpha = 0x2000,
        ColorAlpha = 0x3000,
    }
}

c_enum! {
    /// Compositing operator
    Operator {
        Clear = 0,
        Source = 1,
        Over = 2,
        In = 3,
        Out = 4,
        Atop = 5,
        Dest = 6,
        DestOver = 7,
        DestIn = 8,
        DestOut = 9,
        DestAtop = 10,
        Xor = 11,
        Add = 12,
        Saturate = 13,
        Multiply = 14,
        Screen = 15,
        Overlay = 16,
        Darken = 17,
        Lighten = 18,
        ColorDodge = 19,
        ColorBurn = 20,
        HardLight = 21,
        SoftLight = 22,
        Difference = 23,
        Exclusion = 24,
        HslHue = 25,
        HslSaturation = 26,
        HslColor = 27,
        HslLuminosity = 28,
    }
}

c_enum! {
    /// How a pattern repeats outside its natural area
    Extend {
        None = 0,
        Repeat = 1,
        Reflect = 2,
        Pad = 3,
    }
}

c_enum! {
    /// Pattern resampling filter
    Filter {
        Fast = 0,
        Good = 1,
        Best = 2,
        Nearest = 3,
        Bilinear = 4,
        Gaussian = 5,
    }
}

c_enum! {
    /// Antialiasing mode
    Antialias {
        Default = 0,
        None = 1,
        Gray = 2,
        Subpixel = 3,
        Fast = 4,
        Good = 5,
        Best = 6,
    }
}

c_enum! {
    /// Winding rule for fills and clips
    FillRule {
        Winding = 0,
        EvenOdd = 1,
    }
}

c_enum! {
    /// Stroke endpoint shape
    LineCap {
        Butt = 0,
        Round = 1,
        Square = 2,
    }
}

c_enum! {
    /// Stroke corner shape
    LineJoin {
        Miter = 0,
        Round = 1,
        Bevel = 2,
    }
}

c_enum! {
    /// Toy-font slant
    FontSlant {
        Normal = 0,
        Italic = 1,
        Oblique = 2,
    }
}

c_enum! {
    /// Toy-font weight
    FontWeight {
        Normal = 0,
        Bold = 1,
    }
}

c_enum! {
    /// Outline hinting applied when rendering glyphs
    HintStyle {
        Default = 0,
        None = 1,
        Slight = 2,
        Medium = 3,
        Full = 4,
    }
}

c_enum! {
    /// Whether glyph metrics are quantized to integers
    HintMetrics {
        Default = 0,
        Off = 1,
        On = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        assert_eq!(Operator::from_raw(Operator::Xor.as_raw()), Some(Operator::Xor));
        assert_eq!(Format::from_raw(-1), Some(Format::Invalid));
        assert_eq!(LineCap::from_raw(99), None);
    }
}
