//! RGBA colour with colour-space conversions

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// An RGBA colour.
///
/// Components are nominally in [0, 1] but are not clamped on construction,
/// so out-of-gamut intermediates are representable; clamping happens only
/// where a conversion requires it (YIQ -> RGB). Alpha defaults to 1 and
/// passes through every conversion untouched.
///
/// Equality compares the stored RGBA tuple within a small tolerance, so
/// same-space round trips compare equal despite floating-point noise.
#[derive(Clone, Copy, Debug)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Colour = Colour { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Colour = Colour { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub const fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn grey(value: f64) -> Self {
        Self::from_rgb(value, value, value)
    }

    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Self::from_hsva(h, s, v, 1.0)
    }

    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self { r, g, b, a }
    }

    pub fn from_hls(h: f64, l: f64, s: f64) -> Self {
        Self::from_hlsa(h, l, s, 1.0)
    }

    pub fn from_hlsa(h: f64, l: f64, s: f64, a: f64) -> Self {
        let (r, g, b) = hls_to_rgb(h, l, s);
        Self { r, g, b, a }
    }

    pub fn from_yiq(y: f64, i: f64, q: f64) -> Self {
        Self::from_yiqa(y, i, q, 1.0)
    }

    pub fn from_yiqa(y: f64, i: f64, q: f64, a: f64) -> Self {
        let (r, g, b) = yiq_to_rgb(y, i, q);
        Self { r, g, b, a }
    }

    pub fn to_rgb(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn to_hsv(self) -> (f64, f64, f64) {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_hls(self) -> (f64, f64, f64) {
        rgb_to_hls(self.r, self.g, self.b)
    }

    pub fn to_yiq(self) -> (f64, f64, f64) {
        rgb_to_yiq(self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

const EQ_TOLERANCE: f64 = 1e-10;

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < EQ_TOLERANCE
            && (self.g - other.g).abs() < EQ_TOLERANCE
            && (self.b - other.b).abs() < EQ_TOLERANCE
            && (self.a - other.a).abs() < EQ_TOLERANCE
    }
}

// The conversions below follow the classic hexcone and NTSC formulas,
// hue in [0, 1) rather than degrees.

fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if maxc == minc {
        return (0.0, 0.0, v);
    }
    let s = (maxc - minc) / maxc;
    (hue(r, g, b, maxc, minc), s, v)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) / 2.0;
    if maxc == minc {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 {
        (maxc - minc) / (maxc + minc)
    } else {
        (maxc - minc) / (2.0 - maxc - minc)
    };
    (hue(r, g, b, maxc, minc), l, s)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hls_component(m1, m2, h + ONE_THIRD),
        hls_component(m1, m2, h),
        hls_component(m1, m2, h - ONE_THIRD),
    )
}

fn hls_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

fn hue(r: f64, g: f64, b: f64, maxc: f64, minc: f64) -> f64 {
    let span = maxc - minc;
    let rc = (maxc - r) / span;
    let gc = (maxc - g) / span;
    let bc = (maxc - b) / span;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

fn rgb_to_yiq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);
    (y, i, q)
}

fn yiq_to_rgb(y: f64, i: f64, q: f64) -> (f64, f64, f64) {
    // inverse of the matrix above; this direction clamps into gamut
    let r = y + 0.9468822170900693 * i + 0.6235565819861433 * q;
    let g = y - 0.27478764629897834 * i - 0.6356910791873801 * q;
    let b = y - 1.1085450346420322 * i + 1.7090069284064666 * q;
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple_close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn same_space_round_trips_are_exact() {
        let c = Colour::from_rgba(0.8, 0.3, 0.1, 0.5);

        let (h, s, v) = c.to_hsv();
        assert_eq!(Colour::from_hsva(h, s, v, c.a), c);

        let (h, l, s) = c.to_hls();
        assert_eq!(Colour::from_hlsa(h, l, s, c.a), c);

        let (y, i, q) = c.to_yiq();
        assert_eq!(Colour::from_yiqa(y, i, q, c.a), c);
    }

    #[test]
    fn cross_space_views_agree() {
        let c = Colour::from_rgb(0.25, 0.5, 0.75);
        let rebuilt = {
            let (r, g, b) = c.to_rgb();
            Colour::from_rgb(r, g, b)
        };
        assert!(tuple_close(rebuilt.to_hsv(), c.to_hsv()));
        assert!(tuple_close(rebuilt.to_hls(), c.to_hls()));
        assert!(tuple_close(rebuilt.to_yiq(), c.to_yiq()));
    }

    #[test]
    fn known_hsv_values() {
        // pure red: hue 0, full saturation and value
        assert_eq!(Colour::from_hsv(0.0, 1.0, 1.0), Colour::from_rgb(1.0, 0.0, 0.0));
        // pure green sits a third of the way around the hue circle
        assert!(tuple_close(
            Colour::from_rgb(0.0, 1.0, 0.0).to_hsv(),
            (1.0 / 3.0, 1.0, 1.0)
        ));
        // greys have zero saturation
        assert!(tuple_close(Colour::grey(0.4).to_hsv(), (0.0, 0.0, 0.4)));
    }

    #[test]
    fn alpha_defaults_and_survives() {
        assert_eq!(Colour::from_hsv(0.1, 0.2, 0.3).a, 1.0);
        let c = Colour::from_rgb(0.2, 0.4, 0.6).with_alpha(0.25);
        let (h, l, s) = c.to_hls();
        assert_eq!(Colour::from_hlsa(h, l, s, c.a).a, 0.25);
    }

    #[test]
    fn yiq_clamps_into_gamut() {
        // saturated chroma on a dark luma lands outside [0, 1] before clamping
        let c = Colour::from_yiq(0.1, 0.6, -0.6);
        for component in [c.r, c.g, c.b] {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn out_of_gamut_construction_is_preserved() {
        let c = Colour::from_rgb(1.5, -0.25, 0.5);
        assert_eq!(c.to_rgb(), (1.5, -0.25, 0.5));
    }

}
