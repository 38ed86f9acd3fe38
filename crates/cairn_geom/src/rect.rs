//! Axis-aligned rectangles

use std::ops::{Add, Sub};

use crate::error::{GeomError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Rectangle with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Rectangle with real coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RealRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// An axis-aligned rectangle, integer or real.
///
/// The variant is chosen at construction: [`Rect::new`] yields `Int` when
/// all four components are exactly integral and `Real` otherwise, so
/// downstream code can match on the tag instead of probing values.
/// Operations that mix variants promote to `Real`.
///
/// A zero- or negative-extent rectangle is representable (intersection of
/// disjoint rects produces one); test with [`Rect::is_empty`] rather than
/// relying on normalization that never happens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rect {
    Int(IntRect),
    Real(RealRect),
}

fn is_integral(v: f64) -> bool {
    v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64
}

impl Rect {
    /// Constructs from left/top/width/height, selecting the `Int` variant
    /// when every component is exactly integral.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        if [left, top, width, height].iter().all(|&v| is_integral(v)) {
            Rect::Int(IntRect {
                left: left as i32,
                top: top as i32,
                width: width as i32,
                height: height as i32,
            })
        } else {
            Rect::Real(RealRect { left, top, width, height })
        }
    }

    /// An integer rectangle, bypassing the integrality check.
    pub const fn from_int(left: i32, top: i32, width: i32, height: i32) -> Self {
        Rect::Int(IntRect { left, top, width, height })
    }

    /// Constructs from two opposite corner points.
    pub fn from_corners(pt1: impl Into<Vector>, pt2: impl Into<Vector>) -> Self {
        let (pt1, pt2) = (pt1.into(), pt2.into());
        let left = pt1.x.min(pt2.x);
        let top = pt1.y.min(pt2.y);
        Self::new(left, top, pt1.x.max(pt2.x) - left, pt1.y.max(pt2.y) - top)
    }

    /// A rectangle with its top left at the origin and the given dimensions.
    pub fn from_dimensions(dims: impl Into<Vector>) -> Self {
        let dims = dims.into();
        Self::new(0.0, 0.0, dims.x, dims.y)
    }

    pub fn left(&self) -> f64 {
        match self {
            Rect::Int(r) => r.left as f64,
            Rect::Real(r) => r.left,
        }
    }

    pub fn top(&self) -> f64 {
        match self {
            Rect::Int(r) => r.top as f64,
            Rect::Real(r) => r.top,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Rect::Int(r) => r.width as f64,
            Rect::Real(r) => r.width,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Rect::Int(r) => r.height as f64,
            Rect::Real(r) => r.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left() + self.width()
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.height()
    }

    pub fn top_left(&self) -> Vector {
        Vector::new(self.left(), self.top())
    }

    pub fn bottom_right(&self) -> Vector {
        Vector::new(self.right(), self.bottom())
    }

    pub fn dimensions(&self) -> Vector {
        Vector::new(self.width(), self.height())
    }

    pub fn middle(&self) -> Vector {
        Vector::new(
            self.left() + self.width() / 2.0,
            self.top() + self.height() / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// The nearest all-integer rectangle. `left` and `top` round ties to
    /// even; `width` and `height` are derived from the rounded `right` and
    /// `bottom` edges, so adjacent rounded rects stay adjacent.
    pub fn round(&self) -> Self {
        let left = self.left().round_ties_even();
        let top = self.top().round_ties_even();
        let width = self.right().round_ties_even() - left;
        let height = self.bottom().round_ties_even() - top;
        Self::new(left, top, width, height)
    }

    /// The smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        Self::new(
            left,
            top,
            self.right().max(other.right()) - left,
            self.bottom().max(other.bottom()) - top,
        )
    }

    /// The overlap of `self` and `other`. Disjoint inputs yield a
    /// rectangle with zero or negative extent, deliberately unnormalized.
    pub fn intersection(&self, other: &Rect) -> Self {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        Self::new(
            left,
            top,
            self.right().min(other.right()) - left,
            self.bottom().min(other.bottom()) - top,
        )
    }

    /// Whether the point lies inside or on the boundary.
    pub fn contains(&self, pt: impl Into<Vector>) -> bool {
        let pt = pt.into();
        pt.x >= self.left() && pt.x <= self.right() && pt.y >= self.top() && pt.y <= self.bottom()
    }

    /// A rectangle inset by the given x and y amounts on each side
    /// (negative amounts outset).
    pub fn inset(&self, amount: impl Into<Vector>) -> Self {
        let amount = amount.into();
        Self::new(
            self.left() + amount.x,
            self.top() + amount.y,
            self.width() - 2.0 * amount.x,
            self.height() - 2.0 * amount.y,
        )
    }

    /// The matrix mapping this rectangle's corners onto `dst`'s corners
    /// (scale and translate only). Fails when either rectangle has zero
    /// width or height.
    pub fn transform_to(&self, dst: &Rect) -> Result<Matrix> {
        if self.width() == 0.0 || self.height() == 0.0 || dst.width() == 0.0 || dst.height() == 0.0
        {
            return Err(GeomError::DegenerateRect);
        }
        let scale = dst.dimensions().checked_div(self.dimensions())?;
        Ok(Matrix::translation(dst.top_left())
            * Matrix::scaling(scale)
            * Matrix::translation(-self.top_left()))
    }

    /// This rectangle repositioned relative to `relpt`. `halign`/`valign`
    /// of 0 put the left/top edge on the point, 1 the right/bottom edge,
    /// intermediate values interpolate; `None` leaves that axis alone.
    pub fn position(
        &self,
        relpt: impl Into<Vector>,
        halign: Option<f64>,
        valign: Option<f64>,
    ) -> Self {
        let relpt = relpt.into();
        let mut left = self.left();
        let mut top = self.top();
        if let Some(halign) = halign {
            left = relpt.x - halign * self.width();
        }
        if let Some(valign) = valign {
            top = relpt.y - valign * self.height();
        }
        Self::new(left, top, self.width(), self.height())
    }

    /// This rectangle aligned within another. `halign`/`valign` of 0 make
    /// the left/top edges coincide, 1 the right/bottom edges.
    pub fn align(&self, within: &Rect, halign: Option<f64>, valign: Option<f64>) -> Self {
        let mut left = self.left();
        let mut top = self.top();
        if let Some(halign) = halign {
            left = within.left() + halign * (within.width() - self.width());
        }
        if let Some(valign) = valign {
            top = within.top() + valign * (within.height() - self.height());
        }
        Self::new(left, top, self.width(), self.height())
    }
}

impl From<IntRect> for Rect {
    fn from(r: IntRect) -> Self {
        Rect::Int(r)
    }
}

impl From<RealRect> for Rect {
    fn from(r: RealRect) -> Self {
        Rect::Real(r)
    }
}

impl IntRect {
    pub fn to_real(self) -> RealRect {
        RealRect {
            left: self.left as f64,
            top: self.top as f64,
            width: self.width as f64,
            height: self.height as f64,
        }
    }
}

/// Offsets the rectangle by a vector; the variant re-derives from the
/// resulting components.
impl Add<Vector> for Rect {
    type Output = Rect;

    fn add(self, v: Vector) -> Rect {
        Rect::new(
            self.left() + v.x,
            self.top() + v.y,
            self.width(),
            self.height(),
        )
    }
}

impl Sub<Vector> for Rect {
    type Output = Rect;

    fn sub(self, v: Vector) -> Rect {
        self + -v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_selects_variant() {
        assert!(matches!(Rect::new(1.0, 2.0, 3.0, 4.0), Rect::Int(_)));
        assert!(matches!(Rect::new(1.0, 2.0, 3.5, 4.0), Rect::Real(_)));
        assert!(matches!(Rect::new(-1.0, 0.0, 10.0, 10.0), Rect::Int(_)));
    }

    #[test]
    fn corners_normalize() {
        let r = Rect::from_corners((10.0, 2.0), (4.0, 8.0));
        assert_eq!(r, Rect::from_int(4, 2, 6, 6));
        assert_eq!(r.bottom_right(), Vector::new(10.0, 8.0));
        assert_eq!(r.middle(), Vector::new(7.0, 5.0));
    }

    #[test]
    fn transform_to_maps_corners() {
        let src = Rect::new(1.0, 2.0, 4.0, 8.0);
        let dst = Rect::new(-3.0, 0.5, 2.0, 2.0);
        let m = src.transform_to(&dst).unwrap();
        let close = |a: Vector, b: Vector| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9;
        assert!(close(m.map(src.top_left()), dst.top_left()));
        assert!(close(m.map(src.bottom_right()), dst.bottom_right()));
    }

    #[test]
    fn transform_to_rejects_degenerate() {
        let flat = Rect::new(0.0, 0.0, 0.0, 5.0);
        let dst = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(flat.transform_to(&dst), Err(GeomError::DegenerateRect));
        assert_eq!(dst.transform_to(&flat), Err(GeomError::DegenerateRect));
    }

    #[test]
    fn round_preserves_edges() {
        let r = Rect::new(0.5, 0.5, 2.0, 2.0);
        let rounded = r.round();
        // ties-to-even: left 0.5 -> 0, right 2.5 -> 2
        assert_eq!(rounded, Rect::from_int(0, 0, 2, 2));
        assert_eq!(rounded.right(), r.right().round_ties_even());
        assert_eq!(rounded.bottom(), r.bottom().round_ties_even());
    }

    #[test]
    fn union_and_intersection() {
        let a = Rect::from_int(0, 0, 4, 4);
        let b = Rect::from_int(2, 2, 4, 4);
        assert_eq!(a.union(&b), Rect::from_int(0, 0, 6, 6));
        assert_eq!(a.intersection(&b), Rect::from_int(2, 2, 2, 2));

        let far = Rect::from_int(10, 10, 2, 2);
        let gap = a.intersection(&far);
        assert!(gap.is_empty());
        assert!(gap.width() < 0.0);
    }

    #[test]
    fn containment() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert!(r.contains((2.0, 2.0)));
        assert!(r.contains((4.0, 4.0)));
        assert!(!r.contains((4.1, 2.0)));
    }

    #[test]
    fn offset_keeps_integrality_when_possible() {
        let r = Rect::from_int(1, 1, 2, 2) + Vector::new(2.0, 3.0);
        assert!(matches!(r, Rect::Int(_)));
        let r = Rect::from_int(1, 1, 2, 2) + Vector::new(0.5, 0.0);
        assert!(matches!(r, Rect::Real(_)));
    }

    #[test]
    fn align_centers() {
        let inner = Rect::from_int(0, 0, 2, 2);
        let outer = Rect::from_int(0, 0, 10, 10);
        let centered = inner.align(&outer, Some(0.5), Some(0.5));
        assert_eq!(centered, Rect::from_int(4, 4, 2, 2));
    }
}
