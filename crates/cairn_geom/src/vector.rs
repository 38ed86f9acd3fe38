//! 2D point and direction type

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{GeomError, Result};

/// An immutable 2D point or direction.
///
/// Arithmetic is componentwise and always yields a new `Vector`. Anywhere
/// the public API takes a point it accepts `impl Into<Vector>`, so a plain
/// `(x, y)` tuple (integer or real, promoted to `f64`) works in place of a
/// constructed `Vector`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The unit vector pointing in the given direction.
    pub fn unit(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Constructs a vector from a length and a direction.
    pub fn from_polar(length: f64, angle: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    /// Both components rounded to the nearest integer, ties to even:
    /// `(3.5, 4.5)` rounds to `(4, 4)` and `(-3.5, 0.5)` to `(-4, 0)`.
    pub fn round(self) -> Self {
        Self::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotation angle, measured from the positive x axis.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The vector rotated about the origin by `angle`.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// The point at relative position `fract` along the way to `other`.
    pub fn lerp(self, other: impl Into<Vector>, fract: f64) -> Self {
        let other = other.into();
        (other - self) * fract + self
    }

    /// Componentwise division that reports a zero divisor instead of
    /// producing infinities or panicking.
    pub fn checked_div(self, rhs: impl Into<Vector>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }
}

impl<X: Into<f64>, Y: Into<f64>> From<(X, Y)> for Vector {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<(f64, f64)> for Vector {
    type Output = Vector;

    fn add(self, rhs: (f64, f64)) -> Vector {
        self + Vector::from(rhs)
    }
}

impl Add<Vector> for (f64, f64) {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from(self) + rhs
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<(f64, f64)> for Vector {
    type Output = Vector;

    fn sub(self, rhs: (f64, f64)) -> Vector {
        self - Vector::from(rhs)
    }
}

impl Sub<Vector> for (f64, f64) {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::from(self) - rhs
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Uniform scale by a number.
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, f: f64) -> Vector {
        Vector::new(self.x * f, self.y * f)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

/// Non-uniform scale by another vector.
impl Mul for Vector {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Uniform inverse scale. Panics on a zero divisor, matching the behaviour
/// of Rust's integer division; use [`Vector::checked_div`] to recover.
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, f: f64) -> Vector {
        assert!(f != 0.0, "Vector division by zero");
        Vector::new(self.x / f, self.y / f)
    }
}

/// Componentwise inverse scale. Panics on a zero component; use
/// [`Vector::checked_div`] to recover.
impl Div for Vector {
    type Output = Vector;

    fn div(self, rhs: Vector) -> Vector {
        assert!(
            rhs.x != 0.0 && rhs.y != 0.0,
            "Vector division by zero component"
        );
        Vector::new(self.x / rhs.x, self.y / rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn add_sub_round_trips() {
        let a = Vector::new(1.25, -7.5);
        let b = Vector::new(0.375, 2.0);
        assert!(close(a + b - b, a));
    }

    #[test]
    fn tuples_work_on_either_side() {
        assert_eq!(Vector::new(1.0, 2.0) + (3.0, 4.0), Vector::new(4.0, 6.0));
        assert_eq!((3.0, 4.0) - Vector::new(1.0, 2.0), Vector::new(2.0, 2.0));
        assert_eq!(Vector::from((3, 4)), Vector::new(3.0, 4.0));
    }

    #[test]
    fn rounding_is_ties_to_even() {
        assert_eq!(Vector::new(3.5, 4.5).round(), Vector::new(4.0, 4.0));
        assert_eq!(Vector::new(-3.5, 0.5).round(), Vector::new(-4.0, 0.0));
        assert_eq!(Vector::new(2.4, 2.6).round(), Vector::new(2.0, 3.0));
    }

    #[test]
    fn scaling_and_negation() {
        let v = Vector::new(3.0, -4.0);
        assert_eq!(v * 2.0, Vector::new(6.0, -8.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v * Vector::new(2.0, 0.5), Vector::new(6.0, -2.0));
        assert_eq!(-v, Vector::new(-3.0, 4.0));
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn checked_div_reports_zero_divisor() {
        let v = Vector::new(1.0, 2.0);
        assert_eq!(v.checked_div((0.0, 1.0)), Err(GeomError::DivisionByZero));
        assert_eq!(v.checked_div((2.0, 4.0)), Ok(Vector::new(0.5, 0.5)));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_operator_panics_on_zero() {
        let _ = Vector::new(1.0, 1.0) / 0.0;
    }

    #[test]
    fn polar_construction() {
        let v = Vector::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert!(close(v, Vector::new(0.0, 2.0)));
        assert!((Vector::unit(0.7).length() - 1.0).abs() < EPS);
        assert!((v.angle() - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(close(v, Vector::new(0.0, 1.0)));
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Vector::ZERO.lerp((10.0, 4.0), 0.5);
        assert_eq!(mid, Vector::new(5.0, 2.0));
    }
}
