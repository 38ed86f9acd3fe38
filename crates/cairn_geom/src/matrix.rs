//! 2D affine transform

use std::ops::Mul;

use crate::error::{GeomError, Result};
use crate::vector::Vector;

/// A 3-by-2 affine homogeneous matrix.
///
/// The coefficients use the engine's naming: a point maps as
/// `(x, y) -> (xx*x + xy*y + x0, yx*x + yy*y + y0)`. All calculations are
/// done in plain Rust numerics; the binding crate converts to and from the
/// engine's matrix record at the call boundary.
///
/// Composition via `*` is mathematical: `(a * b).map(v) == a.map(b.map(v))`,
/// so the right operand applies first. [`Matrix::then`] reads the other way
/// around: `a.then(b)` applies `a` first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Matrix {
    pub const fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self { xx, yx, xy, yy, x0, y0 }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A matrix that translates by `delta`.
    pub fn translation(delta: impl Into<Vector>) -> Self {
        let delta = delta.into();
        Self::new(1.0, 0.0, 0.0, 1.0, delta.x, delta.y)
    }

    /// A matrix that scales per-axis by `factor`.
    pub fn scaling(factor: impl Into<Vector>) -> Self {
        let factor = factor.into();
        Self::new(factor.x, 0.0, 0.0, factor.y, 0.0, 0.0)
    }

    /// A matrix that scales both axes by `factor`.
    pub fn scaling_uniform(factor: f64) -> Self {
        Self::scaling((factor, factor))
    }

    /// A matrix that rotates about the origin by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A matrix that skews by the given x and y factors.
    pub fn skewing(factor: impl Into<Vector>) -> Self {
        let factor = factor.into();
        Self::new(1.0, factor.y, factor.x, 1.0, 0.0, 0.0)
    }

    /// This transform followed by `next`: `self` applies first.
    pub fn then(self, next: Matrix) -> Self {
        next * self
    }

    pub fn det(self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    fn adj(self) -> Self {
        Self::new(
            self.yy,
            -self.yx,
            -self.xy,
            self.xx,
            self.xy * self.y0 - self.yy * self.x0,
            self.yx * self.x0 - self.xx * self.y0,
        )
    }

    /// The inverse transform, via the adjugate.
    pub fn invert(self) -> Result<Self> {
        let det = self.det();
        if det == 0.0 {
            return Err(GeomError::SingularMatrix);
        }
        let adj = self.adj();
        Ok(Self::new(
            adj.xx / det,
            adj.yx / det,
            adj.xy / det,
            adj.yy / det,
            adj.x0 / det,
            adj.y0 / det,
        ))
    }

    /// Maps a point through the matrix.
    pub fn map(self, pt: impl Into<Vector>) -> Vector {
        let pt = pt.into();
        Vector::new(
            pt.x * self.xx + pt.y * self.xy + self.x0,
            pt.x * self.yx + pt.y * self.yy + self.y0,
        )
    }

    /// Maps a direction through the matrix, ignoring the translation part.
    pub fn map_vector(self, pt: impl Into<Vector>) -> Vector {
        let pt = pt.into();
        Vector::new(
            pt.x * self.xx + pt.y * self.xy,
            pt.x * self.yx + pt.y * self.yy,
        )
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix::new(
            self.xx * rhs.xx + self.xy * rhs.yx,
            self.yx * rhs.xx + self.yy * rhs.yx,
            self.xx * rhs.xy + self.xy * rhs.yy,
            self.yx * rhs.xy + self.yy * rhs.yy,
            self.xx * rhs.x0 + self.xy * rhs.y0 + self.x0,
            self.yx * rhs.x0 + self.yy * rhs.y0 + self.y0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn identity_maps_to_self() {
        let v = Vector::new(3.5, -2.25);
        assert_eq!(Matrix::identity().map(v), v);
    }

    #[test]
    fn composition_order() {
        // scale-then-translate differs from translate-then-scale
        let scale = Matrix::scaling_uniform(2.0);
        let shift = Matrix::translation((10.0, 0.0));
        let v = Vector::new(1.0, 1.0);
        assert!(close(scale.then(shift).map(v), Vector::new(12.0, 2.0)));
        assert!(close(shift.then(scale).map(v), Vector::new(22.0, 2.0)));
        // `a * b` applies b first
        assert_eq!(scale.then(shift), shift * scale);
    }

    #[test]
    fn inverse_round_trips() {
        let m = Matrix::rotation(0.6)
            .then(Matrix::scaling((2.0, 3.0)))
            .then(Matrix::translation((-4.0, 7.5)));
        let inv = m.invert().unwrap();
        for v in [Vector::ZERO, Vector::new(1.0, 0.0), Vector::new(-3.5, 12.0)] {
            assert!(close(inv.map(m.map(v)), v));
        }
    }

    #[test]
    fn singular_matrix_cannot_invert() {
        let flat = Matrix::scaling((1.0, 0.0));
        assert_eq!(flat.invert(), Err(GeomError::SingularMatrix));
    }

    #[test]
    fn map_vector_ignores_translation() {
        let m = Matrix::translation((100.0, 100.0)).then(Matrix::scaling_uniform(3.0));
        assert!(close(m.map_vector((1.0, 2.0)), Vector::new(3.0, 6.0)));
    }

    #[test]
    fn skewing_shifts_by_factor() {
        let m = Matrix::skewing((0.5, 0.0));
        assert!(close(m.map((0.0, 2.0)), Vector::new(1.0, 2.0)));
    }
}
