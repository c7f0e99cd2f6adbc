//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A vertex of a polygon, holding position and color.
///
/// Color channels live in `0.0..=1.0` and are scaled to `0..=255` at export
/// time. Facet normals come from polygon planes, not from vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub color: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`   – the position in model space
    /// * `color` – RGB in `0.0..=1.0`, **copied verbatim**
    pub const fn new(pos: Point3<Real>, color: Vector3<Real>) -> Self {
        Vertex { pos, color }
    }

    /// A vertex with the default (white) color.
    pub fn from_pos(pos: Point3<Real>) -> Self {
        Vertex {
            pos,
            color: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Colors are linearly interpolated as well, so a boundary vertex created
    /// by a plane split inherits a blend of its edge's endpoint colors.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_color = self.color + (other.color - self.color) * t;
        Vertex::new(new_pos, new_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_midpoint() {
        let a = Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
        let b = Vertex::new(Point3::new(2.0, 4.0, 6.0), Vector3::new(1.0, 1.0, 1.0));
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.pos, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(mid.color, Vector3::new(0.5, 0.5, 0.5));
    }
}
