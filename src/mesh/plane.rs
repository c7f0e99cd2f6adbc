//! Oriented infinite planes and polygon splitting.

use crate::float_types::{EPSILON, Real};
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

// Classification constants. FRONT and BACK are bit flags so that per-vertex
// classifications OR together into a polygon-level classification:
// COPLANAR is absorbed by anything, FRONT|BACK = SPANNING.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// An oriented plane in 3-space: the set of points `p` with `normal · p = w`.
///
/// Invariant: `normal` is unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Signed distance of the plane from the origin along `normal`
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a (not necessarily unit) normal and offset.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three non-collinear points.
    /// The normal direction follows the right-hand rule: `(p1-p0) × (p2-p0)`.
    pub fn from_points(p0: Point3<Real>, p1: Point3<Real>, p2: Point3<Real>) -> Self {
        let normal = (p1 - p0).cross(&(p2 - p0));
        assert!(
            normal.norm_squared() > Real::EPSILON,
            "degenerate plane: points are collinear"
        );
        let normal = normal.normalize();
        Plane {
            normal,
            w: normal.dot(&p0.coords),
        }
    }

    /// Plane of a vertex loop, derived from its first three vertices.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        assert!(vertices.len() >= 3, "a plane needs at least three vertices");
        Self::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos)
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane in place: same locus, opposite orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return a flipped copy of this plane.
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Classify a point by signed distance: [`FRONT`] if `d > EPSILON`,
    /// [`BACK`] if `d < -EPSILON`, else [`COPLANAR`].
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let d = self.normal.dot(&point.coords) - self.w;
        if d > EPSILON {
            FRONT
        } else if d < -EPSILON {
            BACK
        } else {
            COPLANAR
        }
    }

    /// Classify a whole polygon with respect to the plane: the bitwise OR of
    /// its vertex classifications, so mixed sides yield [`SPANNING`].
    pub fn classify_polygon<S: Clone>(&self, polygon: &Polygon<S>) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos))
    }

    /// Splits `polygon` by this plane, returning four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    ///
    /// Coplanar polygons are assigned to `coplanar_front` or `coplanar_back`
    /// by the sign of `polygon.plane.normal · self.normal`. Spanning polygons
    /// are cut edge-by-edge; the boundary vertices introduced on crossing
    /// edges are interpolated in position and color and shared by both
    /// fragments. A fragment is emitted only when at least three vertices
    /// survive, and it keeps the parent's `shared` attribute.
    #[allow(clippy::type_complexity)]
    pub fn split_polygon<S: Clone>(
        &self,
        polygon: &Polygon<S>,
    ) -> (
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
    ) {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                // Spanning: walk each edge (vi, vj) of the loop.
                let mut split_front: Vec<Vertex> = Vec::new();
                let mut split_back: Vec<Vertex> = Vec::new();

                for i in 0..polygon.vertices.len() {
                    let j = (i + 1) % polygon.vertices.len();
                    let type_i = types[i];
                    let type_j = types[j];
                    let vertex_i = &polygon.vertices[i];
                    let vertex_j = &polygon.vertices[j];

                    // A coplanar vertex belongs to both sides.
                    if type_i != BACK {
                        split_front.push(*vertex_i);
                    }
                    if type_i != FRONT {
                        split_back.push(*vertex_i);
                    }

                    // The edge crosses the plane: interpolate a boundary
                    // vertex and push it into both accumulators.
                    if (type_i | type_j) == SPANNING {
                        let denom = self.normal.dot(&(vertex_j.pos - vertex_i.pos));
                        if denom.abs() > EPSILON {
                            let t = (self.w - self.normal.dot(&vertex_i.pos.coords)) / denom;
                            let vertex_new = vertex_i.interpolate(vertex_j, t);
                            split_front.push(vertex_new);
                            split_back.push(vertex_new);
                        }
                    }
                }

                if split_front.len() >= 3 {
                    front.push(Polygon::with_plane(
                        split_front,
                        polygon.plane.clone(),
                        polygon.shared.clone(),
                    ));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::with_plane(
                        split_back,
                        polygon.plane.clone(),
                        polygon.shared.clone(),
                    ));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }
}
