//! Convex polygons: ordered coplanar vertex loops with a shared attribute.

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use crate::triangulated::Facet;
use nalgebra::Point3;

/// A convex polygon: an ordered, coplanar vertex loop wound consistently with
/// `plane.normal` (right-hand rule), plus an opaque `shared` attribute that is
/// propagated to every fragment split from it.
#[derive(Debug, Clone)]
pub struct Polygon<S: Clone> {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
    pub shared: Option<S>,
}

impl<S: Clone> Polygon<S> {
    /// Build a polygon from its vertex loop; the plane is derived from the
    /// first three vertices. Panics on fewer than three vertices.
    pub fn new(vertices: Vec<Vertex>, shared: Option<S>) -> Self {
        assert!(vertices.len() >= 3, "degenerate polygon: fewer than 3 vertices");
        let plane = Plane::from_vertices(&vertices);
        Polygon {
            vertices,
            plane,
            shared,
        }
    }

    /// Build a fragment that inherits an already-known plane, bypassing the
    /// derivation from vertices. Used by plane splitting, where recomputing
    /// the plane from cut vertices would drift numerically.
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane, shared: Option<S>) -> Self {
        assert!(vertices.len() >= 3, "degenerate polygon: fewer than 3 vertices");
        Polygon {
            vertices,
            plane,
            shared,
        }
    }

    /// Reverse the winding and flip the plane, in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Return a flipped copy.
    pub fn flipped(&self) -> Self {
        let mut poly = self.clone();
        poly.flip();
        poly
    }

    /// Fan-triangulate from vertex 0, pairing each triangle with the
    /// polygon's plane normal. A loop with fewer than three vertices
    /// (possible only via direct field surgery) produces no facets.
    pub fn triangulate(&self) -> Vec<Facet> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        let normal = self.plane.normal();
        (1..n - 1)
            .map(|i| Facet {
                normal,
                vertices: [self.vertices[0], self.vertices[i], self.vertices[i + 1]],
            })
            .collect()
    }

    /// Axis-aligned bounds of the vertex loop.
    pub fn bounding_box(&self) -> Aabb {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        for v in &self.vertices {
            mins.x = mins.x.min(v.pos.x);
            mins.y = mins.y.min(v.pos.y);
            mins.z = mins.z.min(v.pos.z);
            maxs.x = maxs.x.max(v.pos.x);
            maxs.y = maxs.y.max(v.pos.y);
            maxs.z = maxs.z.max(v.pos.z);
        }
        Aabb::new(mins, maxs)
    }
}
