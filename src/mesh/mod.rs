//! `Mesh` struct and the `CsgOps` boolean operations built on BSP trees.

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::bsp::Node;
use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;
use crate::traits::CsgOps;
use crate::triangulated::{Facet, Triangulated3D};
use nalgebra::{Matrix4, Point3};
use std::sync::OnceLock;

pub mod bsp;
pub mod plane;
pub mod polygon;
pub mod vertex;

/// A solid: an unordered polygon set assumed to bound a closed volume with
/// outward-pointing normals. Nothing validates closedness; malformed input
/// yields malformed output rather than an error.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone> {
    /// Boundary polygons of the solid.
    pub polygons: Vec<Polygon<S>>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone> Mesh<S> {
    /// Wrap an existing polygon set. An empty set is a valid (empty) solid;
    /// only BSP tree construction itself rejects empty input.
    pub fn from_polygons(polygons: Vec<Polygon<S>>, metadata: Option<S>) -> Self {
        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Split polygons into (may_touch, cannot_touch) using bounding-box tests.
    fn partition_polys(polys: &[Polygon<S>], other_bb: &Aabb) -> (Vec<Polygon<S>>, Vec<Polygon<S>>) {
        let mut maybe = Vec::new();
        let mut never = Vec::new();
        for p in polys {
            if p.bounding_box().intersects(other_bb) {
                maybe.push(p.clone());
            } else {
                never.push(p.clone());
            }
        }
        (maybe, never)
    }
}

impl<S: Clone> CsgOps for Mesh<S> {
    /// Returns a new empty Mesh.
    fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Return a new Mesh representing the union of the two Meshes.
    ///
    /// ```text
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Mesh<S>) -> Mesh<S> {
        // avoid splitting obvious non-intersecting faces
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::new();
        a.build(&a_clip);
        let mut b = Node::new();
        b.build(&b_clip);

        a.clip_to(&b);
        b.clip_to(&a);
        // the extra invert/clip/invert resolves coincident boundary faces so
        // they are not duplicated in the output
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);
        final_polys.extend(b_passthru);

        Mesh::from_polygons(final_polys, self.metadata.clone())
    }

    /// Return a new Mesh representing the difference of the two Meshes.
    ///
    /// ```text
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Mesh<S>) -> Mesh<S> {
        // avoid splitting obvious non-intersecting faces
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::new();
        a.build(&a_clip);
        let mut b = Node::new();
        b.build(&b_clip);

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);

        Mesh::from_polygons(final_polys, self.metadata.clone())
    }

    /// Return a new Mesh representing the intersection of the two Meshes.
    ///
    /// ```text
    ///     +-------+
    ///     |       |
    ///     |   a   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn intersection(&self, other: &Mesh<S>) -> Mesh<S> {
        let (a_clip, _a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, _b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());

        let mut a = Node::new();
        a.build(&a_clip);
        let mut b = Node::new();
        b.build(&b_clip);

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();

        Mesh::from_polygons(a.all_polygons(), self.metadata.clone())
    }

    /// Return a new Mesh representing space in either Mesh but not in both.
    fn xor(&self, other: &Mesh<S>) -> Mesh<S> {
        let a_sub_b = self.difference(other);
        let b_sub_a = other.difference(self);
        a_sub_b.union(&b_sub_a)
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// A mirroring matrix (negative determinant of the 3x3 block) reverses
    /// polygon winding; such polygons are flipped back so normals stay
    /// outward-consistent.
    fn transform(&self, matrix: &Matrix4<Real>) -> Mesh<S> {
        let is_mirror = matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0;
        let mut mesh = self.clone();

        for poly in &mut mesh.polygons {
            for vert in &mut poly.vertices {
                let hom_pos = matrix * vert.pos.to_homogeneous();
                vert.pos =
                    Point3::from_homogeneous(hom_pos).expect("transform produced a point at infinity");
            }
            if is_mirror {
                poly.vertices.reverse();
            }
            // keep the cached plane consistent with the new vertex positions
            poly.plane = Plane::from_vertices(&poly.vertices);
        }

        // invalidate the old cached bounding box
        mesh.bounding_box = OnceLock::new();
        mesh
    }

    /// Returns an [`Aabb`] spanning all `polygons`.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);

            for poly in &self.polygons {
                for v in &poly.vertices {
                    mins.x = mins.x.min(v.pos.x);
                    mins.y = mins.y.min(v.pos.y);
                    mins.z = mins.z.min(v.pos.z);
                    maxs.x = maxs.x.max(v.pos.x);
                    maxs.y = maxs.y.max(v.pos.y);
                    maxs.z = maxs.z.max(v.pos.z);
                }
            }

            // no polygons: a trivial AABB at the origin
            if mins.x > maxs.x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Invert this Mesh (flip inside vs. outside).
    fn inverse(&self) -> Mesh<S> {
        let mut mesh = self.clone();
        for p in &mut mesh.polygons {
            p.flip();
        }
        mesh.bounding_box = OnceLock::new();
        mesh
    }
}

impl<S: Clone> Triangulated3D for Mesh<S> {
    fn visit_facets<F>(&self, mut f: F)
    where
        F: FnMut(&Facet),
    {
        for poly in &self.polygons {
            for facet in poly.triangulate() {
                f(&facet);
            }
        }
    }
}
