//! Primitive solid constructors used to exercise and demonstrate the engine.

use crate::float_types::{PI, Real, TAU, segment_count};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

impl<S: Clone> Mesh<S> {
    /// Axis-aligned box centered at the origin.
    ///
    /// Faces (outward normals): bottom -Z, top +Z, front -Y, back +Y,
    /// left -X, right +X.
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let (hw, hl, hh) = (width / 2.0, length / 2.0, height / 2.0);

        // Eight corners; bit k of the index selects the max coordinate on
        // axis x (bit 0 pattern below), matching the face tables.
        let corners = [
            Point3::new(-hw, -hl, -hh), // 0
            Point3::new(hw, -hl, -hh),  // 1: +X
            Point3::new(hw, hl, -hh),   // 2: +X+Y
            Point3::new(-hw, hl, -hh),  // 3: +Y
            Point3::new(-hw, -hl, hh),  // 4: +Z
            Point3::new(hw, -hl, hh),   // 5: +X+Z
            Point3::new(hw, hl, hh),    // 6: +X+Y+Z
            Point3::new(-hw, hl, hh),   // 7: +Y+Z
        ];

        // CCW from outside
        let faces: [[usize; 4]; 6] = [
            [0, 3, 2, 1], // bottom
            [4, 5, 6, 7], // top
            [0, 1, 5, 4], // front
            [3, 7, 6, 2], // back
            [0, 4, 7, 3], // left
            [1, 2, 6, 5], // right
        ];

        let polygons = faces
            .iter()
            .map(|face| {
                let vertices = face.iter().map(|&i| Vertex::from_pos(corners[i])).collect();
                Polygon::new(vertices, metadata.clone())
            })
            .collect();

        Mesh::from_polygons(polygons, metadata)
    }

    /// Cube of side `width` centered at the origin.
    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(width, width, width, metadata)
    }

    /// UV-tessellated sphere centered at the origin.
    ///
    /// Resolution follows the curve-resolution rule: `fs` is the maximum
    /// chord length, `fa` the maximum angle per segment in degrees.
    pub fn sphere(radius: Real, fs: Real, fa: Real, metadata: Option<S>) -> Mesh<S> {
        let slices = segment_count(radius, fs, fa);
        let stacks = (slices / 2).max(2);

        let vertex = |i: usize, j: usize| {
            let theta = TAU * i as Real / slices as Real;
            let phi = PI * j as Real / stacks as Real;
            let dir = Vector3::new(
                theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            Vertex::from_pos(Point3::from(dir * radius))
        };

        let mut polygons = Vec::with_capacity(slices * stacks);
        for i in 0..slices {
            for j in 0..stacks {
                let mut vertices = Vec::with_capacity(4);
                vertices.push(vertex(i, j));
                if j > 0 {
                    vertices.push(vertex(i + 1, j));
                }
                if j < stacks - 1 {
                    vertices.push(vertex(i + 1, j + 1));
                }
                vertices.push(vertex(i, j + 1));
                polygons.push(Polygon::new(vertices, metadata.clone()));
            }
        }

        Mesh::from_polygons(polygons, metadata)
    }

    /// Return a copy with every vertex painted `color` (channels `0.0..=1.0`).
    pub fn with_color(&self, color: Vector3<Real>) -> Mesh<S> {
        let mut mesh = self.clone();
        for poly in &mut mesh.polygons {
            for v in &mut poly.vertices {
                v.color = color;
            }
        }
        mesh
    }
}
