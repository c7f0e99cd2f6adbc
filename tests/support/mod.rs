//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use v3d_csg::{
    Facet,
    float_types::Real,
    mesh::{polygon::Polygon, vertex::Vertex},
};

use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices (white color).
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let verts = points
        .iter()
        .map(|p| Vertex::from_pos(Point3::new(p[0], p[1], p[2])))
        .collect();
    Polygon::new(verts, None)
}

/// Area of a single facet.
pub fn facet_area(facet: &Facet) -> Real {
    let [a, b, c] = &facet.vertices;
    (b.pos - a.pos).cross(&(c.pos - a.pos)).norm() / 2.0
}

/// Total surface area of a facet list.
pub fn total_area(facets: &[Facet]) -> Real {
    facets.iter().map(facet_area).sum()
}

/// Signed volume enclosed by a facet list via the divergence theorem.
/// Positive for a closed surface with outward-pointing winding.
pub fn signed_volume(facets: &[Facet]) -> Real {
    facets
        .iter()
        .map(|f| {
            let [a, b, c] = &f.vertices;
            a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0
        })
        .sum()
}

/// Sum of edge lengths of a polygon's vertex loop.
pub fn perimeter(poly: &Polygon<()>) -> Real {
    let n = poly.vertices.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            (poly.vertices[j].pos - poly.vertices[i].pos).norm()
        })
        .sum()
}
