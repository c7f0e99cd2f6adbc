mod support;

use v3d_csg::{
    float_types::EPSILON,
    mesh::{
        plane::{BACK, COPLANAR, FRONT, Plane},
        polygon::Polygon,
        vertex::Vertex,
    },
};

use nalgebra::{Point3, Vector3};

use crate::support::{approx_eq, make_polygon_3d, perimeter};

#[test]
fn flip() {
    let mut plane = Plane::from_normal(Vector3::y(), 2.0);
    plane.flip();
    assert_eq!(plane.normal(), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(plane.offset(), -2.0);
}

#[test]
fn from_points_right_hand_rule() {
    let plane = Plane::from_points(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    assert!(approx_eq(plane.normal().z, 1.0, EPSILON));
    assert!(approx_eq(plane.offset(), 0.0, EPSILON));
}

#[test]
fn orient_point() {
    let plane = Plane::from_normal(Vector3::z(), 1.0);
    assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, 2.0)), FRONT);
    assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, 0.0)), BACK);
    assert_eq!(plane.orient_point(&Point3::new(5.0, -3.0, 1.0)), COPLANAR);
    // Within tolerance counts as coplanar
    assert_eq!(
        plane.orient_point(&Point3::new(0.0, 0.0, 1.0 + EPSILON / 2.0)),
        COPLANAR
    );
}

#[test]
fn split_polygon_spanning() {
    // A plane that splits the XY plane at y=0
    let plane = Plane::from_normal(Vector3::y(), 0.0);

    // A square crossing y=0: from (-1,-1) to (1,1)
    let poly: Polygon<()> = Polygon::new(
        vec![
            Vertex::from_pos(Point3::new(-1.0, -1.0, 0.0)),
            Vertex::from_pos(Point3::new(1.0, -1.0, 0.0)),
            Vertex::from_pos(Point3::new(1.0, 1.0, 0.0)),
            Vertex::from_pos(Point3::new(-1.0, 1.0, 0.0)),
        ],
        None,
    );

    let (cf, cb, f, b) = plane.split_polygon(&poly);
    assert_eq!(cf.len(), 0);
    assert_eq!(cb.len(), 0);
    assert_eq!(f.len(), 1);
    assert_eq!(b.len(), 1);

    // All front vertices at y >= 0, all back vertices at y <= 0
    for v in &f[0].vertices {
        assert!(v.pos.y >= -EPSILON);
    }
    for v in &b[0].vertices {
        assert!(v.pos.y <= EPSILON);
    }

    // Fragments keep the parent's plane
    assert_eq!(f[0].plane, poly.plane);
    assert_eq!(b[0].plane, poly.plane);
}

#[test]
fn split_polygon_coplanar_orientation() {
    let plane = Plane::from_normal(Vector3::z(), 0.0);
    let square = make_polygon_3d(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);

    // Same winding as the plane normal: coplanar-front
    let (cf, cb, f, b) = plane.split_polygon(&square);
    assert_eq!((cf.len(), cb.len(), f.len(), b.len()), (1, 0, 0, 0));

    // Opposite winding: coplanar-back
    let (cf, cb, f, b) = plane.split_polygon(&square.flipped());
    assert_eq!((cf.len(), cb.len(), f.len(), b.len()), (0, 1, 0, 0));
}

#[test]
fn split_polygon_one_sided() {
    let plane = Plane::from_normal(Vector3::z(), 0.0);
    let above = make_polygon_3d(&[
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
    ]);
    let (cf, cb, f, b) = plane.split_polygon(&above);
    assert_eq!((cf.len(), cb.len(), f.len(), b.len()), (0, 0, 1, 0));

    let below = make_polygon_3d(&[
        [0.0, 0.0, -1.0],
        [1.0, 0.0, -1.0],
        [0.0, 1.0, -1.0],
    ]);
    let (cf, cb, f, b) = plane.split_polygon(&below);
    assert_eq!((cf.len(), cb.len(), f.len(), b.len()), (0, 0, 0, 1));
}

/// Cutting a triangle through its strict interior yields one triangle and one
/// quadrilateral, and the fragments' perimeters sum to the original perimeter
/// plus twice the cut-segment length.
#[test]
fn split_triangle_interior_cut() {
    let tri = make_polygon_3d(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    // Vertical plane x = 0.3, strictly inside the triangle
    let plane = Plane::from_normal(Vector3::x(), 0.3);

    let (cf, cb, f, b) = plane.split_polygon(&tri);
    assert_eq!(cf.len() + cb.len(), 0);
    assert_eq!(f.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(f[0].vertices.len(), 3); // the tip beyond x=0.3
    assert_eq!(b[0].vertices.len(), 4); // the quad at the base

    // Cut segment: x = 0.3 from y=0 to the hypotenuse y = 1 - x = 0.7
    let cut_len = 0.7;
    let original = perimeter(&tri);
    let fragments = perimeter(&f[0]) + perimeter(&b[0]);
    assert!(approx_eq(fragments, original + 2.0 * cut_len, 1e-9));
}

#[test]
fn split_interpolates_color() {
    let red = Vector3::new(1.0, 0.0, 0.0);
    let blue = Vector3::new(0.0, 0.0, 1.0);
    let poly: Polygon<()> = Polygon::new(
        vec![
            Vertex::new(Point3::new(0.0, -1.0, 0.0), red),
            Vertex::new(Point3::new(1.0, -1.0, 0.0), red),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), blue),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), blue),
        ],
        None,
    );
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let (_, _, f, b) = plane.split_polygon(&poly);

    // Boundary vertices sit halfway along the red->blue edges
    let purple = Vector3::new(0.5, 0.0, 0.5);
    for frag in f.iter().chain(b.iter()) {
        for v in &frag.vertices {
            if approx_eq(v.pos.y, 0.0, EPSILON) {
                assert!((v.color - purple).norm() < 1e-9);
            }
        }
    }
}
