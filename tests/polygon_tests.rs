mod support;

use v3d_csg::mesh::{polygon::Polygon, vertex::Vertex};

use nalgebra::{Point3, Vector3};

use crate::support::{approx_eq, make_polygon_3d};

fn unit_square() -> Polygon<()> {
    make_polygon_3d(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

#[test]
fn plane_follows_winding() {
    let square = unit_square();
    assert!(approx_eq(square.plane.normal().z, 1.0, 1e-12));
}

#[test]
#[should_panic(expected = "degenerate polygon")]
fn rejects_two_vertices() {
    let _: Polygon<()> = Polygon::new(
        vec![
            Vertex::from_pos(Point3::origin()),
            Vertex::from_pos(Point3::new(1.0, 0.0, 0.0)),
        ],
        None,
    );
}

#[test]
fn flip_reverses_winding_and_plane() {
    let square = unit_square();
    let flipped = square.flipped();

    assert_eq!(flipped.plane.normal(), -square.plane.normal());
    assert_eq!(flipped.plane.offset(), -square.plane.offset());
    let reversed: Vec<_> = square.vertices.iter().rev().cloned().collect();
    assert_eq!(flipped.vertices, reversed);

    // flip is an involution
    assert_eq!(flipped.flipped().vertices, square.vertices);
}

#[test]
fn triangulate_fans_from_first_vertex() {
    let square = unit_square();
    let facets = square.triangulate();
    assert_eq!(facets.len(), 2);

    for facet in &facets {
        assert_eq!(facet.normal, square.plane.normal());
        assert_eq!(facet.vertices[0], square.vertices[0]);
    }
    assert_eq!(facets[0].vertices[1], square.vertices[1]);
    assert_eq!(facets[0].vertices[2], square.vertices[2]);
    assert_eq!(facets[1].vertices[1], square.vertices[2]);
    assert_eq!(facets[1].vertices[2], square.vertices[3]);
}

#[test]
fn triangulate_triangle_is_single_facet() {
    let tri = make_polygon_3d(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    assert_eq!(tri.triangulate().len(), 1);
}

#[test]
fn shared_attribute_propagates_to_fragments() {
    let poly: Polygon<&str> = Polygon::new(
        vec![
            Vertex::from_pos(Point3::new(-1.0, -1.0, 0.0)),
            Vertex::from_pos(Point3::new(1.0, -1.0, 0.0)),
            Vertex::from_pos(Point3::new(1.0, 1.0, 0.0)),
            Vertex::from_pos(Point3::new(-1.0, 1.0, 0.0)),
        ],
        Some("lid"),
    );
    let plane = v3d_csg::mesh::plane::Plane::from_normal(Vector3::y(), 0.0);
    let (_, _, front, back) = plane.split_polygon(&poly);
    assert_eq!(front[0].shared, Some("lid"));
    assert_eq!(back[0].shared, Some("lid"));
}

#[test]
fn bounding_box_spans_vertices() {
    let square = unit_square();
    let bb = square.bounding_box();
    assert_eq!(bb.mins, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(bb.maxs, Point3::new(1.0, 1.0, 0.0));
}
