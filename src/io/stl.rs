//! STL writers: binary (byte-exact `84 + 50·N` layout) and ASCII.

use crate::io::format_real;
use crate::triangulated::{Facet, Triangulated3D};
use std::io::{self, Write};

/// Solid name emitted by the ASCII writer.
const SOLID_NAME: &str = "v3d.csg";

/// Write `facets` as **binary STL**: an 80-byte blank header, a little-endian
/// `u32` facet count, then one 50-byte record per facet (normal, three
/// vertices, zero attribute word). Color is not representable in this layout
/// and is dropped.
pub fn write_stl_binary<W: Write>(facets: &[Facet], sink: &mut W) -> io::Result<()> {
    sink.write_all(&[0u8; 80])?;
    sink.write_all(&(facets.len() as u32).to_le_bytes())?;

    for facet in facets {
        for component in [facet.normal.x, facet.normal.y, facet.normal.z] {
            sink.write_all(&(component as f32).to_le_bytes())?;
        }
        for vertex in &facet.vertices {
            for component in [vertex.pos.x, vertex.pos.y, vertex.pos.z] {
                sink.write_all(&(component as f32).to_le_bytes())?;
            }
        }
        sink.write_all(&0u16.to_le_bytes())?;
    }
    sink.flush()
}

/// Write `facets` as **ASCII STL** using the shared numeric formatting rule.
pub fn write_stl_ascii<W: Write>(facets: &[Facet], sink: &mut W) -> io::Result<()> {
    sink.write_all(to_stl_ascii(facets).as_bytes())
}

/// Render a triangulated shape as an ASCII STL string.
pub fn to_stl_ascii<T: Triangulated3D + ?Sized>(shape: &T) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {SOLID_NAME}\n"));

    shape.visit_facets(|facet| {
        let n = facet.normal;
        out.push_str(&format!(
            "  facet normal {} {} {}\n",
            format_real(n.x),
            format_real(n.y),
            format_real(n.z)
        ));
        out.push_str("    outer loop\n");
        for v in &facet.vertices {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                format_real(v.pos.x),
                format_real(v.pos.y),
                format_real(v.pos.z)
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {SOLID_NAME}\n"));
    out
}

/// Render a triangulated shape as a binary STL byte vector.
pub fn to_stl_binary<T: Triangulated3D + ?Sized>(shape: &T) -> Vec<u8> {
    let facets = shape.to_facets();
    let mut bytes = Vec::with_capacity(84 + 50 * facets.len());
    // writing to a Vec cannot fail
    write_stl_binary(&facets, &mut bytes).expect("in-memory write failed");
    bytes
}

impl<S: Clone> crate::mesh::Mesh<S> {
    /// Convert this Mesh to an ASCII STL string.
    pub fn to_stl_ascii(&self) -> String {
        self::to_stl_ascii(self)
    }

    /// Convert this Mesh to a binary STL byte vector.
    pub fn to_stl_binary(&self) -> Vec<u8> {
        self::to_stl_binary(self)
    }
}
