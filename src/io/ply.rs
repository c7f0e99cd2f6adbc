//! ASCII PLY writer with indexed, deduplicated, colored vertices.

use crate::float_types::Real;
use crate::io::format_real;
use crate::triangulated::{Facet, Triangulated3D, VertexMap};
use std::io::{self, Write};

fn channel_to_u8(channel: Real) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Write `facets` as **ASCII PLY**: a header declaring float `x y z` and
/// uchar `red green blue` vertex properties plus an int-list face element,
/// then the deduplicated vertices in first-seen order, then one index line
/// per facet.
pub fn write_ply<W: Write>(facets: &[Facet], sink: &mut W) -> io::Result<()> {
    let map = VertexMap::from_facets(facets);

    writeln!(sink, "ply")?;
    writeln!(sink, "format ascii 1.0")?;
    writeln!(sink, "element vertex {}", map.len())?;
    writeln!(sink, "property float x")?;
    writeln!(sink, "property float y")?;
    writeln!(sink, "property float z")?;
    writeln!(sink, "property uchar red")?;
    writeln!(sink, "property uchar green")?;
    writeln!(sink, "property uchar blue")?;
    writeln!(sink, "element face {}", facets.len())?;
    writeln!(sink, "property list uchar int vertex_index")?;
    writeln!(sink, "end_header")?;

    for vertex in map.vertices() {
        writeln!(
            sink,
            "{} {} {} {} {} {}",
            format_real(vertex.pos.x),
            format_real(vertex.pos.y),
            format_real(vertex.pos.z),
            channel_to_u8(vertex.color.x),
            channel_to_u8(vertex.color.y),
            channel_to_u8(vertex.color.z),
        )?;
    }

    for facet in facets {
        writeln!(
            sink,
            "3 {} {} {}",
            map.index_of(&facet.vertices[0]),
            map.index_of(&facet.vertices[1]),
            map.index_of(&facet.vertices[2]),
        )?;
    }
    sink.flush()
}

/// Render a triangulated shape as an ASCII PLY string.
pub fn to_ply<T: Triangulated3D + ?Sized>(shape: &T) -> String {
    let facets = shape.to_facets();
    let mut bytes = Vec::new();
    // writing to a Vec cannot fail
    write_ply(&facets, &mut bytes).expect("in-memory write failed");
    String::from_utf8(bytes).expect("PLY output is ASCII")
}

impl<S: Clone> crate::mesh::Mesh<S> {
    /// Convert this Mesh to an ASCII PLY string.
    pub fn to_ply(&self) -> String {
        self::to_ply(self)
    }
}
