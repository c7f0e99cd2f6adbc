//! A **Constructive Solid Geometry (CSG)** engine built around Boolean
//! operations (*union*, *difference*, *intersection*, *xor*) on sets of
//! convex polygons stored in [BSP](mesh::bsp) trees, with byte-exact
//! STL and PLY [exporters](io).
//!
//! The pipeline: polygon sets ([`Mesh`]) are compiled into BSP trees, the
//! Boolean operators clip and recombine them, the result fan-triangulates
//! into [`Facet`](triangulated::Facet)s, and the exporters serialize those
//! facets (with insertion-ordered vertex deduplication for the indexed
//! formats).
//!
//! The engine does not validate that input solids are closed or manifold and
//! does not repair degenerate geometry; for closed, consistently-oriented,
//! non-self-intersecting inputs the output bounds the correct solid.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all)]

pub mod aabb;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod shapes;
pub mod traits;
pub mod triangulated;

pub use mesh::Mesh;
pub use mesh::vertex::Vertex;
pub use traits::CsgOps;
pub use triangulated::{Facet, Triangulated3D, VertexMap};
