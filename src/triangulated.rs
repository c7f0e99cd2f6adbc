//! Facets, triangle visitation, and deterministic vertex deduplication.
//!
//! Facets are ephemeral: they exist only on the way out to an exporter and
//! are never stored back into a mesh or BSP tree.

use crate::float_types::Real;
use crate::mesh::vertex::Vertex;
use std::collections::HashMap;

/// One output triangle: three vertices and the owning polygon's plane normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: nalgebra::Vector3<Real>,
    pub vertices: [Vertex; 3],
}

/// Anything that can be walked as a triangle soup.
pub trait Triangulated3D {
    /// Call `f` once per facet of the triangulated surface.
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(&Facet);

    /// Collect every facet into a flat list.
    fn to_facets(&self) -> Vec<Facet> {
        let mut facets = Vec::new();
        self.visit_facets(|facet| facets.push(*facet));
        facets
    }
}

impl Triangulated3D for [Facet] {
    fn visit_facets<F>(&self, mut f: F)
    where
        F: FnMut(&Facet),
    {
        for facet in self {
            f(facet);
        }
    }

    fn to_facets(&self) -> Vec<Facet> {
        self.to_vec()
    }
}

/// Exact-bits key for a `(position, color)` pair. Keying on bit patterns
/// rather than on `Real` sidesteps NaN/-0.0 equality traps and keeps lookup
/// exact: two vertices merge only when they are byte-identical. Near-duplicate
/// vertices from repeated splits are deliberately not merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    pos: [u64; 3],
    color: [u64; 3],
}

impl VertexKey {
    fn of(v: &Vertex) -> Self {
        VertexKey {
            pos: [v.pos.x.to_bits(), v.pos.y.to_bits(), v.pos.z.to_bits()],
            color: [
                v.color.x.to_bits(),
                v.color.y.to_bits(),
                v.color.z.to_bits(),
            ],
        }
    }
}

/// Insertion-ordered map from distinct vertices to dense indices.
///
/// First-seen-wins ordering makes indexed export byte-for-byte deterministic
/// across runs, which a bare hash-map iteration would not be.
#[derive(Debug, Default)]
pub struct VertexMap {
    order: Vec<Vertex>,
    index: HashMap<VertexKey, usize>,
}

impl VertexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from every corner of every facet, in facet order.
    pub fn from_facets(facets: &[Facet]) -> Self {
        let mut map = Self::new();
        for facet in facets {
            for vertex in &facet.vertices {
                map.insert(vertex);
            }
        }
        map
    }

    /// Intern `vertex`, returning its stable index.
    pub fn insert(&mut self, vertex: &Vertex) -> usize {
        let key = VertexKey::of(vertex);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.order.len();
        self.order.push(*vertex);
        self.index.insert(key, idx);
        idx
    }

    /// Index previously assigned to `vertex`.
    ///
    /// Panics if the vertex was never inserted; exporters always build the
    /// map from the same facet list they then index into.
    pub fn index_of(&self, vertex: &Vertex) -> usize {
        self.index[&VertexKey::of(vertex)]
    }

    /// Distinct vertices in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
