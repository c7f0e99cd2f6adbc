//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree node structure and operations.

use crate::float_types::Real;
use crate::mesh::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING};
use crate::mesh::polygon::Polygon;

/// A BSP tree node, containing the polygons coplanar with its splitting plane
/// plus optional front/back subtrees.
///
/// Each tree is built privately inside a single boolean operation and never
/// shared between operations, so in-place `build`/`invert`/`clip_to` cannot
/// alias a subtree that another tree still refers to.
#[derive(Debug, Clone)]
pub struct Node<S: Clone> {
    /// Splitting plane for this node *or* `None` for a node that has not
    /// been built yet.
    pub plane: Option<Plane>,

    /// Subtree on the front side of `plane`.
    pub front: Option<Box<Node<S>>>,

    /// Subtree on the back side of `plane`.
    pub back: Option<Box<Node<S>>>,

    /// Polygons that lie *exactly* on `plane` (after the node has been built).
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Node<S> {
    /// Create a new empty BSP node.
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// Creates a new BSP tree from a non-empty polygon set.
    ///
    /// Panics on an empty set: a tree with no splitting plane has no meaning,
    /// and silently returning one corrupts every downstream clip.
    pub fn from_polygons(polygons: &[Polygon<S>]) -> Self {
        assert!(
            !polygons.is_empty(),
            "cannot build a BSP tree from an empty polygon set"
        );
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Pick a splitting plane from a sample of candidate polygons, scoring
    /// each by how many polygons it would cut and how unbalanced the
    /// front/back partition would be. A greedy "first polygon wins" choice
    /// degenerates to near-linear depth on sorted input.
    fn pick_best_splitting_plane(&self, polygons: &[Polygon<S>]) -> Plane {
        const K_SPANS: Real = 8.0;
        const K_BALANCE: Real = 1.0;

        let mut best_plane = polygons[0].plane.clone();
        let mut best_score = Real::MAX;

        let sample_size = polygons.len().min(20);
        for candidate in polygons.iter().take(sample_size) {
            let plane = &candidate.plane;
            let mut num_front = 0i32;
            let mut num_back = 0i32;
            let mut num_spanning = 0i32;

            for poly in polygons {
                match plane.classify_polygon(poly) {
                    COPLANAR => {},
                    FRONT => num_front += 1,
                    BACK => num_back += 1,
                    SPANNING => num_spanning += 1,
                    _ => num_spanning += 1,
                }
            }

            let score =
                K_SPANS * num_spanning as Real + K_BALANCE * ((num_front - num_back) as Real).abs();

            if score < best_score {
                best_score = score;
                best_plane = plane.clone();
            }
        }
        best_plane
    }

    /// Merge `polygons` into this tree, splitting them against each node's
    /// plane and creating children as needed. Iterative with an explicit
    /// stack, so tree depth cannot overflow the call stack.
    pub fn build(&mut self, polygons: &[Polygon<S>]) {
        if polygons.is_empty() {
            return;
        }

        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            if node.plane.is_none() {
                node.plane = Some(node.pick_best_splitting_plane(&polys));
            }
            let plane = node.plane.clone().unwrap();

            let mut front = Vec::with_capacity(polys.len() / 2);
            let mut back = Vec::with_capacity(polys.len() / 2);

            for polygon in &polys {
                let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                    plane.split_polygon(polygon);

                node.polygons.extend(coplanar_front);
                node.polygons.extend(coplanar_back);
                front.append(&mut front_parts);
                back.append(&mut back_parts);
            }

            if !front.is_empty() {
                let front_node = node.front.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((front_node.as_mut(), front));
            }

            if !back.is_empty() {
                let back_node = node.back.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((back_node.as_mut(), back));
            }
        }
    }

    /// Invert the tree in place: flip every polygon and plane and swap the
    /// front/back subtrees, realizing the solid/complement duality.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut Node<S>> = vec![self];
        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Return the fragments of `polygons` that lie outside the solid this
    /// tree represents.
    ///
    /// Unlike [`build`](Self::build), coplanar fragments are merged straight
    /// into the front/back buffers: clipping only cares about inside versus
    /// outside. A front buffer reaching a node with no front child survives
    /// as-is; a back buffer reaching a node with no back child is interior
    /// and is discarded.
    pub fn clip_polygons(&self, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane.as_ref() else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::with_capacity(polys.len());
            let mut back_polys = Vec::with_capacity(polys.len());

            for polygon in &polys {
                let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                    plane.split_polygon(polygon);

                front_parts.extend(coplanar_front);
                back_parts.extend(coplanar_back);

                front_polys.append(&mut front_parts);
                back_polys.append(&mut back_parts);
            }

            if let Some(front_node) = node.front.as_deref() {
                if !front_polys.is_empty() {
                    stack.push((front_node, front_polys));
                }
            } else {
                result.extend(front_polys);
            }

            if let Some(back_node) = node.back.as_deref() {
                if !back_polys.is_empty() {
                    stack.push((back_node, back_polys));
                }
            }
        }
        result
    }

    /// Remove every part of this tree's polygons that lies inside `bsp`.
    pub fn clip_to(&mut self, bsp: &Node<S>) {
        let mut stack: Vec<&mut Node<S>> = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons = bsp.clip_polygons(&node.polygons);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collect all polygons in this tree, iteratively.
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            result.extend_from_slice(&node.polygons);
            stack.extend(
                [&node.front, &node.back]
                    .iter()
                    .filter_map(|child| child.as_deref()),
            );
        }
        result
    }
}
