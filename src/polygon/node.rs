//! The recursive decomposition tree.
//!
//! A [`ConcavePolygon`] is one node of a binary tree: a vertex ring plus
//! either nothing (leaf) or exactly two child polygons produced by a cut.
//! Decomposition repeatedly finds a reflex vertex, derives a cut through
//! the cone at that vertex, and recurses into the two halves until every
//! leaf is convex.

use super::cone::{best_vertex_to_connect, Cone};
use super::ring;
use super::slice;
use crate::primitives::{Segment2, Vec2, Vertex};
use num_traits::Float;

/// Processing state of a node.
///
/// A leaf is either not yet examined or known convex; a split node holds
/// exactly two exclusively-owned children. The tree is strictly binary
/// once cutting begins.
#[derive(Debug, Clone, PartialEq)]
enum State<F> {
    Unprocessed,
    Convex,
    Split(Box<ConcavePolygon<F>>, Box<ConcavePolygon<F>>),
}

/// A polygon node in a recursive convex decomposition tree.
///
/// Construction normalizes winding: a left-handed input ring is flipped
/// once so every downstream orientation test shares one sign convention
/// (reflex turns read negative). The ring itself is never mutated after
/// that, apart from the explicit [`flip`](Self::flip) utility; cutting
/// only populates children.
///
/// Every operation is total. Out-of-range queries return sentinels and
/// geometric degeneracies make the corresponding operation a no-op, so
/// callers test for "no children produced" rather than catching errors.
///
/// # Example
///
/// ```
/// use concavity::{ConcavePolygon, Vec2};
///
/// // L-shaped hexagon with one reflex corner at (1,1).
/// let mut polygon: ConcavePolygon<f64> = ConcavePolygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 0.0),
///     Vec2::new(2.0, 1.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(1.0, 2.0),
///     Vec2::new(0.0, 2.0),
/// ]);
///
/// polygon.decompose();
///
/// let leaves = polygon.leaves();
/// assert_eq!(leaves.len(), 2);
/// assert!(leaves.iter().all(|leaf| leaf.is_convex()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConcavePolygon<F> {
    vertices: Vec<Vertex<F>>,
    state: State<F>,
}

impl<F: Float> ConcavePolygon<F> {
    /// Creates a polygon node from an ordered sequence of points.
    ///
    /// Winding is normalized here; the input may be given in either
    /// direction.
    pub fn new(points: Vec<Vec2<F>>) -> Self {
        Self::from_ring(ring::from_points(points))
    }

    /// Builds a node from an already-assembled vertex ring, normalizing
    /// winding. Children created by the slicer come through here too, so
    /// every ring in the tree shares the sign convention.
    fn from_ring(vertices: Vec<Vertex<F>>) -> Self {
        let vertices = if vertices.len() > 2 && !ring::is_right_handed(&vertices) {
            ring::flipped(&vertices)
        } else {
            vertices
        };
        Self {
            vertices,
            state: State::Unprocessed,
        }
    }

    /// Fully decomposes this node into convex leaves.
    ///
    /// No-op on a node that already has children; decomposition is
    /// idempotent. Rings of three or fewer vertices are terminal.
    pub fn decompose(&mut self) {
        match self.state {
            State::Split(..) | State::Convex => return,
            State::Unprocessed => {}
        }

        if self.vertices.len() <= 3 {
            self.state = State::Convex;
            return;
        }

        let reflex = match ring::first_reflex_vertex(&self.vertices) {
            Some(index) => index,
            None => {
                self.state = State::Convex;
                return;
            }
        };

        let cone = Cone::at_vertex(&self.vertices, reflex);
        let apex = cone.apex();

        let candidates = cone.member_indices(&self.vertices);
        let best = best_vertex_to_connect(&candidates, &self.vertices, apex);

        let cut = match best {
            Some(index) => Segment2::new(apex, self.vertices[index].position),
            None => {
                // No usable candidate: open the notch with a ray along
                // the cone bisector, clipped to the ring's extent so the
                // slicer finds the nearest actual boundary crossings.
                let reach = ring::bounding_extent(&self.vertices) * F::from(4.0).unwrap();
                Segment2::new(apex, apex + cone.bisector() * reach)
            }
        };

        self.slice(cut);

        if let State::Split(a, b) = &mut self.state {
            a.decompose();
            b.decompose();
        }
        // An abandoned cut leaves the node unprocessed with no children.
    }

    /// Cuts this node along the chord between two vertex indices of its
    /// current ring.
    ///
    /// No-op when the node already has children or the indices are equal,
    /// adjacent on the ring, or out of range.
    pub fn slice_at_indices(&mut self, first: usize, second: usize) {
        if matches!(self.state, State::Split(..)) {
            return;
        }
        if let Some((inner, outer)) = slice::split_at_indices(&self.vertices, first, second) {
            self.state = State::Split(
                Box::new(Self::from_ring(inner)),
                Box::new(Self::from_ring(outer)),
            );
        }
    }

    /// Cuts this node along an arbitrary segment.
    ///
    /// A node with children forwards the cut to both of them, so one
    /// segment can carve through an already-decomposed tree. A leaf whose
    /// ring the segment crosses fewer than two times is left unchanged.
    pub fn slice(&mut self, cut: Segment2<F>) {
        if let State::Split(a, b) = &mut self.state {
            a.slice(cut);
            b.slice(cut);
            return;
        }
        if let Some((left, right)) = slice::split_along_segment(&self.vertices, cut) {
            self.state = State::Split(
                Box::new(Self::from_ring(left)),
                Box::new(Self::from_ring(right)),
            );
        }
    }

    /// Discards this node's whole subtree, returning it to an unsplit
    /// leaf holding its original ring.
    pub fn reset(&mut self) {
        self.state = State::Unprocessed;
    }

    /// Reverses the ring's vertex order in place.
    ///
    /// Experimentation utility, independent of decomposition; existing
    /// children are unaffected.
    pub fn flip(&mut self) {
        self.vertices = ring::flipped(&self.vertices);
    }

    /// The node's vertex ring, in order.
    pub fn vertices(&self) -> &[Vertex<F>] {
        &self.vertices
    }

    /// Number of immediate children: 0 for a leaf, 2 for a split node.
    pub fn child_count(&self) -> usize {
        match self.state {
            State::Split(..) => 2,
            _ => 0,
        }
    }

    /// A child by position (0 or 1).
    ///
    /// Out-of-range positions and childless nodes return the node itself.
    pub fn child(&self, index: usize) -> &Self {
        match (&self.state, index) {
            (State::Split(a, _), 0) => a,
            (State::Split(_, b), 1) => b,
            _ => self,
        }
    }

    /// All leaf nodes under this node, first child before second.
    pub fn leaves(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Self>) {
        match &self.state {
            State::Split(a, b) => {
                a.collect_leaves(out);
                b.collect_leaves(out);
            }
            _ => out.push(self),
        }
    }

    /// Number of ring vertices.
    pub fn point_count(&self) -> usize {
        self.vertices.len()
    }

    /// A single vertex position by ring index.
    ///
    /// Out-of-range indices return the zero vector.
    pub fn point(&self, index: usize) -> Vec2<F> {
        self.vertices
            .get(index)
            .map(|v| v.position)
            .unwrap_or_else(Vec2::zero)
    }

    /// Whether the ring winds counter-clockwise under the crate's sign
    /// convention. True for any ring of three or more vertices after
    /// construction.
    pub fn is_right_handed(&self) -> bool {
        ring::is_right_handed(&self.vertices)
    }

    /// Signed area of the ring; positive for a right-handed ring.
    pub fn signed_area(&self) -> F {
        ring::signed_area(&self.vertices)
    }

    /// Absolute area of the ring.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Whether every turn of the ring has a consistent sign.
    pub fn is_convex(&self) -> bool {
        ring::is_convex(&self.vertices)
    }
}

impl<F: Float> From<Vec<Vec2<F>>> for ConcavePolygon<F> {
    fn from(points: Vec<Vec2<F>>) -> Self {
        Self::new(points)
    }
}
