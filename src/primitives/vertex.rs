//! Polygon ring vertex.

use super::Vec2;
use num_traits::Float;

/// A vertex of a polygon ring.
///
/// Thin wrapper around a position so ring code reads in terms of vertices
/// rather than bare vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<F> {
    pub position: Vec2<F>,
}

impl<F: Float> Vertex<F> {
    /// Creates a vertex at the given position.
    #[inline]
    pub fn new(position: Vec2<F>) -> Self {
        Self { position }
    }

    /// Orientation of the turn at `curr` between three consecutive ring
    /// vertices.
    ///
    /// Returns the cross product of the incoming edge (prev -> curr) and
    /// the outgoing edge (curr -> next). Under a right-handed ring a
    /// negative result marks a reflex (non-convex) turn at `curr`.
    #[inline]
    pub fn turn(prev: Self, curr: Self, next: Self) -> F {
        let incoming = curr.position - prev.position;
        let outgoing = next.position - curr.position;
        incoming.cross(outgoing)
    }
}

impl<F: Float> From<Vec2<F>> for Vertex<F> {
    fn from(position: Vec2<F>) -> Self {
        Self::new(position)
    }
}
