//! Ring splitting: the cut machinery behind decomposition.
//!
//! Both entry points produce two new rings sharing exactly the two cut
//! points and are pure functions; the tree node decides what to do with
//! the pieces. A cut that cannot be completed reports `None` instead of
//! failing.

use super::ring::edge;
use crate::primitives::{Segment2, Vec2, Vertex};
use num_traits::Float;

/// A point where a cut segment crosses a ring edge.
///
/// `edge` is the ring index of the edge's start vertex.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeCrossing<F> {
    pub edge: usize,
    pub point: Vec2<F>,
}

/// Intersects `cut` against every ring edge and returns the crossings in
/// ring-edge order.
///
/// At most one crossing is recorded per edge. The tolerant intersection
/// test admits touches at an edge's start vertex but not its end, so a cut
/// through an existing vertex registers on exactly one of the two edges
/// sharing it.
pub(crate) fn edge_crossings<F: Float>(
    cut: Segment2<F>,
    ring: &[Vertex<F>],
) -> Vec<EdgeCrossing<F>> {
    (0..ring.len())
        .filter_map(|i| {
            cut.intersection(edge(ring, i))
                .map(|point| EdgeCrossing { edge: i, point })
        })
        .collect()
}

/// Reduces crossings to the `keep` nearest to `origin` by squared
/// distance, then restores ring-edge order on the survivors.
///
/// Ties keep the earlier edge. Input already in edge order passes through
/// unchanged when nothing needs culling.
pub(crate) fn cull_to_nearest<F: Float>(
    mut crossings: Vec<EdgeCrossing<F>>,
    origin: Vec2<F>,
    keep: usize,
) -> Vec<EdgeCrossing<F>> {
    if crossings.len() <= keep {
        return crossings;
    }

    crossings.sort_by(|a, b| {
        let da = (a.point - origin).magnitude_squared();
        let db = (b.point - origin).magnitude_squared();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
    crossings.truncate(keep);
    crossings.sort_by_key(|c| c.edge);

    crossings
}

/// Splits a ring along the chord between two vertex indices.
///
/// Returns the inclusive sub-range ring and the remainder ring, with both
/// cut vertices duplicated into each, so the vertex counts sum to n + 2.
/// `None` when the indices are equal, out of range, or adjacent on the
/// ring (including the modular wrap pair), or when the ring is too small
/// to split.
pub(crate) fn split_at_indices<F: Float>(
    ring: &[Vertex<F>],
    first: usize,
    second: usize,
) -> Option<(Vec<Vertex<F>>, Vec<Vertex<F>>)> {
    let n = ring.len();
    if n < 4 || first >= n || second >= n {
        return None;
    }

    let lo = first.min(second);
    let hi = first.max(second);
    if lo == hi || hi - lo == 1 || (lo == 0 && hi == n - 1) {
        return None;
    }

    let mut inner = Vec::with_capacity(hi - lo + 1);
    let mut outer = Vec::with_capacity(n - (hi - lo) + 1);

    for (i, &vertex) in ring.iter().enumerate() {
        if i == lo || i == hi {
            inner.push(vertex);
            outer.push(vertex);
        } else if i > lo && i < hi {
            inner.push(vertex);
        } else {
            outer.push(vertex);
        }
    }

    Some((inner, outer))
}

/// Splits a ring along an arbitrary cut segment.
///
/// Collects all edge crossings, keeps the two nearest to the segment
/// start, and walks the ring once assigning each vertex to one side by
/// its ordinal position between the two cut edges. A vertex lying within
/// the perpendicular tolerance of the cut line whose edge carries a
/// crossing is dropped in favor of the crossing point, which is inserted
/// into both rings. `None` when fewer than two crossings survive.
pub(crate) fn split_along_segment<F: Float>(
    ring: &[Vertex<F>],
    cut: Segment2<F>,
) -> Option<(Vec<Vertex<F>>, Vec<Vertex<F>>)> {
    if ring.len() < 3 {
        return None;
    }

    let crossings = cull_to_nearest(edge_crossings(cut, ring), cut.start, 2);
    if crossings.len() < 2 {
        return None;
    }

    let tolerance = F::from(1e-5).unwrap();
    let direction = cut.direction();
    let (cut_a, cut_b) = (crossings[0].edge, crossings[1].edge);

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (i, &vertex) in ring.iter().enumerate() {
        let crossing = crossings.iter().find(|c| c.edge == i);
        let perp_distance = (vertex.position - cut.start).cross(direction).abs();

        if perp_distance > tolerance || crossing.is_none() {
            if i > cut_a && i <= cut_b {
                left.push(vertex);
            } else {
                right.push(vertex);
            }
        }

        if let Some(c) = crossing {
            left.push(Vertex::new(c.point));
            right.push(Vertex::new(c.point));
        }
    }

    Some((left, right))
}
