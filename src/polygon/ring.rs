//! Ring-level helpers shared by the cone analysis and the slicer.
//!
//! A ring is an ordered, cyclic sequence of vertices forming a polygon
//! boundary. Index arithmetic is modular. All helpers here are pure
//! functions over vertex slices; the tree node in [`super::node`] owns the
//! storage.

use crate::primitives::{Segment2, Vec2, Vertex};
use num_traits::Float;

/// Wraps a possibly-negative index into `0..len`.
#[inline]
pub(crate) fn wrap(index: isize, len: usize) -> usize {
    let len = len as isize;
    let r = index % len;
    if r < 0 {
        (r + len) as usize
    } else {
        r as usize
    }
}

/// Returns the directed edge from vertex `i` to its successor.
#[inline]
pub(crate) fn edge<F: Float>(ring: &[Vertex<F>], i: usize) -> Segment2<F> {
    Segment2::new(ring[i].position, ring[wrap(i as isize + 1, ring.len())].position)
}

/// Accumulated winding sum over all edges of the ring.
///
/// Negative for a counter-clockwise (right-handed) ring.
fn winding_sum<F: Float>(ring: &[Vertex<F>]) -> F {
    let n = ring.len();
    let mut sum = F::zero();
    for i in 0..n {
        let next = ring[wrap(i as isize + 1, n)];
        sum = sum + ring[i].position.signed_area_step(next.position);
    }
    sum
}

/// Tests whether the ring winds counter-clockwise under the crate's sign
/// convention.
///
/// Rings with fewer than 3 vertices are never right-handed.
pub(crate) fn is_right_handed<F: Float>(ring: &[Vertex<F>]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    winding_sum(ring) < F::zero()
}

/// Signed area of the ring. Positive for a right-handed ring.
pub(crate) fn signed_area<F: Float>(ring: &[Vertex<F>]) -> F {
    if ring.len() < 3 {
        return F::zero();
    }
    -winding_sum(ring) / F::from(2.0).unwrap()
}

/// Returns a copy of the ring with reversed winding.
///
/// The first vertex stays in place and the remainder of the ring is
/// reversed, so vertex 0 of the flipped ring is vertex 0 of the input.
pub(crate) fn flipped<F: Float>(ring: &[Vertex<F>]) -> Vec<Vertex<F>> {
    let mut out = ring.to_vec();
    if out.len() > 1 {
        out[1..].reverse();
    }
    out
}

/// Scans the ring in index order for the first reflex vertex.
///
/// Returns `None` when the ring is already convex (or too small to have a
/// well-defined turn anywhere).
pub(crate) fn first_reflex_vertex<F: Float>(ring: &[Vertex<F>]) -> Option<usize> {
    let n = ring.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| {
        let prev = ring[wrap(i as isize - 1, n)];
        let next = ring[wrap(i as isize + 1, n)];
        Vertex::turn(prev, ring[i], next) < F::zero()
    })
}

/// Tests whether every turn of the ring has a consistent sign.
///
/// Near-zero (collinear) turns are ignored. Rings with fewer than 3
/// vertices count as convex.
pub(crate) fn is_convex<F: Float>(ring: &[Vertex<F>]) -> bool {
    let n = ring.len();
    if n < 3 {
        return true;
    }

    let mut sign: Option<bool> = None;
    for i in 0..n {
        let prev = ring[wrap(i as isize - 1, n)];
        let next = ring[wrap(i as isize + 1, n)];
        let turn = Vertex::turn(prev, ring[i], next);

        if turn.abs() > F::epsilon() {
            let positive = turn > F::zero();
            match sign {
                None => sign = Some(positive),
                Some(s) if s != positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Diagonal length of the ring's axis-aligned bounding box.
///
/// Used to size the artificial cut ray so it crosses the whole ring from
/// any vertex. Zero for an empty ring.
pub(crate) fn bounding_extent<F: Float>(ring: &[Vertex<F>]) -> F {
    if ring.is_empty() {
        return F::zero();
    }

    let mut min = ring[0].position;
    let mut max = ring[0].position;
    for v in &ring[1..] {
        min.x = min.x.min(v.position.x);
        min.y = min.y.min(v.position.y);
        max.x = max.x.max(v.position.x);
        max.y = max.y.max(v.position.y);
    }

    (max - min).magnitude()
}

/// Builds a ring from bare positions.
pub(crate) fn from_points<F: Float>(points: Vec<Vec2<F>>) -> Vec<Vertex<F>> {
    points.into_iter().map(Vertex::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(points: &[(f64, f64)]) -> Vec<Vertex<f64>> {
        points
            .iter()
            .map(|&(x, y)| Vertex::new(Vec2::new(x, y)))
            .collect()
    }

    fn l_shape() -> Vec<Vertex<f64>> {
        ring(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ])
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 4), 3);
        assert_eq!(wrap(0, 4), 0);
        assert_eq!(wrap(4, 4), 0);
        assert_eq!(wrap(5, 4), 1);
    }

    #[test]
    fn test_right_handed_ccw() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(is_right_handed(&square));
    }

    #[test]
    fn test_right_handed_cw() {
        let square = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(!is_right_handed(&square));
    }

    #[test]
    fn test_right_handed_degenerate() {
        let pair = ring(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(!is_right_handed(&pair));
    }

    #[test]
    fn test_signed_area() {
        let square = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_relative_eq!(signed_area(&square), 4.0, epsilon = 1e-10);

        let reversed = flipped(&square);
        assert_relative_eq!(signed_area(&reversed), -4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_flipped_keeps_first_vertex() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let rev = flipped(&square);

        assert_eq!(rev[0], square[0]);
        assert_eq!(rev[1], square[3]);
        assert_eq!(rev[2], square[2]);
        assert_eq!(rev[3], square[1]);
        assert!(!is_right_handed(&rev));
    }

    #[test]
    fn test_first_reflex_none_on_convex() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(first_reflex_vertex(&square), None);
    }

    #[test]
    fn test_first_reflex_l_shape() {
        // The inner corner (1,1) sits at index 3.
        assert_eq!(first_reflex_vertex(&l_shape()), Some(3));
    }

    #[test]
    fn test_is_convex() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(is_convex(&square));
        assert!(!is_convex(&l_shape()));
    }

    #[test]
    fn test_bounding_extent() {
        let square = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0)]);
        assert_relative_eq!(bounding_extent(&square), 5.0, epsilon = 1e-10);
        assert_eq!(bounding_extent::<f64>(&[]), 0.0);
    }
}
