//! Reflex-vertex cone analysis and cut-candidate selection.
//!
//! At a reflex vertex the two adjacent edges bound an angular wedge (the
//! "cone") opening into the notch. Cut targets are sought among the ring
//! vertices inside that wedge and ranked so that notch-to-notch cuts win
//! over merely-nearest ones.

use super::ring::wrap;
use super::slice;
use crate::primitives::{Segment2, Vec2, Vertex};
use num_traits::Float;

/// The angular wedge at a reflex vertex, bounded by the directions from
/// its two neighbors toward the vertex.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cone<F> {
    apex: Vec2<F>,
    prev_dir: Vec2<F>,
    next_dir: Vec2<F>,
}

impl<F: Float> Cone<F> {
    /// Builds the cone at ring vertex `index` from its two neighbors.
    pub(crate) fn at_vertex(ring: &[Vertex<F>], index: usize) -> Self {
        let n = ring.len();
        let apex = ring[index].position;
        let prev = ring[wrap(index as isize - 1, n)].position;
        let next = ring[wrap(index as isize + 1, n)].position;
        Self {
            apex,
            prev_dir: apex - prev,
            next_dir: apex - next,
        }
    }

    /// The cone apex (the reflex vertex position).
    pub(crate) fn apex(&self) -> Vec2<F> {
        self.apex
    }

    /// Tests whether a position lies strictly inside the open wedge.
    ///
    /// The apex itself and points along either boundary direction are
    /// outside (both cross products are zero there).
    pub(crate) fn contains(&self, position: Vec2<F>) -> bool {
        let rel = position - self.apex;
        rel.cross(self.prev_dir) < F::zero() && rel.cross(self.next_dir) > F::zero()
    }

    /// Unit direction splitting the wedge, pointing into the notch.
    ///
    /// Zero when the boundary directions cancel exactly.
    pub(crate) fn bisector(&self) -> Vec2<F> {
        (self.prev_dir + self.next_dir).normalize_or_zero()
    }

    /// Indices of all ring vertices inside the wedge, in ring order.
    pub(crate) fn member_indices(&self, ring: &[Vertex<F>]) -> Vec<usize> {
        (0..ring.len())
            .filter(|&i| self.contains(ring[i].position))
            .collect()
    }
}

/// Approximates whether `target` is visible from `origin` across the ring
/// interior.
///
/// Counts intersections of the connecting segment against every ring edge
/// and accepts up to 3, tolerating the touches the segment's own
/// endpoint-adjacent edges produce. This is a heuristic, not an exact
/// visibility test; it can mis-admit in pathological rings.
pub(crate) fn is_visible<F: Float>(origin: Vec2<F>, target: Vec2<F>, ring: &[Vertex<F>]) -> bool {
    let crossings = slice::edge_crossings(Segment2::new(origin, target), ring);
    crossings.len() <= 3
}

/// Picks the best ring vertex to connect the reflex vertex at `origin` to,
/// out of the cone members in `candidates` (ring order).
///
/// Three-tier policy:
/// 1. a lone candidate is accepted only when visible;
/// 2. otherwise prefer a reflex candidate whose own cone contains the
///    origin and which is visible, then any visible reflex candidate;
/// 3. otherwise fall back to the nearest candidate by squared distance,
///    first encountered winning ties.
pub(crate) fn best_vertex_to_connect<F: Float>(
    candidates: &[usize],
    ring: &[Vertex<F>],
    origin: Vec2<F>,
) -> Option<usize> {
    match candidates {
        [] => None,
        [single] => {
            if is_visible(origin, ring[*single].position, ring) {
                Some(*single)
            } else {
                None
            }
        }
        _ => {
            let n = ring.len();

            // Notch-to-notch pass.
            for &index in candidates {
                let prev = ring[wrap(index as isize - 1, n)];
                let curr = ring[index];
                let next = ring[wrap(index as isize + 1, n)];

                if Vertex::turn(prev, curr, next) < F::zero()
                    && Cone::at_vertex(ring, index).contains(origin)
                    && is_visible(origin, curr.position, ring)
                {
                    return Some(index);
                }
            }

            // Any visible reflex candidate, cone membership dropped.
            for &index in candidates {
                let prev = ring[wrap(index as isize - 1, n)];
                let curr = ring[index];
                let next = ring[wrap(index as isize + 1, n)];

                if Vertex::turn(prev, curr, next) < F::zero()
                    && is_visible(origin, curr.position, ring)
                {
                    return Some(index);
                }
            }

            // Nearest by squared distance.
            let mut closest = candidates[0];
            let mut min_distance = F::infinity();
            for &index in candidates {
                let distance = (ring[index].position - origin).magnitude_squared();
                if distance < min_distance {
                    min_distance = distance;
                    closest = index;
                }
            }

            Some(closest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    /// Pentagon with a notch at (3,1) and an extra vertex splitting the
    /// bottom edge, so the notch cone contains a ring vertex.
    fn notched_pentagon() -> Vec<Vertex<f64>> {
        ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (6.0, 0.0),
            (5.0, 4.0),
            (3.0, 1.0),
            (1.0, 4.0),
        ])
    }

    #[test]
    fn test_cone_membership_l_shape() {
        let l = l_shape();
        let cone = Cone::at_vertex(&l, 3);

        // Only the opposite corner falls in the notch wedge.
        assert!(cone.contains(Vec2::new(0.0, 0.0)));
        assert!(!cone.contains(Vec2::new(2.0, 0.0)));
        assert!(!cone.contains(Vec2::new(0.0, 2.0)));
        // The apex itself is not a member.
        assert!(!cone.contains(Vec2::new(1.0, 1.0)));

        assert_eq!(cone.member_indices(&l), vec![0]);
    }

    #[test]
    fn test_cone_bisector_points_into_notch() {
        let l = l_shape();
        let cone = Cone::at_vertex(&l, 3);
        let bisector = cone.bisector();

        // Notch opens toward the origin corner.
        assert!(bisector.x < 0.0);
        assert!(bisector.y < 0.0);
        assert!((bisector.magnitude() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_visible_across_interior() {
        let l = l_shape();
        assert!(is_visible(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0), &l));
    }

    #[test]
    fn test_not_visible_through_comb_teeth() {
        // Two-slot comb; a horizontal path at y=3 crosses four tooth
        // edges, exceeding the crossing limit.
        let comb = ring(&[
            (0.0, 0.0),
            (7.0, 0.0),
            (7.0, 4.0),
            (6.0, 4.0),
            (6.0, 2.0),
            (5.0, 2.0),
            (5.0, 4.0),
            (4.0, 4.0),
            (4.0, 2.0),
            (3.0, 2.0),
            (3.0, 4.0),
            (0.0, 4.0),
        ]);

        assert!(!is_visible(Vec2::new(0.5, 3.0), Vec2::new(6.5, 3.0), &comb));
        assert!(is_visible(Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0), &comb));
    }

    #[test]
    fn test_best_vertex_single_visible() {
        let pentagon = notched_pentagon();
        let cone = Cone::at_vertex(&pentagon, 4);
        let members = cone.member_indices(&pentagon);
        assert_eq!(members, vec![1]);

        let best = best_vertex_to_connect(&members, &pentagon, cone.apex());
        assert_eq!(best, Some(1));
    }

    #[test]
    fn test_best_vertex_nearest_fallback_tie_break() {
        // Two collinear (non-reflex) bottom vertices inside the notch
        // cone at equal distance; the first in ring order wins.
        let hexagon = ring(&[
            (0.0, 0.0),
            (2.5, 0.0),
            (3.5, 0.0),
            (6.0, 0.0),
            (5.0, 4.0),
            (3.0, 1.0),
            (1.0, 4.0),
        ]);
        let cone = Cone::at_vertex(&hexagon, 5);
        let members = cone.member_indices(&hexagon);
        assert_eq!(members, vec![1, 2]);

        let best = best_vertex_to_connect(&members, &hexagon, cone.apex());
        assert_eq!(best, Some(1));
    }

    #[test]
    fn test_best_vertex_empty() {
        let l = l_shape();
        assert_eq!(
            best_vertex_to_connect(&[], &l, Vec2::new(1.0, 1.0)),
            None
        );
    }
}
