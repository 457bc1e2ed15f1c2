//! 2D directed line segment.

use super::Vec2;
use num_traits::Float;

/// A directed 2D line segment from `start` to `end`.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Vec2<F>,
    pub end: Vec2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Vec2<F>, end: Vec2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the unit direction, or the zero vector for a degenerate
    /// segment.
    #[inline]
    pub fn normalized_direction(self) -> Vec2<F> {
        self.direction().normalize_or_zero()
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.direction().magnitude_squared()
    }

    /// Computes the intersection point with another segment, if any.
    ///
    /// Solves the parametric 2x2 system along `self` and admits hits within
    /// a tolerance band of 1e-2 around the [0, 1] parameter range, so
    /// near-endpoint and near-parallel touches still count. Parallel and
    /// collinear segments (cross of directions below 1e-30) never intersect.
    ///
    /// The point is additionally validated against the extent of `other` by
    /// projecting onto its direction. The projection test is asymmetric
    /// (raw dot against the lower bound, normalized ratio against the
    /// upper); the decomposition heuristics depend on exactly this
    /// behavior, so it is kept as-is.
    ///
    /// # Example
    ///
    /// ```
    /// use concavity::Segment2;
    ///
    /// let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
    /// let b = Segment2::from_coords(1.0, -1.0, 1.0, 1.0);
    ///
    /// let hit = a.intersection(b).unwrap();
    /// assert_eq!(hit.x, 1.0);
    /// assert_eq!(hit.y, 0.0);
    /// ```
    pub fn intersection(self, other: Self) -> Option<Vec2<F>> {
        let tolerance = F::from(1e-2).unwrap();

        let p1 = self.start;
        let p2 = other.start;
        let d1 = self.direction();
        let d2 = other.direction();

        let denom = d1.cross(d2);
        if denom.abs() < F::from(1e-30).unwrap() {
            return None;
        }

        let t1 = (p2 - p1).cross(d2) / denom;
        if t1 < -tolerance || t1 > F::one() + tolerance {
            return None;
        }

        let point = p1 + d1 * t1;

        let extent = other.end - p2;
        let t2 = (point - p2).dot(extent);
        if t2 < -tolerance || t2 / extent.magnitude_squared() >= F::one() - tolerance {
            return None;
        }

        Some(point)
    }
}

impl<F: Float> From<(Vec2<F>, Vec2<F>)> for Segment2<F> {
    fn from((start, end): (Vec2<F>, Vec2<F>)) -> Self {
        Self::new(start, end)
    }
}
