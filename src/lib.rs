//! concavity - Recursive convex decomposition of concave polygons
//!
//! Partitions an arbitrary simple polygon (possibly non-convex, possibly
//! self-touching at vertices) into a binary tree of convex sub-polygons by
//! repeatedly locating a reflex vertex and cutting the ring with a
//! connecting segment. The cut target is chosen by cone-based visibility
//! reasoning; when no ring vertex qualifies, an artificial ray through the
//! notch opens it against the nearest boundary edge.
//!
//! The decomposition is greedy, not minimal, and inputs are not validated:
//! a self-intersecting ring produces an unspecified (but non-panicking)
//! result. Every public operation is total; degenerate cases degrade to
//! no-ops or sentinel values rather than errors.
//!
//! # Example
//!
//! ```
//! use concavity::{ConcavePolygon, Vec2};
//!
//! let mut polygon: ConcavePolygon<f64> = ConcavePolygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(2.0, 0.0),
//!     Vec2::new(2.0, 1.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(1.0, 2.0),
//!     Vec2::new(0.0, 2.0),
//! ]);
//!
//! polygon.decompose();
//!
//! assert!(polygon.leaves().iter().all(|leaf| leaf.is_convex()));
//! ```

pub mod polygon;
pub mod primitives;

pub use polygon::ConcavePolygon;
pub use primitives::{Segment2, Vec2, Vertex};
