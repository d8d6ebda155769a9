//! Error type for polygon construction.

use thiserror::Error;

/// A vertex list that cannot be used as a polygon.
///
/// This is the only failure the intersection predicate can report. Degenerate
/// but well-formed input (collinear or repeated vertices) is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPolygonError {
    /// Fewer than three vertices were supplied.
    #[error("invalid polygon: need at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// A coordinate is NaN or infinite.
    #[error("invalid polygon: vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}
