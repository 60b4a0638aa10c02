//! Errors produced by the curve model.

use thiserror::Error;

/// An error evaluating a Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The curve has no control points, so there is nothing to evaluate.
    #[error("a Bézier curve needs at least one control point")]
    EmptyControlPoints,
    /// A sampling resolution of zero segments was requested.
    #[error("curve sampling needs at least one segment")]
    ZeroSegments,
}
