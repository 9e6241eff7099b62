//! Error types and error handling utilities.

/// A result type returning coplanar generator errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for coplanar generator functions.
///
/// All failures are immediate and reported synchronously to the caller;
/// nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric parameter was outside its valid range.
    #[error("invalid dimension: {name} = {value}")]
    InvalidDimension {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The waypoint path cannot be decomposed into segments.
    #[error("degenerate path: {reason}")]
    DegeneratePath {
        /// Why the path is degenerate.
        reason: &'static str,
    },
    /// The fillet construction is undefined at a path corner.
    ///
    /// Raised for collinear legs (zero-angle arc) and antiparallel legs,
    /// where the tangent-circle formulas divide by `sin(0)`.
    #[error("undefined corner geometry at waypoint {vertex}: turn angle {turn} rad")]
    UndefinedCornerGeometry {
        /// Index of the interior waypoint.
        vertex: usize,
        /// The normalized turn angle at the waypoint, in radians.
        turn: f64,
    },
    /// The bend radius does not fit the path around a corner.
    #[error(
        "bend radius infeasible at waypoint {vertex}: \
         fillet requires {required} of leg length, {available} available"
    )]
    InfeasibleBendRadius {
        /// Index of the interior waypoint.
        vertex: usize,
        /// Tangent cut distance demanded by the fillet.
        required: f64,
        /// Leg length actually available.
        available: f64,
    },
}
