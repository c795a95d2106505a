//! # Configuration Constants
//!
//! Centralized constants for the Conway polyhedron engine. Relaxation
//! damping, convergence tolerances, default operator parameters and seed
//! geometry are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Canonicalization**: Relaxation damping and iteration defaults
//! - **Operators**: Default distances for kis, inset and extrude
//! - **Limits**: Safety bounds for rewrite passes and seed sizes
//! - **Seeds**: Parametrized seed construction constants

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// CANONICALIZATION CONSTANTS
// =============================================================================

/// Damping factor applied to every relaxation nudge.
///
/// Both the tangentify and planarize steps move vertices by this fraction of
/// the full correction per round. Larger values converge faster on simple
/// solids but oscillate on large ones.
///
/// # Example
///
/// ```rust
/// use config::constants::STABILITY_FACTOR;
///
/// let correction = 0.4;
/// let applied = STABILITY_FACTOR * correction;
/// assert!(applied < correction);
/// ```
pub const STABILITY_FACTOR: f64 = 0.1;

/// Maximum vertex displacement below which relaxation is considered converged.
///
/// # Example
///
/// ```rust
/// use config::constants::CONVERGENCE_TOLERANCE;
///
/// let max_change = 5e-9;
/// assert!(max_change < CONVERGENCE_TOLERANCE);
/// ```
pub const CONVERGENCE_TOLERANCE: f64 = 1e-8;

/// Default number of relaxation rounds for the `C` operator.
pub const DEFAULT_CANONICALIZE_ITERATIONS: usize = 1;

/// Default number of reciprocation rounds for the `K` and `A` operators.
pub const DEFAULT_RECIPROCATE_ITERATIONS: usize = 1;

// =============================================================================
// OPERATOR DEFAULTS
// =============================================================================

/// Distance of the kis apex above the face centroid, along the face normal.
pub const DEFAULT_KIS_APEX_DISTANCE: f64 = 0.1;

/// Interpolation factor pulling inset vertices toward the face centroid.
///
/// `0.0` keeps the original vertex, `1.0` collapses onto the centroid.
pub const DEFAULT_INSET_DISTANCE: f64 = 0.5;

/// Offset of the inset face along the face normal (negative sinks it).
pub const DEFAULT_INSET_POPOUT: f64 = -0.2;

/// Offset of the extruded face along the face normal.
pub const DEFAULT_EXTRUDE_DISTANCE: f64 = 0.3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of full passes over the macro rewrite table.
///
/// Every expansion rule removes its trigger letter and every reduction rule
/// shortens the string, so real notations settle in two or three passes.
pub const MAX_REWRITE_PASSES: usize = 64;

// =============================================================================
// SEED CONSTANTS
// =============================================================================

/// Smallest polygon a parametrized seed family accepts.
pub const MIN_POLYGON_SIDES: usize = 3;

/// Largest polygon a parametrized seed family accepts.
///
/// Side counts come straight from notation text. Anything larger is
/// rejected as an invalid argument before a single vertex is allocated.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_POLYGON_SIDES, MIN_POLYGON_SIDES};
///
/// assert!((MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES).contains(&1100));
/// ```
pub const MAX_POLYGON_SIDES: usize = 10_000;

/// Height of the pyramid base plane before canonicalization.
pub const PYRAMID_BASE_HEIGHT: f64 = -0.2;

/// Height of the pyramid apex before canonicalization.
pub const PYRAMID_APEX_HEIGHT: f64 = 1.0;

/// Tangent-weighted reciprocation rounds applied to freshly built pyramids.
pub const PYRAMID_RECIPROCATE_ITERATIONS: usize = 3;

/// Centroid reciprocation rounds applied to freshly built prisms and antiprisms.
pub const PRISM_RECIPROCATE_ITERATIONS: usize = 1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Resolves a notation argument where zero stands for "use the default".
///
/// Operator arguments in recipes are positional, so a caller who wants to
/// set the second parameter writes `0` for the first one.
///
/// # Example
///
/// ```rust
/// use config::constants::{or_default, DEFAULT_EXTRUDE_DISTANCE};
///
/// assert_eq!(or_default(0.0, DEFAULT_EXTRUDE_DISTANCE), DEFAULT_EXTRUDE_DISTANCE);
/// assert_eq!(or_default(0.7, DEFAULT_EXTRUDE_DISTANCE), 0.7);
/// ```
#[inline]
pub fn or_default(value: f64, default: f64) -> f64 {
    if approx_zero(value) {
        default
    } else {
        value
    }
}
