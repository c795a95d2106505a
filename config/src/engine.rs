//! Runtime engine tunables.
//!
//! The engine holds no global state. Anything a caller may want to adjust per
//! evaluation travels in an [`EngineConfig`] value passed down explicitly.

use std::fmt;

use crate::constants::CONVERGENCE_TOLERANCE;

/// Immutable snapshot of engine settings threaded through a single
/// notation evaluation.
///
/// # Examples
/// ```
/// use config::engine::EngineConfig;
/// let config = EngineConfig::default();
/// assert!(config.convergence_tolerance > 0.0);
/// assert_eq!(config.face_walk_limit, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Largest vertex displacement at which relaxation stops early.
    pub convergence_tolerance: f64,
    /// Optional cap on the length of a single face walk.
    ///
    /// Every walk already stops once it has visited as many vertices as its
    /// face has links. A cap shorter than a real face truncates that face.
    pub face_walk_limit: Option<usize>,
}

impl EngineConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and walk limit.
    ///
    /// # Examples
    /// ```
    /// use config::engine::EngineConfig;
    /// let cfg = EngineConfig::new(1.0e-6, Some(200)).expect("valid config");
    /// assert_eq!(cfg.face_walk_limit, Some(200));
    /// ```
    pub fn new(convergence_tolerance: f64, face_walk_limit: Option<usize>) -> Result<Self, ConfigError> {
        if !convergence_tolerance.is_finite() || convergence_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(convergence_tolerance));
        }
        if face_walk_limit == Some(0) {
            return Err(ConfigError::InvalidWalkLimit(0));
        }
        Ok(Self {
            convergence_tolerance,
            face_walk_limit,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            convergence_tolerance: CONVERGENCE_TOLERANCE,
            face_walk_limit: None,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the face walk cap is zero.
    InvalidWalkLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "convergence tolerance must be positive: {value}")
            }
            ConfigError::InvalidWalkLimit(value) => {
                write!(f, "face walk limit must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
