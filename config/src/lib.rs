//! # Config Crate
//!
//! Centralized configuration constants for the Conway polyhedron engine.
//! All magic numbers and tunable parameters are defined here so the notation
//! front end, the operator library and the canonicalization passes agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CONVERGENCE_TOLERANCE, DEFAULT_INSET_DISTANCE};
//! use config::engine::EngineConfig;
//!
//! // Relaxation stops once the largest vertex move drops below this
//! assert!(CONVERGENCE_TOLERANCE < 1e-6);
//!
//! // Inset pulls vertices halfway toward the face centroid by default
//! assert_eq!(DEFAULT_INSET_DISTANCE, 0.5);
//!
//! // Engine tunables travel in an explicit, caller-owned value
//! let engine = EngineConfig::default();
//! assert_eq!(engine.convergence_tolerance, CONVERGENCE_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Global State**: Runtime tunables live in [`engine::EngineConfig`]
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod engine;
