//! # Operators
//!
//! Conway retiling operators plus the canonicalizing and triangulating
//! passes that can appear in a recipe. Each one maps a polyhedron to a new
//! polyhedron and leaves its input untouched.
//!
//! | Code | Operator | Arguments |
//! |------|----------|-----------|
//! | `d` | dual | |
//! | `k` | kis | degree, apex distance |
//! | `a` | ambo | |
//! | `g` | gyro | |
//! | `p` | propellor | |
//! | `r` | reflect | |
//! | `n` | inset | degree, inset distance, pop-out |
//! | `x` | extrude | degree, distance |
//! | `l` | stella | |
//! | `z` | triangulate | |
//! | `K` | tangent-weighted reciprocation | iterations |
//! | `C` | relaxation | iterations |
//! | `A` | centroid reciprocation | iterations |
//!
//! A degree of 0 (or no degree) selects every face, and a zero distance or
//! iteration count falls back to the default.

pub mod ambo;
pub mod dual;
pub mod gyro;
pub mod inset;
pub mod kis;
pub mod propellor;
pub mod reflect;
pub mod stella;

pub use ambo::ambo;
pub use dual::dual;
pub use gyro::gyro;
pub use inset::{extrude, inset};
pub use kis::kis;
pub use propellor::propellor;
pub use reflect::reflect;
pub use stella::stella;

use config::constants::{
    or_default, DEFAULT_CANONICALIZE_ITERATIONS, DEFAULT_EXTRUDE_DISTANCE, DEFAULT_INSET_DISTANCE,
    DEFAULT_INSET_POPOUT, DEFAULT_KIS_APEX_DISTANCE, DEFAULT_RECIPROCATE_ITERATIONS,
};
use config::engine::EngineConfig;

use crate::canonical::{adjust_xyz, canonical_xyz, canonicalize};
use crate::error::{ConwayError, ConwayResult};
use crate::polyhedron::Polyhedron;
use crate::triangulate::triangulate;

// =============================================================================
// OPERATOR TABLE
// =============================================================================

/// Every operator a recipe can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `d`: swap faces and vertices.
    Dual,
    /// `k`: raise a pyramid on each face.
    Kis,
    /// `a`: truncate vertices down to edge midpoints.
    Ambo,
    /// `g`: split each face into pentagons around its center.
    Gyro,
    /// `p`: add a twisted band of quads inside each face.
    Propellor,
    /// `r`: mirror image.
    Reflect,
    /// `n`: shrink each face inward and connect it with a ring of quads.
    Inset,
    /// `x`: push each face outward along its normal.
    Extrude,
    /// `l`: split each face into a smaller copy plus corner and edge triangles.
    Stella,
    /// `z`: split every face into triangles.
    Triangulate,
    /// `K`: dual reciprocation with tangent-weighted reciprocals.
    CanonicalXyz,
    /// `C`: iterative relaxation toward the canonical form.
    Canonicalize,
    /// `A`: dual reciprocation with centroid reciprocals.
    AdjustXyz,
}

impl Operator {
    /// All operators, in table order.
    pub const ALL: [Operator; 13] = [
        Operator::Dual,
        Operator::Kis,
        Operator::Ambo,
        Operator::Gyro,
        Operator::Propellor,
        Operator::Reflect,
        Operator::Inset,
        Operator::Extrude,
        Operator::Stella,
        Operator::Triangulate,
        Operator::CanonicalXyz,
        Operator::Canonicalize,
        Operator::AdjustXyz,
    ];

    /// Looks up an operator by its notation letter.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    /// Notation letter.
    pub fn code(self) -> char {
        match self {
            Operator::Dual => 'd',
            Operator::Kis => 'k',
            Operator::Ambo => 'a',
            Operator::Gyro => 'g',
            Operator::Propellor => 'p',
            Operator::Reflect => 'r',
            Operator::Inset => 'n',
            Operator::Extrude => 'x',
            Operator::Stella => 'l',
            Operator::Triangulate => 'z',
            Operator::CanonicalXyz => 'K',
            Operator::Canonicalize => 'C',
            Operator::AdjustXyz => 'A',
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Dual => "dual",
            Operator::Kis => "kis",
            Operator::Ambo => "ambo",
            Operator::Gyro => "gyro",
            Operator::Propellor => "propellor",
            Operator::Reflect => "reflect",
            Operator::Inset => "inset",
            Operator::Extrude => "extrude",
            Operator::Stella => "stella",
            Operator::Triangulate => "triangulate",
            Operator::CanonicalXyz => "canonical reciprocation",
            Operator::Canonicalize => "canonicalize",
            Operator::AdjustXyz => "adjust",
        }
    }

    /// Applies the operator with notation arguments.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::engine::EngineConfig;
    /// use conway_mesh::{ops::Operator, seeds::SeedKind};
    ///
    /// let config = EngineConfig::default();
    /// let cube = SeedKind::Cube.build(&[], &config).expect("cube");
    /// let kis = Operator::Kis.apply(&cube, &[4.0], &config).expect("kis");
    /// assert_eq!(kis.face_count(), 24);
    /// assert_eq!(kis.name(), "k4C");
    /// ```
    pub fn apply(self, poly: &Polyhedron, args: &[f64], config: &EngineConfig) -> ConwayResult<Polyhedron> {
        let args = Args::new(self.code(), args);
        let result = match self {
            Operator::Dual => {
                args.at_most(0)?;
                dual(poly, config)
            }
            Operator::Kis => {
                args.at_most(2)?;
                kis(
                    poly,
                    args.degree(0)?,
                    args.real(1, DEFAULT_KIS_APEX_DISTANCE),
                    config,
                )
            }
            Operator::Ambo => {
                args.at_most(0)?;
                ambo(poly, config)
            }
            Operator::Gyro => {
                args.at_most(0)?;
                gyro(poly, config)
            }
            Operator::Propellor => {
                args.at_most(0)?;
                propellor(poly, config)
            }
            Operator::Reflect => {
                args.at_most(0)?;
                reflect(poly)
            }
            Operator::Inset => {
                args.at_most(3)?;
                inset(
                    poly,
                    args.degree(0)?,
                    args.real(1, DEFAULT_INSET_DISTANCE),
                    args.real(2, DEFAULT_INSET_POPOUT),
                    config,
                )
            }
            Operator::Extrude => {
                args.at_most(2)?;
                extrude(
                    poly,
                    args.degree(0)?,
                    args.real(1, DEFAULT_EXTRUDE_DISTANCE),
                    config,
                )
            }
            Operator::Stella => {
                args.at_most(0)?;
                stella(poly, config)
            }
            Operator::Triangulate => {
                args.at_most(0)?;
                triangulate(poly)
            }
            Operator::CanonicalXyz => {
                args.at_most(1)?;
                canonical_xyz(poly, args.count(0, DEFAULT_RECIPROCATE_ITERATIONS)?, config)
            }
            Operator::Canonicalize => {
                args.at_most(1)?;
                canonicalize(
                    poly,
                    args.count(0, DEFAULT_CANONICALIZE_ITERATIONS)?,
                    config.convergence_tolerance,
                )
                .polyhedron
            }
            Operator::AdjustXyz => {
                args.at_most(1)?;
                adjust_xyz(poly, args.count(0, DEFAULT_RECIPROCATE_ITERATIONS)?, config)
            }
        };
        Ok(result)
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Positional notation arguments for one operator.
struct Args<'a> {
    code: char,
    values: &'a [f64],
}

impl<'a> Args<'a> {
    fn new(code: char, values: &'a [f64]) -> Self {
        Self { code, values }
    }

    fn at_most(&self, count: usize) -> ConwayResult<()> {
        if self.values.len() > count {
            return Err(ConwayError::invalid_argument(
                self.code,
                format!("takes at most {count} arguments, got {}", self.values.len()),
            ));
        }
        Ok(())
    }

    fn whole(&self, index: usize, what: &str) -> ConwayResult<Option<usize>> {
        match self.values.get(index) {
            None => Ok(None),
            Some(&v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 => Ok(Some(v as usize)),
            Some(&v) => Err(ConwayError::invalid_argument(
                self.code,
                format!("{what} must be a non-negative integer, got {v}"),
            )),
        }
    }

    /// Face degree filter; 0 or absent selects every face.
    fn degree(&self, index: usize) -> ConwayResult<Option<usize>> {
        Ok(self.whole(index, "face degree")?.filter(|&n| n > 0))
    }

    fn count(&self, index: usize, default: usize) -> ConwayResult<usize> {
        Ok(self
            .whole(index, "iteration count")?
            .filter(|&n| n > 0)
            .unwrap_or(default))
    }

    fn real(&self, index: usize, default: f64) -> f64 {
        self.values
            .get(index)
            .map_or(default, |&v| or_default(v, default))
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Whether the degree filter selects `face`.
pub(crate) fn selects(degree: Option<usize>, face: &[usize]) -> bool {
    degree.map_or(true, |n| face.len() == n)
}

/// Checks that the filter matches at least one face, logging a warning
/// when it does not.
pub(crate) fn filter_matches(operator: Operator, poly: &Polyhedron, degree: Option<usize>) -> bool {
    let matched = poly.faces().iter().any(|face| selects(degree, face));
    if !matched {
        tracing::warn!(
            operator = operator.name(),
            degree = degree.unwrap_or(0),
            polyhedron = poly.name(),
            "no faces of the requested degree; leaving polyhedron unchanged"
        );
    }
    matched
}

/// Name prefix for a degree-filtered operator, e.g. `k` or `k4`.
pub(crate) fn prefixed_name(code: char, degree: Option<usize>, name: &str) -> String {
    match degree {
        Some(n) => format!("{code}{n}{name}"),
        None => format!("{code}{name}"),
    }
}

/// Adds `code` as a prefix, or removes it when already present, for
/// operators that undo themselves.
pub(crate) fn toggled_name(code: char, name: &str) -> String {
    match name.strip_prefix(code) {
        Some(rest) => rest.to_string(),
        None => format!("{code}{name}"),
    }
}

#[cfg(test)]
mod tests;
