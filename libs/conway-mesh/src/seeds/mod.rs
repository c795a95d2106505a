//! # Seeds
//!
//! Starting solids for a recipe: the five Platonic solids plus the prism,
//! antiprism and pyramid families, which take a side count.
//!
//! | Code | Seed | Arguments |
//! |------|------|-----------|
//! | `T` | tetrahedron | |
//! | `O` | octahedron | |
//! | `C` | cube | |
//! | `I` | icosahedron | |
//! | `D` | dodecahedron | |
//! | `P` | prism | sides |
//! | `A` | antiprism | sides |
//! | `Y` | pyramid | sides |

pub mod families;
pub mod platonic;

pub use families::{antiprism, prism, pyramid};
pub use platonic::{cube, dodecahedron, icosahedron, octahedron, tetrahedron};

use config::constants::{MAX_POLYGON_SIDES, MIN_POLYGON_SIDES};
use config::engine::EngineConfig;

use crate::error::{ConwayError, ConwayResult};
use crate::polyhedron::Polyhedron;

/// Every seed a recipe can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    /// `T`
    Tetrahedron,
    /// `O`
    Octahedron,
    /// `C`
    Cube,
    /// `I`
    Icosahedron,
    /// `D`
    Dodecahedron,
    /// `P n`: two n-gons joined by quads.
    Prism,
    /// `A n`: two twisted n-gons joined by triangles.
    Antiprism,
    /// `Y n`: an n-gon base under a single apex.
    Pyramid,
}

impl SeedKind {
    /// All seeds, in table order.
    pub const ALL: [SeedKind; 8] = [
        SeedKind::Tetrahedron,
        SeedKind::Octahedron,
        SeedKind::Cube,
        SeedKind::Icosahedron,
        SeedKind::Dodecahedron,
        SeedKind::Prism,
        SeedKind::Antiprism,
        SeedKind::Pyramid,
    ];

    /// Looks up a seed by its notation letter.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|seed| seed.code() == code)
    }

    /// Notation letter.
    pub fn code(self) -> char {
        match self {
            SeedKind::Tetrahedron => 'T',
            SeedKind::Octahedron => 'O',
            SeedKind::Cube => 'C',
            SeedKind::Icosahedron => 'I',
            SeedKind::Dodecahedron => 'D',
            SeedKind::Prism => 'P',
            SeedKind::Antiprism => 'A',
            SeedKind::Pyramid => 'Y',
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            SeedKind::Tetrahedron => "tetrahedron",
            SeedKind::Octahedron => "octahedron",
            SeedKind::Cube => "cube",
            SeedKind::Icosahedron => "icosahedron",
            SeedKind::Dodecahedron => "dodecahedron",
            SeedKind::Prism => "prism",
            SeedKind::Antiprism => "antiprism",
            SeedKind::Pyramid => "pyramid",
        }
    }

    /// Whether the seed takes a side count.
    pub fn is_parametrized(self) -> bool {
        matches!(self, SeedKind::Prism | SeedKind::Antiprism | SeedKind::Pyramid)
    }

    /// Builds the seed from its notation arguments.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::engine::EngineConfig;
    /// use conway_mesh::seeds::SeedKind;
    ///
    /// let config = EngineConfig::default();
    /// let prism = SeedKind::Prism.build(&[5.0], &config).expect("pentagonal prism");
    /// assert_eq!(prism.name(), "P5");
    /// assert_eq!(prism.vertex_count(), 10);
    /// assert!(SeedKind::Prism.build(&[2.0], &config).is_err());
    /// ```
    pub fn build(self, args: &[f64], config: &EngineConfig) -> ConwayResult<Polyhedron> {
        let n = if self.is_parametrized() {
            self.sides(args)?
        } else if args.is_empty() {
            0
        } else {
            return Err(ConwayError::invalid_argument(
                self.code(),
                format!("{} takes no arguments, got {}", self.name(), args.len()),
            ));
        };
        Ok(match self {
            SeedKind::Tetrahedron => tetrahedron(),
            SeedKind::Octahedron => octahedron(),
            SeedKind::Cube => cube(),
            SeedKind::Icosahedron => icosahedron(),
            SeedKind::Dodecahedron => dodecahedron(),
            SeedKind::Prism => prism(n, config),
            SeedKind::Antiprism => antiprism(n, config),
            SeedKind::Pyramid => pyramid(n, config),
        })
    }

    fn sides(self, args: &[f64]) -> ConwayResult<usize> {
        let invalid = |message: String| ConwayError::invalid_argument(self.code(), message);
        let n = match args {
            [n] => *n,
            [] => return Err(invalid(format!("{} needs a side count", self.name()))),
            many => return Err(invalid(format!("{} takes one argument, got {}", self.name(), many.len()))),
        };
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(invalid(format!("side count must be an integer, got {n}")));
        }
        if n < MIN_POLYGON_SIDES as f64 {
            return Err(invalid(format!("needs at least {MIN_POLYGON_SIDES} sides, got {n}")));
        }
        if n > MAX_POLYGON_SIDES as f64 {
            return Err(invalid(format!("accepts at most {MAX_POLYGON_SIDES} sides, got {n}")));
        }
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests;
