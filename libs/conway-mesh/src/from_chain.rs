//! # Chain Evaluation
//!
//! Resolves an [`OpChain`] against the seed and operator tables, then builds
//! the seed and folds the operators over it.

use config::engine::EngineConfig;
use conway_notation::{OpChain, OpSpec};

use crate::canonical::{recenter, rescale};
use crate::error::{ConwayError, ConwayResult};
use crate::ops::Operator;
use crate::polyhedron::Polyhedron;
use crate::seeds::SeedKind;

/// A table entry paired with the opspec that named it.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a, K> {
    /// Seed or operator from the table.
    pub kind: K,
    /// Opspec carrying the arguments and location.
    pub spec: &'a OpSpec,
}

/// A chain whose every letter names a known seed or operator.
#[derive(Debug, Clone)]
pub struct CompiledChain<'a> {
    /// Starting solid.
    pub seed: Resolved<'a, SeedKind>,
    /// Operators, nearest-seed first.
    pub operators: Vec<Resolved<'a, Operator>>,
}

/// Looks up every code before any geometry is built, failing on the first
/// unknown one in evaluation order.
pub fn resolve(chain: &OpChain) -> ConwayResult<CompiledChain<'_>> {
    let seed = SeedKind::from_code(chain.seed.code).ok_or(ConwayError::UnknownSeed {
        code: chain.seed.code,
        span: chain.seed.span,
    })?;
    let operators = chain
        .operators
        .iter()
        .map(|spec| {
            Operator::from_code(spec.code)
                .map(|kind| Resolved { kind, spec })
                .ok_or(ConwayError::UnknownOperator {
                    code: spec.code,
                    span: spec.span,
                })
        })
        .collect::<ConwayResult<Vec<_>>>()?;
    Ok(CompiledChain {
        seed: Resolved {
            kind: seed,
            spec: &chain.seed,
        },
        operators,
    })
}

/// Evaluates a chain: builds the seed, applies each operator in turn, then
/// recenters and rescales the result so it fits the unit sphere.
pub fn chain_to_polyhedron(chain: &OpChain, config: &EngineConfig) -> ConwayResult<Polyhedron> {
    let compiled = resolve(chain)?;

    let seed = compiled.seed;
    let mut poly = seed
        .kind
        .build(&seed.spec.args, config)
        .map_err(|e| e.with_span(seed.spec.span))?;
    tracing::debug!(seed = %seed.spec, polyhedron = %poly, "built seed");

    for step in &compiled.operators {
        poly = step
            .kind
            .apply(&poly, &step.spec.args, config)
            .map_err(|e| e.with_span(step.spec.span))?;
        tracing::debug!(operator = %step.spec, polyhedron = %poly, "applied operator");
    }

    let edges = poly.edges();
    let xyz = rescale(&recenter(poly.xyz(), &edges));
    Ok(poly.with_xyz(xyz))
}
