//! # Flag Topology Builder
//!
//! Staging area used by every retiling operator. Operators name vertices
//! and faces with their own composite keys (for example "midpoint of edge
//! 3-7"), register directed boundary edges per face, and let the builder
//! turn the symbolic description into dense indices.
//!
//! ## Example
//!
//! ```rust
//! use conway_mesh::flag::FlagBuilder;
//! use glam::DVec3;
//!
//! let mut flags: FlagBuilder<char, u8> = FlagBuilder::default();
//! flags.new_vertex('a', DVec3::X);
//! flags.new_vertex('b', DVec3::Y);
//! flags.new_vertex('c', DVec3::Z);
//! flags.new_vertex('a', DVec3::ZERO); // already known: ignored
//! flags.new_flag(0, 'a', 'b');
//! flags.new_flag(0, 'b', 'c');
//! flags.new_flag(0, 'c', 'a');
//!
//! let poly = flags.finalize("tri");
//! assert_eq!(poly.faces(), &[vec![0, 1, 2]]);
//! assert_eq!(poly.xyz()[0], DVec3::X);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::error::ConwayError;
use crate::math::Vec3;
use crate::polyhedron::Polyhedron;

/// Directed boundary links registered for one face.
struct StagedFace<F, V> {
    name: F,
    start: V,
    links: HashMap<V, V>,
}

/// Symbolic vertex and face registry for a single operator call.
///
/// `V` names vertices and `F` names faces. Vertex ids are assigned in
/// registration order and faces are emitted in the order their first edge
/// was registered, so output is deterministic for a given sequence of
/// calls.
pub struct FlagBuilder<V, F> {
    vertex_ids: HashMap<V, usize>,
    positions: Vec<Vec3>,
    face_slots: HashMap<F, usize>,
    faces: Vec<StagedFace<F, V>>,
    walk_limit: Option<usize>,
}

impl<V, F> Default for FlagBuilder<V, F>
where
    V: Copy + Eq + Hash + Debug,
    F: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(None)
    }
}

impl<V, F> FlagBuilder<V, F>
where
    V: Copy + Eq + Hash + Debug,
    F: Copy + Eq + Hash + Debug,
{
    /// Creates an empty builder.
    ///
    /// A face walk visits at most as many vertices as the face has links;
    /// `walk_limit` optionally lowers that bound for every face.
    pub fn new(walk_limit: Option<usize>) -> Self {
        Self {
            vertex_ids: HashMap::new(),
            positions: Vec::new(),
            face_slots: HashMap::new(),
            faces: Vec::new(),
            walk_limit,
        }
    }

    /// Registers a vertex and returns its id.
    ///
    /// Registering a name twice keeps the first position, so faces that
    /// discover a shared point independently agree on it.
    pub fn new_vertex(&mut self, name: V, position: Vec3) -> usize {
        if let Some(&id) = self.vertex_ids.get(&name) {
            return id;
        }
        let id = self.positions.len();
        self.vertex_ids.insert(name, id);
        self.positions.push(position);
        id
    }

    /// Registers the directed boundary edge `from → to` of face `face`.
    ///
    /// A second edge leaving the same `from` in the same face replaces the
    /// first.
    pub fn new_flag(&mut self, face: F, from: V, to: V) {
        let slot = match self.face_slots.get(&face) {
            Some(&slot) => slot,
            None => {
                let slot = self.faces.len();
                self.face_slots.insert(face, slot);
                self.faces.push(StagedFace {
                    name: face,
                    start: from,
                    links: HashMap::new(),
                });
                slot
            }
        };
        self.faces[slot].links.insert(from, to);
    }

    /// Number of distinct vertices registered so far.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of distinct faces registered so far.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Resolves every staged face into a vertex id cycle.
    ///
    /// Returns the vertex positions and each face's name with its boundary.
    /// A face that does not close within its own link count (or the walk
    /// limit, if lower), or whose walk hits an unregistered vertex or a
    /// missing link, is logged as malformed and kept truncated at that point.
    pub fn finalize_faces(self) -> (Vec<Vec3>, Vec<(F, Vec<usize>)>) {
        let faces = self
            .faces
            .iter()
            .map(|face| (face.name, self.walk(face)))
            .collect();
        (self.positions, faces)
    }

    /// Resolves the staged faces into a polyhedron named `name`.
    pub fn finalize(self, name: impl Into<String>) -> Polyhedron {
        let (xyz, faces) = self.finalize_faces();
        let faces = faces.into_iter().map(|(_, boundary)| boundary).collect();
        Polyhedron::from_parts(xyz, faces, name)
    }

    fn walk(&self, face: &StagedFace<F, V>) -> Vec<usize> {
        let steps = self.walk_limit.map_or(face.links.len(), |limit| limit.min(face.links.len()));
        let mut boundary = Vec::with_capacity(steps);
        let mut current = face.start;
        let defect = loop {
            if boundary.len() >= steps {
                break format!("did not close within {steps} steps");
            }
            let Some(&id) = self.vertex_ids.get(&current) else {
                break format!("references unregistered vertex {current:?}");
            };
            boundary.push(id);
            let Some(&next) = face.links.get(&current) else {
                break format!("has no edge leaving {current:?}");
            };
            if next == face.start {
                return boundary;
            }
            current = next;
        };
        let error = ConwayError::malformed(format!("{:?}", face.name), defect);
        tracing::error!(%error, kept = boundary.len(), links = face.links.len(), "truncating malformed face");
        boundary
    }
}

#[cfg(test)]
mod tests;
