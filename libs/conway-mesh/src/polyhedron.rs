//! # Polyhedron
//!
//! Immutable polygon mesh: vertex positions, faces as cyclic vertex index
//! lists with outward winding, and a provenance name recording the recipe
//! that produced it. Every operator returns a fresh value.

use std::collections::BTreeMap;
use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::{ConwayError, ConwayResult};
use crate::math::vec3::{centroid, face_normal};
use crate::math::{Mat3, Vec3};

/// A polyhedral surface with polygonal faces.
///
/// # Example
///
/// ```rust
/// use conway_mesh::Polyhedron;
/// use glam::DVec3;
///
/// let tetra = Polyhedron::new(
///     vec![
///         DVec3::new(1.0, 1.0, 1.0),
///         DVec3::new(1.0, -1.0, -1.0),
///         DVec3::new(-1.0, 1.0, -1.0),
///         DVec3::new(-1.0, -1.0, 1.0),
///     ],
///     vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![1, 3, 2]],
///     "T",
/// )
/// .expect("valid tetrahedron");
/// assert_eq!(tetra.edge_count(), 6);
/// assert_eq!(tetra.euler_characteristic(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Vertex positions; the index is the vertex id
    xyz: Vec<Vec3>,
    /// Faces as ordered vertex cycles, counter-clockwise seen from outside
    faces: Vec<Vec<usize>>,
    /// Recipe that produced this polyhedron
    name: String,
}

impl Polyhedron {
    /// Creates a polyhedron, checking that every face has at least three
    /// vertices and only references existing vertices.
    ///
    /// Winding is not checked; callers supply outward-wound faces.
    pub fn new(xyz: Vec<Vec3>, faces: Vec<Vec<usize>>, name: impl Into<String>) -> ConwayResult<Self> {
        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ConwayError::invalid_polyhedron(format!(
                    "face {i} has {} vertices, need at least 3",
                    face.len()
                )));
            }
            if let Some(&bad) = face.iter().find(|&&v| v >= xyz.len()) {
                return Err(ConwayError::invalid_polyhedron(format!(
                    "face {i} references vertex {bad} but only {} exist",
                    xyz.len()
                )));
            }
        }
        Ok(Self::from_parts(xyz, faces, name))
    }

    /// Assembles a polyhedron from parts the caller already guarantees.
    pub(crate) fn from_parts(xyz: Vec<Vec3>, faces: Vec<Vec<usize>>, name: impl Into<String>) -> Self {
        debug_assert!(
            faces.iter().all(|face| face.len() >= 3),
            "face with fewer than 3 vertices"
        );
        Self {
            xyz,
            faces,
            name: name.into(),
        }
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn xyz(&self) -> &[Vec3] {
        &self.xyz
    }

    /// Returns the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Returns the provenance name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.xyz.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of unique undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Unique undirected edges as `(min, max)` pairs, in first-discovery
    /// order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for face in &self.faces {
            for (a, b) in face_edges(face) {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }
        edges
    }

    /// Positions of the vertices of face `index`, in winding order.
    pub fn face_points(&self, index: usize) -> Vec<Vec3> {
        self.faces[index].iter().map(|&v| self.xyz[v]).collect()
    }

    /// Per-face vertex means.
    pub fn centers(&self) -> Vec<Vec3> {
        (0..self.faces.len())
            .map(|i| centroid(&self.face_points(i)))
            .collect()
    }

    /// Per-face unit normals.
    pub fn normals(&self) -> Vec<Vec3> {
        (0..self.faces.len())
            .map(|i| face_normal(&self.face_points(i)))
            .collect()
    }

    /// `V - E + F`; 2 for any closed genus-zero surface.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }

    /// Number of faces for each face degree.
    pub fn face_degree_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for face in &self.faces {
            *histogram.entry(face.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Same topology and name with new vertex positions.
    ///
    /// `xyz` must have one position per vertex.
    pub fn with_xyz(&self, xyz: Vec<Vec3>) -> Self {
        debug_assert_eq!(xyz.len(), self.xyz.len());
        Self {
            xyz,
            faces: self.faces.clone(),
            name: self.name.clone(),
        }
    }

    /// Same geometry under a new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copy with every vertex multiplied by `rotation`.
    pub fn rotated(&self, rotation: &Mat3) -> Self {
        self.with_xyz(self.xyz.iter().map(|&v| *rotation * v).collect())
    }

    /// Face, edge and vertex counts, e.g. `(6 faces, 12 edges, 8 vertices)`.
    pub fn summary(&self) -> String {
        format!(
            "({} faces, {} edges, {} vertices)",
            self.face_count(),
            self.edge_count(),
            self.vertex_count()
        )
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.summary())
    }
}

/// Directed edges of a face cycle, starting with the closing edge
/// `last → first`.
pub(crate) fn face_edges(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[(i + n - 1) % n], face[i]))
}

/// Consecutive vertex triples `(v1, v2, v3)` around a face cycle, starting
/// with the last two vertices as predecessors of the first.
pub(crate) fn face_corners(face: &[usize]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[(i + 2 * n - 2) % n], face[(i + n - 1) % n], face[i]))
}

// =============================================================================
// TESTS
// =============================================================================
