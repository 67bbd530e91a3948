// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The final mesh artifact.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Wireframe mesh: vertex positions plus edge (and, for downstream
/// consumers, triangle) connectivity.
///
/// Indices are dense: every entry of `edges` and `faces` references a row of
/// `positions`. The snowflake generator emits edges only, so `faces` is
/// empty; the field is part of the output contract for consumers that
/// triangulate or skin the wireframe themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions as `[x, y, z]` rows.
    pub positions: Vec<[f64; 3]>,
    /// Vertex index pairs.
    pub edges: Vec<[u32; 2]>,
    /// Triangle index triples.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Get vertex count.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get edge count.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get face count.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i` as a [`Point3`].
    #[inline]
    pub fn position(&self, i: usize) -> Point3<f64> {
        let [x, y, z] = self.positions[i];
        Point3::new(x, y, z)
    }

    /// Calculate bounds (min, max).
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        for &[x, y, z] in &self.positions {
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        (min, max)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh {
            positions: vec![[0.0, -1.0, 0.0], [2.0, 3.0, -5.0], [1.0, 0.0, 4.0]],
            edges: vec![[0, 1], [1, 2]],
            faces: Vec::new(),
        };

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, -1.0, -5.0));
        assert_eq!(max, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_position_accessor() {
        let mesh = Mesh {
            positions: vec![[1.0, 2.0, 3.0]],
            edges: Vec::new(),
            faces: Vec::new(),
        };
        assert_eq!(mesh.position(0), Point3::new(1.0, 2.0, 3.0));
    }
}
