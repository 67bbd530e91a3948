// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-style wireframe mesh builder.
//!
//! The [`MeshBuilder`] is the exclusive owner of the mesh under
//! construction. Vertices and edges live in flat vectors with stable `u32`
//! indices; removal tombstones a slot instead of shifting indices, so every
//! index handed out stays valid until the final [`build`](MeshBuilder::build)
//! compaction. Every operation takes the indices it acts on and returns the
//! indices it creates.

use nalgebra::{Point3, Vector3};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::mesh::Mesh;

/// Result of subdividing an edge: the inserted vertices and the chain of
/// segment edges, both ordered from the original start vertex towards the
/// original end vertex. The first segment reuses the subdivided edge's slot.
#[derive(Debug, Clone)]
pub struct Subdivision {
    pub vertices: Vec<u32>,
    pub edges: Vec<u32>,
}

/// Result of duplicating a vertex set: the copies, with `vertices[i]` the
/// copy of the i-th input vertex, plus the copied induced edges.
#[derive(Debug, Clone)]
pub struct Duplicated {
    pub vertices: Vec<u32>,
    pub edges: Vec<u32>,
}

/// Exclusive owner of a wireframe mesh under construction.
///
/// # Example
///
/// ```
/// use snowflake_mesh::{MeshBuilder, Point3, Vector3};
///
/// let mut builder = MeshBuilder::new();
/// let v0 = builder.add_vertex(Point3::origin());
/// let (v1, e) = builder.extrude_vertex(v0, Vector3::new(0.0, 1.0, 0.0)).unwrap();
/// let sub = builder.subdivide_edge(e, 1).unwrap();
///
/// assert_eq!(builder.vertex_count(), 3);
/// assert_eq!(sub.vertices.len(), 1);
/// assert!(v1 > v0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3<f64>>,
    vertex_alive: Vec<bool>,
    edges: Vec<[u32; 2]>,
    edge_alive: Vec<bool>,
    live_vertices: usize,
    live_edges: usize,
}

impl MeshBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated with the contents of an existing
    /// mesh. Faces are not carried over; the builder is edge-only.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut builder = Self::new();
        for row in &mesh.positions {
            builder.add_vertex(Point3::new(row[0], row[1], row[2]));
        }
        for &[a, b] in &mesh.edges {
            builder.push_edge(a, b);
        }
        builder
    }

    // --- Queries ---

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Total vertex slots ever allocated, including removed ones. Together
    /// with sequential allocation this lets callers address "every vertex
    /// created after" a recorded point as a contiguous index range.
    #[inline]
    pub fn vertex_slots(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Position of a live vertex.
    pub fn vertex(&self, v: u32) -> Result<Point3<f64>> {
        if self.vertex_is_live(v) {
            Ok(self.vertices[v as usize])
        } else {
            Err(Error::VertexNotFound(v))
        }
    }

    /// Endpoints of a live edge.
    pub fn edge(&self, e: u32) -> Result<[u32; 2]> {
        if self.edge_is_live(e) {
            Ok(self.edges[e as usize])
        } else {
            Err(Error::EdgeNotFound(e))
        }
    }

    #[inline]
    fn vertex_is_live(&self, v: u32) -> bool {
        (v as usize) < self.vertices.len() && self.vertex_alive[v as usize]
    }

    #[inline]
    fn edge_is_live(&self, e: u32) -> bool {
        (e as usize) < self.edges.len() && self.edge_alive[e as usize]
    }

    // --- Construction ---

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.vertex_alive.push(true);
        self.live_vertices += 1;
        index
    }

    /// Creates an edge between two existing vertices.
    pub fn add_edge(&mut self, a: u32, b: u32) -> Result<u32> {
        if !self.vertex_is_live(a) {
            return Err(Error::VertexNotFound(a));
        }
        if !self.vertex_is_live(b) {
            return Err(Error::VertexNotFound(b));
        }
        Ok(self.push_edge(a, b))
    }

    fn push_edge(&mut self, a: u32, b: u32) -> u32 {
        let index = self.edges.len() as u32;
        self.edges.push([a, b]);
        self.edge_alive.push(true);
        self.live_edges += 1;
        index
    }

    /// Moves a vertex to a new position.
    pub fn move_vertex(&mut self, v: u32, position: Point3<f64>) -> Result<()> {
        if !self.vertex_is_live(v) {
            return Err(Error::VertexNotFound(v));
        }
        self.vertices[v as usize] = position;
        Ok(())
    }

    /// Extrudes a vertex along `offset`: creates one vertex at the offset
    /// position and one edge connecting it back to `v`. Returns
    /// `(new_vertex, new_edge)`.
    pub fn extrude_vertex(&mut self, v: u32, offset: Vector3<f64>) -> Result<(u32, u32)> {
        let base = self.vertex(v)?;
        let nv = self.add_vertex(base + offset);
        let ne = self.push_edge(v, nv);
        Ok((nv, ne))
    }

    /// Subdivides an edge into `cuts + 1` equal segments.
    ///
    /// With zero cuts this is a no-op that returns the edge unchanged. The
    /// subdivided edge's slot is reused for the first segment, so the edge
    /// index stays valid and still lies on the chain.
    pub fn subdivide_edge(&mut self, e: u32, cuts: u32) -> Result<Subdivision> {
        let [a, b] = self.edge(e)?;
        if cuts == 0 {
            return Ok(Subdivision {
                vertices: Vec::new(),
                edges: vec![e],
            });
        }

        let start = self.vertices[a as usize];
        let end = self.vertices[b as usize];
        let step = (end - start) / (cuts + 1) as f64;

        let mut vertices = Vec::with_capacity(cuts as usize);
        for i in 1..=cuts {
            vertices.push(self.add_vertex(start + step * i as f64));
        }

        let mut edges = Vec::with_capacity(cuts as usize + 1);
        self.edges[e as usize] = [a, vertices[0]];
        edges.push(e);
        for pair in vertices.windows(2) {
            edges.push(self.push_edge(pair[0], pair[1]));
        }
        edges.push(self.push_edge(vertices[cuts as usize - 1], b));

        Ok(Subdivision { vertices, edges })
    }

    /// Rotates vertices counter-clockwise by `angle` radians about the +Z
    /// axis through `pivot`.
    pub fn rotate_about(&mut self, verts: &[u32], pivot: Point3<f64>, angle: f64) -> Result<()> {
        let (sin, cos) = angle.sin_cos();
        for &v in verts {
            if !self.vertex_is_live(v) {
                return Err(Error::VertexNotFound(v));
            }
            let p = self.vertices[v as usize];
            let dx = p.x - pivot.x;
            let dy = p.y - pivot.y;
            self.vertices[v as usize] =
                Point3::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos, p.z);
        }
        Ok(())
    }

    /// Duplicates a set of vertices together with the induced edges (edges
    /// whose endpoints are both in the set). Edges touching the set with
    /// only one endpoint are not copied.
    pub fn duplicate(&mut self, verts: &[u32]) -> Result<Duplicated> {
        let mut map: FxHashMap<u32, u32> = FxHashMap::default();
        let mut vertices = Vec::with_capacity(verts.len());
        for &v in verts {
            let position = self.vertex(v)?;
            let nv = self.add_vertex(position);
            map.insert(v, nv);
            vertices.push(nv);
        }

        let mut edges = Vec::new();
        for e in 0..self.edges.len() {
            if !self.edge_alive[e] {
                continue;
            }
            let [a, b] = self.edges[e];
            if let (Some(&na), Some(&nb)) = (map.get(&a), map.get(&b)) {
                edges.push(self.push_edge(na, nb));
            }
        }

        Ok(Duplicated { vertices, edges })
    }

    /// Removes vertices and every edge incident to them.
    pub fn remove_vertices(&mut self, verts: &[u32]) -> Result<()> {
        for &v in verts {
            if !self.vertex_is_live(v) {
                return Err(Error::VertexNotFound(v));
            }
        }
        for &v in verts {
            if self.vertex_alive[v as usize] {
                self.vertex_alive[v as usize] = false;
                self.live_vertices -= 1;
            }
        }
        for e in 0..self.edges.len() {
            if !self.edge_alive[e] {
                continue;
            }
            let [a, b] = self.edges[e];
            if !self.vertex_alive[a as usize] || !self.vertex_alive[b as usize] {
                self.edge_alive[e] = false;
                self.live_edges -= 1;
            }
        }
        Ok(())
    }

    // --- Welding ---

    /// Merges vertices closer than `tolerance` into the lowest-index member
    /// of their cluster, rewrites edges, and drops edges made degenerate or
    /// duplicate by the merge. Returns the number of vertices removed.
    ///
    /// Vertices are scanned in index order and each one either joins an
    /// earlier kept vertex or becomes a keeper itself, so after one pass
    /// all survivors are pairwise farther apart than `tolerance` and a
    /// second pass removes nothing.
    pub fn weld(&mut self, tolerance: f64) -> usize {
        let mut grid: FxHashMap<(i64, i64, i64), Vec<u32>> = FxHashMap::default();
        let mut remap: Vec<u32> = (0..self.vertices.len() as u32).collect();
        let mut removed = 0usize;

        let cell_of = |p: &Point3<f64>| {
            (
                (p.x / tolerance).floor() as i64,
                (p.y / tolerance).floor() as i64,
                (p.z / tolerance).floor() as i64,
            )
        };

        for v in 0..self.vertices.len() {
            if !self.vertex_alive[v] {
                continue;
            }
            let p = self.vertices[v];
            let cell = cell_of(&p);
            let mut target = None;

            'search: for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let key = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                        if let Some(bucket) = grid.get(&key) {
                            for &kept in bucket {
                                if (p - self.vertices[kept as usize]).norm() <= tolerance {
                                    target = Some(kept);
                                    break 'search;
                                }
                            }
                        }
                    }
                }
            }

            match target {
                Some(kept) => {
                    remap[v] = kept;
                    self.vertex_alive[v] = false;
                    self.live_vertices -= 1;
                    removed += 1;
                }
                None => grid.entry(cell).or_default().push(v as u32),
            }
        }

        // Rewrite edges through the remap, then drop self-loops and
        // duplicates (comparing endpoint pairs unordered).
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        for e in 0..self.edges.len() {
            if !self.edge_alive[e] {
                continue;
            }
            let a = remap[self.edges[e][0] as usize];
            let b = remap[self.edges[e][1] as usize];
            let key = (a.min(b), a.max(b));
            if a == b || !seen.insert(key) {
                self.edge_alive[e] = false;
                self.live_edges -= 1;
            } else {
                self.edges[e] = [a, b];
            }
        }

        removed
    }

    // --- Emission ---

    /// Compacts live vertices and edges into a final [`Mesh`], remapping
    /// indices to be dense. Consumes the builder.
    pub fn build(self) -> Mesh {
        let mut remap = vec![u32::MAX; self.vertices.len()];
        let mut positions = Vec::with_capacity(self.live_vertices);
        for (v, position) in self.vertices.iter().enumerate() {
            if self.vertex_alive[v] {
                remap[v] = positions.len() as u32;
                positions.push([position.x, position.y, position.z]);
            }
        }

        let mut edges = Vec::with_capacity(self.live_edges);
        for (e, &[a, b]) in self.edges.iter().enumerate() {
            if self.edge_alive[e] {
                edges.push([remap[a as usize], remap[b as usize]]);
            }
        }

        Mesh {
            positions,
            edges,
            faces: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3<f64> {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn add_vertex_increments_count() {
        let mut builder = MeshBuilder::new();
        assert_eq!(builder.vertex_count(), 0);
        builder.add_vertex(p(0.0, 0.0));
        assert_eq!(builder.vertex_count(), 1);
        builder.add_vertex(p(1.0, 0.0));
        assert_eq!(builder.vertex_count(), 2);
    }

    #[test]
    fn add_edge_requires_live_vertices() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        assert!(builder.add_edge(v0, 99).is_err());
        let v1 = builder.add_vertex(p(1.0, 0.0));
        assert!(builder.add_edge(v0, v1).is_ok());
    }

    #[test]
    fn extrude_creates_vertex_and_edge() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let (v1, e) = builder
            .extrude_vertex(v0, Vector3::new(0.0, 2.0, 0.0))
            .unwrap();

        assert_eq!(builder.vertex(v1).unwrap(), p(0.0, 2.0));
        assert_eq!(builder.edge(e).unwrap(), [v0, v1]);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn subdivide_zero_cuts_is_noop() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let e = builder.add_edge(v0, v1).unwrap();

        let sub = builder.subdivide_edge(e, 0).unwrap();
        assert!(sub.vertices.is_empty());
        assert_eq!(sub.edges, vec![e]);
        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn subdivide_orders_vertices_start_to_end() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(3.0, 0.0));
        let e = builder.add_edge(v0, v1).unwrap();

        let sub = builder.subdivide_edge(e, 2).unwrap();
        assert_eq!(sub.vertices.len(), 2);
        assert_eq!(sub.edges.len(), 3);
        assert_relative_eq!(builder.vertex(sub.vertices[0]).unwrap().x, 1.0);
        assert_relative_eq!(builder.vertex(sub.vertices[1]).unwrap().x, 2.0);

        // Chain endpoints: slot reuse keeps `e` as the first segment.
        assert_eq!(builder.edge(sub.edges[0]).unwrap(), [v0, sub.vertices[0]]);
        assert_eq!(
            builder.edge(sub.edges[2]).unwrap(),
            [sub.vertices[1], v1]
        );
    }

    #[test]
    fn rotate_about_origin_quarter_turn() {
        let mut builder = MeshBuilder::new();
        let v = builder.add_vertex(p(1.0, 0.0));
        builder
            .rotate_about(&[v], Point3::origin(), std::f64::consts::FRAC_PI_2)
            .unwrap();

        let rotated = builder.vertex(v).unwrap();
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_pivot_keeps_pivot_distance() {
        let mut builder = MeshBuilder::new();
        let pivot = p(2.0, 1.0);
        let v = builder.add_vertex(p(3.0, 1.0));
        builder.rotate_about(&[v], pivot, 1.234).unwrap();
        assert_relative_eq!((builder.vertex(v).unwrap() - pivot).norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn duplicate_copies_induced_edges_only() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let v2 = builder.add_vertex(p(2.0, 0.0));
        builder.add_edge(v0, v1).unwrap();
        builder.add_edge(v1, v2).unwrap();

        // v2 is outside the selection, so edge v1-v2 must not be copied.
        let dup = builder.duplicate(&[v0, v1]).unwrap();
        assert_eq!(dup.vertices.len(), 2);
        assert_eq!(dup.edges.len(), 1);
        assert_eq!(
            builder.edge(dup.edges[0]).unwrap(),
            [dup.vertices[0], dup.vertices[1]]
        );
        assert_eq!(builder.vertex_count(), 5);
        assert_eq!(builder.edge_count(), 3);
    }

    #[test]
    fn remove_vertices_kills_incident_edges() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let v2 = builder.add_vertex(p(2.0, 0.0));
        let e01 = builder.add_edge(v0, v1).unwrap();
        let e12 = builder.add_edge(v1, v2).unwrap();

        builder.remove_vertices(&[v1]).unwrap();
        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.edge_count(), 0);
        assert!(builder.edge(e01).is_err());
        assert!(builder.edge(e12).is_err());
        // Surviving indices are untouched.
        assert_eq!(builder.vertex(v2).unwrap(), p(2.0, 0.0));
    }

    #[test]
    fn weld_merges_coincident_vertices() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let v2 = builder.add_vertex(p(1.0 + 1e-6, 0.0));
        let v3 = builder.add_vertex(p(2.0, 0.0));
        builder.add_edge(v0, v1).unwrap();
        builder.add_edge(v2, v3).unwrap();

        let removed = builder.weld(1e-4);
        assert_eq!(removed, 1);
        assert_eq!(builder.vertex_count(), 3);
        // Both edges survive, now sharing the kept vertex.
        assert_eq!(builder.edge_count(), 2);

        let mesh = builder.build();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edges[1][0], 1);
    }

    #[test]
    fn weld_drops_degenerate_and_duplicate_edges() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let v1b = builder.add_vertex(p(1.0, 0.0));
        let v0b = builder.add_vertex(p(0.0, 0.0));
        builder.add_edge(v0, v1).unwrap();
        builder.add_edge(v1b, v0b).unwrap(); // duplicate after weld (reversed)
        builder.add_edge(v1, v1b).unwrap(); // self-loop after weld

        builder.weld(1e-4);
        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn weld_is_idempotent() {
        let mut builder = MeshBuilder::new();
        for i in 0..4 {
            builder.add_vertex(p(i as f64 * 0.5, 0.0));
        }
        builder.add_vertex(p(0.0, 5e-5)); // within tolerance of vertex 0
        builder.add_edge(0, 1).unwrap();
        builder.add_edge(4, 2).unwrap();

        builder.weld(1e-4);
        let (verts, edges) = (builder.vertex_count(), builder.edge_count());
        let removed_again = builder.weld(1e-4);

        assert_eq!(removed_again, 0);
        assert_eq!(builder.vertex_count(), verts);
        assert_eq!(builder.edge_count(), edges);
    }

    #[test]
    fn build_compacts_and_remaps() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 0.0));
        let v2 = builder.add_vertex(p(2.0, 0.0));
        builder.add_edge(v0, v1).unwrap();
        builder.add_edge(v1, v2).unwrap();
        builder.remove_vertices(&[v0]).unwrap();

        let mesh = builder.build();
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.edges, vec![[0, 1]]);
        assert_eq!(mesh.positions[0], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn from_mesh_round_trips_counts() {
        let mut builder = MeshBuilder::new();
        let v0 = builder.add_vertex(p(0.0, 0.0));
        let v1 = builder.add_vertex(p(1.0, 1.0));
        builder.add_edge(v0, v1).unwrap();

        let mesh = builder.build();
        let rebuilt = MeshBuilder::from_mesh(&mesh);
        assert_eq!(rebuilt.vertex_count(), mesh.vertex_count());
        assert_eq!(rebuilt.edge_count(), mesh.edge_count());
    }
}
