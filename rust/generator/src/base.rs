// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Base ring construction.
//!
//! The base ring is the seed geometry for one sector: a regular N-gon on
//! the unit circle, centered at the origin, plus the two constants every
//! later rotation and leg length derives from — the base edge length `d`
//! and the sector angle.

use nalgebra::{Point3, Vector3};
use snowflake_mesh::MeshBuilder;

use crate::error::Result;

/// The base polygon plus its derived constants.
#[derive(Debug, Clone)]
pub struct BaseRing {
    /// Indices of the ring vertices; `vertices[0]` sits at (0, 1, 0) and
    /// the sector grows from it.
    pub vertices: Vec<u32>,
    /// Indices of the N closing edges.
    pub edges: Vec<u32>,
    /// Distance between adjacent ring vertices.
    pub edge_length: f64,
    /// Angle between the two base edges leaving vertex 0, measured after
    /// translating both edge vectors to a common origin. For a regular
    /// N-gon this equals 2π/N, making it the replication step.
    pub sector_angle: f64,
}

/// Builds a closed N-gon on the unit circle, clockwise from (0, 1, 0).
/// No faces are created.
pub fn build_base_ring(builder: &mut MeshBuilder, n: u32) -> Result<BaseRing> {
    let step = std::f64::consts::TAU / n as f64;

    let mut vertices = Vec::with_capacity(n as usize);
    for k in 0..n {
        let theta = step * k as f64;
        vertices.push(builder.add_vertex(Point3::new(theta.sin(), theta.cos(), 0.0)));
    }

    let mut edges = Vec::with_capacity(n as usize);
    for k in 0..n as usize {
        edges.push(builder.add_edge(vertices[k], vertices[(k + 1) % n as usize])?);
    }

    let root = builder.vertex(vertices[0])?;
    let next = builder.vertex(vertices[1])?;
    let prev = builder.vertex(vertices[n as usize - 1])?;

    let edge_length = (root - next).norm();

    // Translate both neighbors by the root vector and take the angle
    // between the results via dot product.
    let a: Vector3<f64> = next.coords + root.coords;
    let b: Vector3<f64> = prev.coords + root.coords;
    let sector_angle = (a.dot(&b) / (a.norm() * b.norm())).acos();

    Ok(BaseRing {
        vertices,
        edges,
        edge_length,
        sector_angle,
    })
}
