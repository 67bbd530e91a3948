// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sector replication.
//!
//! Tiles the grown sector around the origin by the base polygon's
//! rotational symmetry, or trims the mesh down to a single open wedge.

use nalgebra::Point3;
use snowflake_mesh::MeshBuilder;

use crate::base::BaseRing;
use crate::error::Result;
use crate::params::Params;

/// Replicates the sector N−1 times (full shape) or deletes the base ring
/// (single sector).
///
/// `sector_start` is the builder's vertex watermark recorded right after
/// the base ring was built; everything at or above it belongs to the
/// sector. Vertex 0 travels with every copy so the copies weld onto the
/// base ring positions during finalization.
///
/// Each iteration duplicates only the freshest copy and rotates it one
/// sector angle further, so no copy is rotated twice and rounding error
/// does not compound across the ring.
pub fn replicate(
    builder: &mut MeshBuilder,
    base: &BaseRing,
    sector_start: u32,
    params: &Params,
) -> Result<()> {
    let n = base.vertices.len() as u32;

    if params.full_shape {
        let mut selection: Vec<u32> = Vec::with_capacity(
            1 + (builder.vertex_slots() - sector_start) as usize,
        );
        selection.push(base.vertices[0]);
        selection.extend(sector_start..builder.vertex_slots());

        for _ in 1..n {
            let copy = builder.duplicate(&selection)?;
            builder.rotate_about(&copy.vertices, Point3::origin(), -base.sector_angle)?;
            selection = copy.vertices;
        }
    } else {
        builder.remove_vertices(&base.vertices[1..])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::build_base_ring;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn wedge(n: u32) -> (MeshBuilder, BaseRing, u32) {
        let mut builder = MeshBuilder::new();
        let base = build_base_ring(&mut builder, n).unwrap();
        let start = builder.vertex_slots();
        // Minimal stand-in for a grown sector: one spike off vertex 0.
        builder
            .extrude_vertex(base.vertices[0], Vector3::new(0.0, 1.0, 0.0))
            .unwrap();
        (builder, base, start)
    }

    #[test]
    fn full_shape_copies_sector_n_minus_one_times() {
        let (mut builder, base, start) = wedge(6);
        let params = Params::default();
        replicate(&mut builder, &base, start, &params).unwrap();

        // Each copy carries vertex 0's clone plus the spike tip, and the
        // spike edge between them.
        assert_eq!(builder.vertex_count(), 7 + 5 * 2);
        assert_eq!(builder.edge_count(), 7 + 5);
    }

    #[test]
    fn copies_land_on_base_ring_positions() {
        let (mut builder, base, start) = wedge(6);
        replicate(&mut builder, &base, start, &Params::default()).unwrap();

        // The first copy's clone of vertex 0 must coincide with base
        // vertex 1 (one sector angle clockwise).
        let clone = builder.vertex(7).unwrap();
        let target = builder.vertex(base.vertices[1]).unwrap();
        assert_relative_eq!((clone - target).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn single_sector_drops_base_ring() {
        let (mut builder, base, start) = wedge(6);
        let params = Params {
            full_shape: false,
            ..Params::default()
        };
        replicate(&mut builder, &base, start, &params).unwrap();

        // Only vertex 0 and the spike survive; all base ring edges die
        // with their endpoints.
        assert_eq!(builder.vertex_count(), 2);
        assert_eq!(builder.edge_count(), 1);
        assert!(builder.vertex(base.vertices[1]).is_err());
    }
}
