// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh finalization: center fill, weld, compaction.

use nalgebra::{Point3, Vector3};
use snowflake_mesh::{Mesh, MeshBuilder};

use crate::base::BaseRing;
use crate::error::Result;
use crate::params::Params;

/// Coincident-vertex merge distance. Replicated sectors meet exactly at
/// the base ring positions, so this only needs to absorb rounding error.
pub const WELD_TOLERANCE: f64 = 1e-4;

/// Closes the center if requested, welds duplicate-seam vertices, and
/// compacts the result into the final [`Mesh`].
///
/// Consumes the builder: callers get a complete mesh or an error, never a
/// partially finalized one.
pub fn finalize(mut builder: MeshBuilder, base: &BaseRing, params: &Params) -> Result<Mesh> {
    if params.fill_center {
        // Extrude each base position in place, then collapse the new
        // vertices onto the origin. The weld below fuses them into a
        // single center vertex.
        let mut targets = vec![base.vertices[0]];
        if params.full_shape {
            targets.extend_from_slice(&base.vertices[1..]);
        }
        for v in targets {
            let (center, _) = builder.extrude_vertex(v, Vector3::zeros())?;
            builder.move_vertex(center, Point3::origin())?;
        }
    }

    builder.weld(WELD_TOLERANCE);
    Ok(builder.build())
}
