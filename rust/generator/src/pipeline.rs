// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The generation pipeline: base ring → sector → replicate → finalize.

use rand::{rngs::StdRng, Rng, SeedableRng};
use snowflake_mesh::{Mesh, MeshBuilder};

use crate::base::build_base_ring;
use crate::draws::Draws;
use crate::error::Result;
use crate::finalize::finalize;
use crate::params::Params;
use crate::replicate::replicate;
use crate::sector::grow_sector;

/// Generates a snowflake mesh from `params`, drawing all randomness from
/// `rng` up front.
///
/// The phases run strictly in sequence with no branching back; the caller
/// receives either a complete welded mesh or an error.
pub fn generate<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Mesh> {
    params.validate()?;
    let draws = Draws::sample(rng);
    tracing::debug!(?params, ?draws, "Starting snowflake generation");

    let mut builder = MeshBuilder::new();
    let base = build_base_ring(&mut builder, params.base_vertices)?;
    tracing::debug!(
        vertices = builder.vertex_count(),
        edge_length = base.edge_length,
        sector_angle = base.sector_angle,
        "Base ring built"
    );

    let sector_start = builder.vertex_slots();
    grow_sector(&mut builder, &base, params, &draws)?;
    tracing::debug!(
        vertices = builder.vertex_count(),
        edges = builder.edge_count(),
        "Sector grown"
    );

    replicate(&mut builder, &base, sector_start, params)?;
    tracing::debug!(vertices = builder.vertex_count(), "Sector replicated");

    let mesh = finalize(builder, &base, params)?;
    tracing::debug!(
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        "Snowflake finalized"
    );

    Ok(mesh)
}

/// Convenience wrapper seeding a [`StdRng`] from `seed`. The same seed and
/// parameters always produce identical geometry.
pub fn generate_seeded(params: &Params, seed: u64) -> Result<Mesh> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}
