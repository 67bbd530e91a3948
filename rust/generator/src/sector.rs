// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sector growth — the core of the generator.
//!
//! Grows one symmetric wedge from vertex 0 of the base ring: the main
//! spike, its midpoint leg pair, optional secondary legs near the tip, and
//! per-ring branch arcs. Every length and angle derives from the base
//! ring's two constants (`edge_length`, `sector_angle`) plus the up-front
//! [`Draws`], so the two halves of each leg pair always agree.
//!
//! All bends are clockwise about +Z, matching the replication direction;
//! the builder's rotation is counter-clockwise-positive, hence the negated
//! angles throughout.

use nalgebra::{Point3, Vector3};
use snowflake_mesh::{MeshBuilder, Subdivision};
use std::f64::consts::FRAC_PI_4;

use crate::base::BaseRing;
use crate::draws::Draws;
use crate::error::Result;
use crate::params::Params;

/// Constants shared by the ring branches.
struct Frame {
    /// Sector angle (2π/N).
    angle: f64,
    /// Shrunk edge length; drives leg lengths.
    d: f64,
    /// Original (pre-shrink) base edge length.
    dd: f64,
    /// Branch-tip extrusion vector, the same length as the main spike.
    up: Vector3<f64>,
}

/// Grows one sector from vertex 0 of the base ring.
pub fn grow_sector(
    builder: &mut MeshBuilder,
    base: &BaseRing,
    params: &Params,
    draws: &Draws,
) -> Result<()> {
    let n = base.vertices.len() as u32;
    let angle = base.sector_angle;
    let dd = base.edge_length;
    let d = dd * draws.leg_shrink;
    let root = builder.vertex(base.vertices[0])?;
    let arm = 2.0 * dd * draws.arm_scale;

    // Main spike: extrude vertex 0 outward and split it at a midpoint,
    // then pull the midpoint to its ring position. The midpoint uses the
    // shrunk edge length, so it lands below the tip.
    let (_, spike) = builder.extrude_vertex(base.vertices[0], Vector3::new(0.0, arm, 0.0))?;
    let split = builder.subdivide_edge(spike, 1)?;
    let mid = split.vertices[0];
    let inner_segment = split.edges[0]; // vertex 0 → midpoint
    let outer_segment = split.edges[1]; // midpoint → tip

    builder.move_vertex(
        mid,
        Point3::new(
            root.x,
            root.y + (n - 1) as f64 * (2.0 * d * draws.arm_scale) / n as f64,
            0.0,
        ),
    )?;

    // Primary leg pair at ±45° off the spike.
    let leg_len = (4.0 * dd / d) / n as f64;
    builder.extrude_vertex(mid, diagonal_leg(leg_len, false))?;
    builder.extrude_vertex(mid, diagonal_leg(leg_len, true))?;

    // Secondary legs near the tip, only when the shrink left the arm short.
    // Shortest leg sits nearest the tip, growing by d/2 towards the midpoint.
    let secondary_legs = d < 0.6 * dd;
    if secondary_legs {
        let sub = builder.subdivide_edge(outer_segment, draws.leg_count)?;
        let mut len = leg_len - draws.leg_count as f64 * (d / 2.0);
        for &v in sub.vertices.iter().rev() {
            builder.extrude_vertex(v, diagonal_leg(len, false))?;
            builder.extrude_vertex(v, diagonal_leg(len, true))?;
            len += d / 2.0;
        }
    }

    // Ring subdivision: one vertex per ring along the inner spike segment.
    let sub = builder.subdivide_edge(inner_segment, params.rings)?;
    let mut ring_verts = sub.vertices;
    ring_verts.reverse(); // outermost ring first

    let frame = Frame {
        angle,
        d,
        dd,
        up: Vector3::new(0.0, arm, 0.0),
    };

    for (j, &ring_vert) in ring_verts.iter().enumerate() {
        // Bend an arc across the sector: 2 + j extrusions, each rotated one
        // increment further about the origin. More steps on inner rings
        // keeps the angular coverage while tightening the increments.
        let steps = 2 + j;
        let step_angle = angle / steps as f64;
        let mut arc = Vec::with_capacity(steps);
        let mut cursor = ring_vert;
        for _ in 0..steps {
            let (next, _) = builder.extrude_vertex(cursor, Vector3::zeros())?;
            builder.rotate_about(&[next], Point3::origin(), -step_angle)?;
            arc.push(next);
            cursor = next;
        }

        match j {
            0 => outer_ring_branch(builder, &arc, &frame, draws, secondary_legs)?,
            1 => inner_ring_branches(builder, &arc, &frame, draws, secondary_legs)?,
            _ => {}
        }
    }

    Ok(())
}

/// Outer-ring branch: one tall branch off the middle arc vertex, a leg
/// pair at its tip, and — when secondary legs are on — a diminishing leg
/// cascade down one of its segments.
fn outer_ring_branch(
    builder: &mut MeshBuilder,
    arc: &[u32],
    frame: &Frame,
    draws: &Draws,
    secondary_legs: bool,
) -> Result<()> {
    let branch_vert = arc[arc.len() - 2];
    let pivot = builder.vertex(branch_vert)?;
    let (tip, branch_edge) = builder.extrude_vertex(branch_vert, frame.up)?;
    builder.rotate_about(&[tip], pivot, -(frame.angle / 2.0))?;

    let mut len = frame.d / draws.split_primary as f64;
    let sub = builder.subdivide_edge(branch_edge, draws.split_primary)?;
    let tip_vert = sub.vertices[sub.vertices.len() - 1];
    builder.extrude_vertex(tip_vert, angled_leg(len, frame.angle / 2.0 + FRAC_PI_4))?;
    builder.extrude_vertex(tip_vert, angled_leg(len, frame.angle / 2.0 - FRAC_PI_4))?;

    if secondary_legs {
        let segment = cascade_segment(&sub, draws);
        let sub = builder.subdivide_edge(segment, draws.leg_count)?;
        let mut cascade = sub.vertices;
        cascade.reverse(); // tip side first
        if draws.reverse_cascade {
            cascade.reverse();
        }
        for &v in &cascade {
            len -= frame.d / (draws.leg_count + 1) as f64;
            builder.extrude_vertex(v, angled_leg(len, frame.angle / 2.0 + FRAC_PI_4))?;
            builder.extrude_vertex(v, angled_leg(len, frame.angle / 2.0 - FRAC_PI_4))?;
        }
    }

    Ok(())
}

/// Which outer-branch segment carries the leg cascade. Segments are
/// ordered base → tip.
fn cascade_segment(sub: &Subdivision, draws: &Draws) -> u32 {
    if draws.split_primary == 1 {
        if draws.internal_offset == 0 {
            sub.edges[1]
        } else {
            sub.edges[0]
        }
    } else if draws.internal_offset == 0 {
        sub.edges[0]
    } else {
        sub.edges[1]
    }
}

/// Inner-ring branches: two extrusions rotated 2/3 and 1/3 of the sector
/// angle about their arc vertices, each subdivided; leg pairs only when the
/// outer spike segment carried no secondary legs.
fn inner_ring_branches(
    builder: &mut MeshBuilder,
    arc: &[u32],
    frame: &Frame,
    draws: &Draws,
    secondary_legs: bool,
) -> Result<()> {
    let b1 = arc[arc.len() - 2];
    let p1 = builder.vertex(b1)?;
    let (t1, e1) = builder.extrude_vertex(b1, frame.up)?;
    builder.rotate_about(&[t1], p1, -(2.0 * frame.angle / 3.0))?;

    let b2 = arc[arc.len() - 3];
    let p2 = builder.vertex(b2)?;
    let (t2, e2) = builder.extrude_vertex(b2, frame.up)?;
    builder.rotate_about(&[t2], p2, -(frame.angle / 3.0))?;

    // Dimensionless ratio kept from the original as a tuned shape
    // parameter; see DESIGN.md.
    let len = (frame.d / frame.dd) / draws.split_primary as f64;

    let sub = builder.subdivide_edge(e2, draws.split_secondary)?;
    if !secondary_legs {
        let v = sub.vertices[sub.vertices.len() - 1];
        builder.extrude_vertex(v, angled_leg(len, frame.angle / 3.0 + FRAC_PI_4))?;
        builder.extrude_vertex(v, angled_leg(len, frame.angle / 3.0 - FRAC_PI_4))?;
    }

    let sub = builder.subdivide_edge(e1, draws.split_secondary)?;
    if !secondary_legs {
        let v = sub.vertices[sub.vertices.len() - 1];
        builder.extrude_vertex(v, angled_leg(len, 2.0 * frame.angle / 3.0 + FRAC_PI_4))?;
        builder.extrude_vertex(v, angled_leg(len, 2.0 * frame.angle / 3.0 - FRAC_PI_4))?;
    }

    Ok(())
}

/// Leg offset at ±45° off the spike axis; `mirror` flips to the left side.
fn diagonal_leg(length: f64, mirror: bool) -> Vector3<f64> {
    let x = length * FRAC_PI_4.cos();
    let y = length * FRAC_PI_4.sin();
    Vector3::new(if mirror { -x } else { x }, y, 0.0)
}

/// Leg offset at `angle` radians clockwise from the +Y axis.
fn angled_leg(length: f64, angle: f64) -> Vector3<f64> {
    Vector3::new(length * angle.sin(), length * angle.cos(), 0.0)
}
