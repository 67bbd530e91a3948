// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Randomized derived parameters.
//!
//! Every random quantity the generator consumes is sampled here, once, up
//! front, in a fixed order. The phases read the same draws throughout, so
//! the two halves of a symmetric leg pair can never disagree and
//! reproducibility does not depend on call order inside the algorithm.

use rand::Rng;

/// Random draws fixed at the start of one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draws {
    /// Arm length scale: uniform [0.2, 1.0) doubled, so [0.4, 2.0). Scales
    /// the main spike and every branch-tip extrusion.
    pub arm_scale: f64,
    /// Uniform [0.4, 1.0); shrinks the base edge length after the spike is
    /// built, driving leg lengths and the secondary-leg threshold.
    pub leg_shrink: f64,
    /// Number of secondary legs per subdivided segment (1–3).
    pub leg_count: u32,
    /// Which outer-branch segment receives the leg cascade
    /// (0..=`leg_count`).
    pub internal_offset: u32,
    /// Subdivision count for the outer-ring branch (1 or 2).
    pub split_primary: u32,
    /// Subdivision count for the inner-ring branches (2 or 1, the
    /// complement of `split_primary`).
    pub split_secondary: u32,
    /// Walk the outer-branch leg cascade base-to-tip instead of tip-to-base.
    pub reverse_cascade: bool,
}

impl Draws {
    /// Samples all draws from `rng` in a fixed, documented order.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let orientation: u32 = rng.gen_range(0..=1);
        let (split_primary, split_secondary) = if orientation == 0 { (1, 2) } else { (2, 1) };
        let arm_scale = rng.gen_range(0.2..1.0) * 2.0;
        let leg_count = rng.gen_range(1..=3);
        let internal_offset = rng.gen_range(0..=leg_count);
        let leg_shrink = rng.gen_range(0.4..1.0);
        let reverse_cascade = rng.gen_range(0..=1) == 1;

        Self {
            arm_scale,
            leg_shrink,
            leg_count,
            internal_offset,
            split_primary,
            split_secondary,
            reverse_cascade,
        }
    }
}
