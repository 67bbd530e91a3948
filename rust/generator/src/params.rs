// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of internal rings accepted by [`Params::rings`].
pub const RING_RANGE: std::ops::RangeInclusive<u32> = 0..=2;

/// Base polygon vertex counts accepted by [`Params::base_vertices`].
pub const BASE_VERTEX_RANGE: std::ops::RangeInclusive<u32> = 3..=12;

/// User-facing generation parameters, fixed for one generation run.
///
/// Out-of-range values are rejected (not clamped) by [`Params::validate`]
/// before any geometry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Number of internal rings along the main spike (0–2). Each ring grows
    /// its own arc of side branches.
    pub rings: u32,
    /// Number of vertices on the base polygon (3–12); also the rotational
    /// symmetry order of the full shape.
    pub base_vertices: u32,
    /// Extend legs to the center of the snowflake.
    pub fill_center: bool,
    /// Replicate the sector into a full closed snowflake instead of
    /// emitting a single open wedge.
    pub full_shape: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            rings: 1,
            base_vertices: 6,
            fill_center: true,
            full_shape: true,
        }
    }
}

impl Params {
    /// Checks all parameters against their accepted ranges.
    pub fn validate(&self) -> Result<()> {
        if !RING_RANGE.contains(&self.rings) {
            return Err(Error::InvalidParameter {
                name: "rings",
                value: self.rings as i64,
                expected: "0..=2",
            });
        }
        if !BASE_VERTEX_RANGE.contains(&self.base_vertices) {
            return Err(Error::InvalidParameter {
                name: "base_vertices",
                value: self.base_vertices as i64,
                expected: "3..=12",
            });
        }
        Ok(())
    }
}
