// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Snowflake Mesh
//!
//! Arena-based wireframe mesh construction. The [`MeshBuilder`] owns all
//! vertices and edges under construction and exposes directed operations
//! (extrude, subdivide, rotate, duplicate, weld) that take explicit indices
//! and return the indices they create — there is no implicit "current
//! selection" to forget to reset.
//!
//! The finished geometry is emitted as a compact [`Mesh`] artifact.

pub mod builder;
pub mod error;
pub mod mesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use builder::{Duplicated, MeshBuilder, Subdivision};
pub use error::{Error, Result};
pub use mesh::Mesh;
