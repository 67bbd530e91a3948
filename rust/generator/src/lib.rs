// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Snowflake Generator
//!
//! Procedural generation of symmetric snowflake wireframe meshes.
//!
//! A regular polygon base ring seeds one randomized sector — a main spike
//! with leg pairs, optional secondary legs, and up to two branch rings —
//! which is then replicated around the origin by the polygon's rotational
//! symmetry and welded into a single connected mesh.
//!
//! ```
//! use snowflake_generator::{generate_seeded, Params};
//!
//! let mesh = generate_seeded(&Params::default(), 42).unwrap();
//! assert!(!mesh.is_empty());
//!
//! // Same seed, same snowflake.
//! let again = generate_seeded(&Params::default(), 42).unwrap();
//! assert_eq!(mesh, again);
//! ```

pub mod base;
pub mod draws;
pub mod error;
pub mod finalize;
pub mod params;
pub mod pipeline;
pub mod replicate;
pub mod sector;

// Re-export the mesh types for convenience
pub use snowflake_mesh::{Mesh, MeshBuilder};

pub use draws::Draws;
pub use error::{Error, Result};
pub use finalize::WELD_TOLERANCE;
pub use params::Params;
pub use pipeline::{generate, generate_seeded};
