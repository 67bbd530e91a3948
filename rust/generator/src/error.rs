// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for snowflake generation.

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during snowflake generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generation parameter is outside its accepted range. Rejected
    /// before any geometry is built.
    #[error("invalid parameter: {name} = {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// A builder operation was handed a missing vertex or edge index.
    /// This is a bug in the generation pipeline, not a caller error; no
    /// partial mesh is returned.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(#[from] snowflake_mesh::Error),
}
