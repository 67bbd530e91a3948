// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh construction.

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh construction.
///
/// These indicate a programming error in the calling code (a stale or
/// removed index was passed to a builder operation), not a recoverable
/// geometric condition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vertex index not found in the builder (out of range or removed).
    #[error("vertex not found: {0}")]
    VertexNotFound(u32),

    /// Edge index not found in the builder (out of range or removed).
    #[error("edge not found: {0}")]
    EdgeNotFound(u32),
}
