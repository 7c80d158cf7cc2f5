//! Instance validation errors.

use thiserror::Error;

/// Reasons an [`Instance`](super::Instance) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// No vertices were given.
    #[error("instance has no vertices")]
    Empty,

    /// The arc matrix does not have one row per vertex.
    #[error("arc matrix has {found} rows, expected {expected}")]
    ArcRowCount {
        /// Number of vertices.
        expected: usize,
        /// Rows found.
        found: usize,
    },

    /// An arc matrix row does not have one entry per vertex.
    #[error("arc matrix row {row} has {found} entries, expected {expected}")]
    ArcRowLength {
        /// Offending row.
        row: usize,
        /// Number of vertices.
        expected: usize,
        /// Entries found.
        found: usize,
    },

    /// A vertex's ID does not match its position.
    #[error("vertex at position {position} has id {id}")]
    VertexIdMismatch {
        /// Position in the vertex list.
        position: usize,
        /// ID stored on the vertex.
        id: usize,
    },

    /// The instance does not have exactly one depot.
    #[error("expected exactly one depot, found {found}")]
    DepotCount {
        /// Number of depots found.
        found: usize,
    },

    /// The fleet has no vehicles.
    #[error("fleet size must be positive")]
    EmptyFleet,
}
