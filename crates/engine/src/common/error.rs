//! Input validation errors.
//!
//! Every simulation run is validated up front; nothing is simulated when any
//! of these errors applies. Unsatisfiable processes are deliberately *not* an
//! error: a process that never fits simply remains in the waiting set of the
//! final trace frame, where callers can observe it.

use thiserror::Error;

/// Errors rejected before a simulation starts.
///
/// All variants correspond to invalid caller input. Once a run begins it
/// always completes and produces a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Memory capacity for a dynamic run was zero.
    #[error("memory capacity must be greater than zero")]
    ZeroCapacity,

    /// A process was declared with an empty identifier.
    #[error("process id must not be empty")]
    EmptyProcessId,

    /// Two processes share the same identifier.
    #[error("duplicate process id `{0}`")]
    DuplicateProcessId(String),

    /// A process was declared with zero size.
    #[error("process `{id}` must have a size greater than zero")]
    ZeroProcessSize {
        /// Identifier of the offending process.
        id: String,
    },

    /// A partition was declared with an empty identifier.
    #[error("partition id must not be empty")]
    EmptyPartitionId,

    /// Two partitions share the same identifier.
    #[error("duplicate partition id `{0}`")]
    DuplicatePartitionId(String),

    /// A partition was declared with zero size.
    #[error("partition `{id}` must have a size greater than zero")]
    ZeroPartitionSize {
        /// Identifier of the offending partition.
        id: String,
    },

    /// A fixed-partition run was requested with an empty partition list.
    #[error("fixed-partition simulation requires at least one partition")]
    NoPartitions,

    /// A fit policy name could not be parsed.
    #[error("unknown fit policy `{0}` (expected `first`, `best`, or `worst`)")]
    UnknownPolicy(String),
}
