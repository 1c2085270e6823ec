//! Simulation drivers and trace generation.
//!
//! This module turns a validated scenario into a trace. It provides:
//! 1. **Frames:** Immutable per-step snapshots and the append-only trace.
//! 2. **Driver:** The shared tick loop over arrivals and the waiting queue.
//! 3. **Dynamic allocator:** Hole-based placement with splitting and merging.
//! 4. **Fixed allocator:** Placement into predeclared partitions.
//! 5. **Comparison:** Three policy runs over identical inputs, indexed by a
//!    shared clamped step cursor.
//!
//! Generation is single-threaded and fully synchronous: a trace is complete
//! before any frame is exposed, and re-running identical inputs yields an
//! identical trace.

mod engine;

/// Three-policy comparison runs.
pub mod comparison;

/// The dynamic-fit allocator.
pub mod dynamic;

/// The fixed-partition allocator.
pub mod fixed;

/// Trace frames and the trace container.
pub mod frame;

pub use comparison::ComparisonTrace;
pub use dynamic::generate_trace;
pub use fixed::generate_partition_trace;
pub use frame::{FrameState, Trace, TraceFrame};
