//! Memory models for both allocation modes.
//!
//! This module owns every representation of simulated memory. It provides:
//! 1. **Segments:** Typed free/occupied regions and the normalization pass
//!    that keeps a segment list sorted, gapless, and merge-clean.
//! 2. **Memory Image:** The contiguous dynamic-partitioning memory, mutated
//!    only through its own split/merge operations.
//! 3. **Partitions:** The immutable fixed-partition declaration list and its
//!    append-only allocation table.
//!
//! Invariant enforcement is centralized here: no other component mutates
//! segments or allocation records directly.

/// The dynamic-partitioning memory image.
pub mod image;

/// Fixed partitions and their allocation table.
pub mod partition;

/// Typed memory segments and list normalization.
pub mod segment;

pub use image::MemoryImage;
pub use partition::{Allocation, Partition, PartitionTable};
pub use segment::{Segment, SegmentKind, normalize};
