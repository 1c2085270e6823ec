//! # Engine Unit Tests
//!
//! This module organizes the fine-grained tests for the allocation engine,
//! mirroring the source tree: memory models, simulation drivers, policies,
//! configuration, and metrics.


/// Unit tests for the memory models.
///
/// This module aggregates tests for:
/// - Segment-list normalization (coverage, clipping, merging, idempotence).
/// - Placement into the dynamic memory image.
/// - The fixed-partition table.
pub mod mem;


/// Unit tests for the simulation drivers.
///
/// This module aggregates tests for the dynamic and fixed allocators, the
/// comparison runs, and trace frame serialization.
pub mod sim;
