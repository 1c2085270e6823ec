//! Memory allocation simulator library.
//!
//! This crate implements a deterministic discrete-event simulator for classic
//! memory placement policies with the following:
//! 1. **Segment Model:** An ordered, gapless partition of memory into free and
//!    occupied regions, with centralized normalization and merging.
//! 2. **Dynamic-Fit Allocator:** A tick loop placing arriving processes into
//!    holes under first/best/worst fit, splitting and merging as it goes.
//! 3. **Fixed-Partition Allocator:** The same loop over a predeclared list of
//!    non-resizable slots with an append-only allocation table.
//! 4. **Traces:** Immutable, independently-owned frame snapshots forming the
//!    replayable, exportable history of a run.
//! 5. **Metrics:** Pure fragmentation and utilization projections per frame.
//!
//! Both allocators are pure functions of their inputs: identical inputs yield
//! byte-identical traces.

/// Common types (errors, fit policies, processes).
pub mod common;
/// Scenario configuration and input validation.
pub mod config;
/// Memory models (segments, dynamic image, fixed partitions).
pub mod mem;
/// The rendering capability seam.
pub mod render;
/// Simulation drivers, frames, and comparison runs.
pub mod sim;
/// Fragmentation and utilization metrics.
pub mod stats;

/// Scenario description; use `Config::default()` for the demo or deserialize from JSON.
pub use crate::config::Config;
/// Fit policy selection (first/best/worst).
pub use crate::common::FitPolicy;
/// The materialized, replayable run history.
pub use crate::sim::Trace;
