//! Three-policy comparison runs.
//!
//! Comparison mode is simply three independent simulations of the same
//! scenario under first, best, and worst fit. The three traces are replayed
//! side by side with one shared step cursor; each trace clamps the cursor to
//! its own length, so a shorter run holds its final frame while the others
//! continue.

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;
use crate::common::policy::FitPolicy;
use crate::common::process::Process;
use crate::mem::partition::Partition;
use crate::sim::dynamic::generate_trace;
use crate::sim::fixed::generate_partition_trace;
use crate::sim::frame::{Trace, TraceFrame};

/// The traces of one scenario under all three fit policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTrace {
    /// First-fit run.
    pub first: Trace,
    /// Best-fit run.
    pub best: Trace,
    /// Worst-fit run.
    pub worst: Trace,
}

impl ComparisonTrace {
    /// Compares the three policies over a fixed-partition scenario.
    ///
    /// # Errors
    ///
    /// Returns [`SimError`] when the inputs fail validation.
    pub fn fixed(partitions: &[Partition], processes: &[Process]) -> Result<Self, SimError> {
        Ok(Self {
            first: generate_partition_trace(partitions, processes, FitPolicy::First)?,
            best: generate_partition_trace(partitions, processes, FitPolicy::Best)?,
            worst: generate_partition_trace(partitions, processes, FitPolicy::Worst)?,
        })
    }

    /// Compares the three policies over a dynamic-partitioning scenario.
    ///
    /// # Errors
    ///
    /// Returns [`SimError`] when the inputs fail validation.
    pub fn dynamic(capacity: u64, processes: &[Process]) -> Result<Self, SimError> {
        Ok(Self {
            first: generate_trace(capacity, processes, FitPolicy::First)?,
            best: generate_trace(capacity, processes, FitPolicy::Best)?,
            worst: generate_trace(capacity, processes, FitPolicy::Worst)?,
        })
    }

    /// The traces paired with their policies, in policy order.
    pub fn traces(&self) -> [(FitPolicy, &Trace); 3] {
        [
            (FitPolicy::First, &self.first),
            (FitPolicy::Best, &self.best),
            (FitPolicy::Worst, &self.worst),
        ]
    }

    /// Length of the longest trace; the playback bound for the shared cursor.
    pub fn max_len(&self) -> usize {
        self.first.len().max(self.best.len()).max(self.worst.len())
    }

    /// Serializes all three traces to pretty-printed JSON, keyed by policy.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error, which cannot occur for traces
    /// produced by this crate.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The frame of each run at the shared cursor position `step`, clamped
    /// per trace.
    pub fn frames_at(&self, step: usize) -> [Option<&TraceFrame>; 3] {
        [
            self.first.frame_at(step),
            self.best.frame_at(step),
            self.worst.frame_at(step),
        ]
    }
}
