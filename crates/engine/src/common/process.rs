//! Simulated process types.
//!
//! A process moves through three lifecycle states, represented by which
//! collection holds it rather than by a state field:
//! 1. **Pending:** declared but not yet arrived (`arrival` is in the future).
//! 2. **Waiting:** arrived and queued for placement.
//! 3. **Allocated:** placed into memory; terminal. [`FinishedProcess`] records
//!    the tick at which placement happened.
//!
//! There is no freed or terminated state: once allocated, a process occupies
//! its memory for the remainder of the run.

use serde::{Deserialize, Serialize};

/// A process requesting memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Requested size in KB.
    pub size: u64,
    /// Tick at which the process becomes eligible for placement.
    #[serde(default)]
    pub arrival: u64,
}

impl Process {
    /// Creates a process from an id, a size, and an arrival tick.
    pub fn new(id: impl Into<String>, size: u64, arrival: u64) -> Self {
        Self {
            id: id.into(),
            size,
            arrival,
        }
    }
}

/// A process in its terminal state: allocated, with the allocation tick.
///
/// `finish_tick` is the tick at which the process was matched to memory, not
/// a completion time; the simulation does not model execution duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedProcess {
    /// The original process description.
    #[serde(flatten)]
    pub process: Process,
    /// Tick at which the process was allocated.
    pub finish_tick: u64,
}

impl FinishedProcess {
    /// Turnaround of the process: ticks between arrival and allocation.
    ///
    /// Because allocation is the terminal event, this is also the time the
    /// process spent waiting.
    pub fn turnaround(&self) -> u64 {
        self.finish_tick.saturating_sub(self.process.arrival)
    }
}
