//! Trace frames and the trace container.
//!
//! A [`TraceFrame`] is an immutable snapshot of simulation state at one
//! instant, the unit exchanged with any presentation layer. Every frame is an
//! owned deep copy: mutating later simulation state is never observable
//! through an earlier frame. Frames are appended to a [`Trace`] and never
//! mutated or removed, which is what makes playback, scrubbing, and export
//! safe without locking.

use serde::{Deserialize, Serialize};

use crate::common::process::{FinishedProcess, Process};
use crate::mem::image::MemoryImage;
use crate::mem::partition::{Allocation, Partition};

/// The memory half of a frame: either a dynamic image or the fixed-partition
/// declaration/allocation pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FrameState {
    /// Dynamic-partitioning snapshot.
    Dynamic {
        /// The memory image at this instant.
        memory: MemoryImage,
    },
    /// Fixed-partition snapshot.
    Fixed {
        /// The declared partitions (constant across a run).
        partitions: Vec<Partition>,
        /// Allocation records present at this instant.
        allocations: Vec<Allocation>,
    },
}

/// One immutable snapshot of simulation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Logical clock value at capture time.
    pub tick: u64,
    /// Event label, e.g. `start`, `arrive P1`, `allocate P1`, `done`, `end`.
    pub event: String,
    /// Memory or partition snapshot.
    pub state: FrameState,
    /// Processes waiting for placement, in queue order.
    pub waiting: Vec<Process>,
    /// Allocated processes with their allocation ticks, in placement order.
    pub finished: Vec<FinishedProcess>,
    /// Process the event concerns, for highlighting.
    pub active: Option<String>,
}

impl TraceFrame {
    /// Captures a frame by deep-copying the live simulation state.
    pub(crate) fn capture(
        tick: u64,
        event: impl Into<String>,
        state: FrameState,
        waiting: &[Process],
        finished: &[FinishedProcess],
        active: Option<&str>,
    ) -> Self {
        Self {
            tick,
            event: event.into(),
            state,
            waiting: waiting.to_vec(),
            finished: finished.to_vec(),
            active: active.map(str::to_string),
        }
    }
}

/// The ordered, immutable history of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    frames: Vec<TraceFrame>,
}

impl Trace {
    /// Appends a frame. Frames are never mutated or removed afterwards.
    pub(crate) fn push(&mut self, frame: TraceFrame) {
        self.frames.push(frame);
    }

    /// All frames in order.
    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the trace holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The final frame, if any.
    pub fn last(&self) -> Option<&TraceFrame> {
        self.frames.last()
    }

    /// The frame at `step`, clamped to the final frame when `step` runs past
    /// the end. Scrub cursors rely on this clamp; `None` only for an empty
    /// trace.
    pub fn frame_at(&self, step: usize) -> Option<&TraceFrame> {
        if self.frames.is_empty() {
            return None;
        }
        let index = step.min(self.frames.len() - 1);
        self.frames.get(index)
    }

    /// Iterates the frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceFrame> {
        self.frames.iter()
    }

    /// Serializes the trace to pretty-printed JSON for file export.
    ///
    /// Every frame field round-trips; deserializing the output reproduces the
    /// trace exactly.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error, which cannot occur for traces
    /// produced by this crate.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceFrame;
    type IntoIter = std::slice::Iter<'a, TraceFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
