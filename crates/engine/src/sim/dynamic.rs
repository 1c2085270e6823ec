//! The dynamic-fit allocator.
//!
//! Places processes into a contiguous [`MemoryImage`] by choosing a hole
//! under the fit policy, splitting it, and letting normalization merge what
//! remains. Allocation is permanent: holes only ever shrink over a run.

use crate::common::error::SimError;
use crate::common::policy::FitPolicy;
use crate::common::process::Process;
use crate::config;
use crate::mem::image::MemoryImage;
use crate::sim::engine::{self, Allocator};
use crate::sim::frame::{FrameState, Trace};

/// Dynamic-partitioning placement backend.
struct DynamicAllocator {
    image: MemoryImage,
}

impl Allocator for DynamicAllocator {
    fn try_place(&mut self, process: &Process, policy: FitPolicy) -> Option<String> {
        let candidates = self
            .image
            .free_regions()
            .enumerate()
            .map(|(index, region)| (index, region.size));
        let chosen = policy.choose(candidates, process.size)?;
        let _start = self.image.place(chosen, &process.id, process.size)?;
        Some(format!("allocate {}", process.id))
    }

    fn snapshot(&self) -> FrameState {
        FrameState::Dynamic {
            memory: self.image.clone(),
        }
    }
}

/// Runs a dynamic-partitioning simulation and returns its trace.
///
/// Validates the inputs first: zero capacity, zero-size processes, empty or
/// duplicate process ids are rejected with [`SimError`] before anything runs.
/// The trace always opens with a `start` frame over an empty image and closes
/// with an `end` frame; processes that never fit remain in the final frame's
/// waiting set rather than failing the run.
///
/// # Errors
///
/// Returns [`SimError`] when the capacity or the process list is invalid.
pub fn generate_trace(
    capacity: u64,
    processes: &[Process],
    policy: FitPolicy,
) -> Result<Trace, SimError> {
    config::validate_capacity(capacity)?;
    config::validate_processes(processes)?;

    let backend = DynamicAllocator {
        image: MemoryImage::new(capacity),
    };
    Ok(engine::run(backend, processes, policy))
}
