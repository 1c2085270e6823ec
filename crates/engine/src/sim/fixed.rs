//! The fixed-partition allocator.
//!
//! Structurally the same driver loop as the dynamic mode, but the "free
//! regions" are the unoccupied entries of an immutable partition list, in
//! declaration order. Placement appends an allocation record; partitions are
//! never subdivided, and the space a process leaves unused inside its
//! partition is tracked only as a statistic.

use crate::common::error::SimError;
use crate::common::policy::FitPolicy;
use crate::common::process::Process;
use crate::config;
use crate::mem::partition::{Partition, PartitionTable};
use crate::sim::engine::{self, Allocator};
use crate::sim::frame::{FrameState, Trace};

/// Fixed-partition placement backend.
struct FixedAllocator {
    table: PartitionTable,
}

impl Allocator for FixedAllocator {
    fn try_place(&mut self, process: &Process, policy: FitPolicy) -> Option<String> {
        let candidates = self
            .table
            .free_partitions()
            .map(|(decl_index, partition)| (decl_index, partition.size))
            .collect::<Vec<_>>();
        let chosen = policy.choose(candidates, process.size)?;
        let partition_id = self.table.assign(chosen, &process.id, process.size)?;
        Some(format!("allocate {} in {partition_id}", process.id))
    }

    fn snapshot(&self) -> FrameState {
        FrameState::Fixed {
            partitions: self.table.partitions().to_vec(),
            allocations: self.table.allocations().to_vec(),
        }
    }
}

/// Runs a fixed-partition simulation and returns its trace.
///
/// First fit selects the earliest-declared adequate partition; best and worst
/// fit select the minimal and maximal adequate size with ties broken by
/// declaration order. The free list is never sorted by size or id.
///
/// # Errors
///
/// Returns [`SimError`] when the partition list is empty or either input list
/// is invalid.
pub fn generate_partition_trace(
    partitions: &[Partition],
    processes: &[Process],
    policy: FitPolicy,
) -> Result<Trace, SimError> {
    if partitions.is_empty() {
        return Err(SimError::NoPartitions);
    }
    config::validate_partitions(partitions)?;
    config::validate_processes(processes)?;

    let backend = FixedAllocator {
        table: PartitionTable::new(partitions.to_vec()),
    };
    Ok(engine::run(backend, processes, policy))
}
