//! Fixed partitions and their allocation table.
//!
//! In fixed-partition mode memory is a predeclared list of non-resizable
//! slots. The declaration list never changes during a run; placement appends
//! records to an allocation table instead of splitting regions. Leftover
//! space inside an occupied partition (internal fragmentation) is only ever
//! derived as a statistic, never reclaimed.

use serde::{Deserialize, Serialize};

/// A predeclared, non-resizable memory slot holding at most one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Slot size in KB.
    pub size: u64,
}

impl Partition {
    /// Creates a partition from an id and a size.
    pub fn new(id: impl Into<String>, size: u64) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

/// One occupied partition: which process holds it and at what size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Identifier of the occupied partition.
    pub partition_id: String,
    /// Identifier of the owning process.
    pub owner: String,
    /// Size the owner requested; `partition.size - owner_size` is waste.
    pub owner_size: u64,
}

/// The fixed-partition memory state: declarations plus an append-only
/// allocation table.
///
/// At most one allocation exists per partition, and records are only ever
/// added within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    partitions: Vec<Partition>,
    allocations: Vec<Allocation>,
}

impl PartitionTable {
    /// Creates a table over the declared partitions with no allocations.
    pub fn new(partitions: Vec<Partition>) -> Self {
        Self {
            partitions,
            allocations: Vec::new(),
        }
    }

    /// The declared partitions, in declaration order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// All allocation records, in placement order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// The allocation occupying `partition_id`, if any.
    pub fn allocation_for(&self, partition_id: &str) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|alloc| alloc.partition_id == partition_id)
    }

    /// Unoccupied partitions with their declaration index, in declaration
    /// order. Fit policies scan this list, so declaration order is the
    /// tie-break order.
    pub fn free_partitions(&self) -> impl Iterator<Item = (usize, &Partition)> {
        self.partitions
            .iter()
            .enumerate()
            .filter(|(_, part)| self.allocation_for(&part.id).is_none())
    }

    /// Records `owner` as occupying the partition at declaration index
    /// `decl_index`.
    ///
    /// Returns the partition id on success, or `None` when the index is out
    /// of range, the partition is already occupied, or it is too small.
    pub fn assign(&mut self, decl_index: usize, owner: &str, owner_size: u64) -> Option<String> {
        let partition = self.partitions.get(decl_index)?;
        if partition.size < owner_size || self.allocation_for(&partition.id).is_some() {
            return None;
        }
        let id = partition.id.clone();
        self.allocations.push(Allocation {
            partition_id: id.clone(),
            owner: owner.to_string(),
            owner_size,
        });
        Some(id)
    }
}
