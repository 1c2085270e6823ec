//! Scenario configuration for the allocation simulator.
//!
//! This module defines the caller-facing input of a run and validates it. It
//! provides:
//! 1. **Defaults:** The built-in demo scenario used when no input is given.
//! 2. **Structure:** A serde-deserializable [`Config`] covering both modes.
//! 3. **Validation:** The `InvalidInput` checks applied before any simulation
//!    starts; nothing runs when any of them fails.
//!
//! Configuration is supplied as JSON (the CLI's scenario files) or built in
//! code; `Config::default()` seeds the demo scenario.

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;
use crate::common::policy::FitPolicy;
use crate::common::process::Process;
use crate::mem::partition::Partition;

/// Default scenario constants.
mod defaults {
    /// Demo memory capacity for dynamic mode (KB).
    pub const CAPACITY: u64 = 1000;
}

/// One complete simulation scenario.
///
/// Covers both modes: `capacity` drives dynamic runs, `partitions` drives
/// fixed runs, and `processes`/`policy` are shared. Fields omitted from a
/// JSON scenario fall back to the demo defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Total memory for dynamic mode, in KB. Must be greater than zero.
    pub capacity: u64,
    /// Fit policy for single-policy runs.
    pub policy: FitPolicy,
    /// Processes to place. Ids must be unique and non-empty, sizes non-zero.
    pub processes: Vec<Process>,
    /// Fixed partitions for fixed/comparison modes. May be empty for
    /// dynamic-only scenarios.
    pub partitions: Vec<Partition>,
}

impl Default for Config {
    /// The demo scenario: three processes against 1000 KB of memory or three
    /// fixed partitions.
    fn default() -> Self {
        Self {
            capacity: defaults::CAPACITY,
            policy: FitPolicy::First,
            processes: vec![
                Process::new("P1", 200, 0),
                Process::new("P2", 350, 1),
                Process::new("P3", 100, 2),
            ],
            partitions: vec![
                Partition::new("Part1", 300),
                Partition::new("Part2", 200),
                Partition::new("Part3", 400),
            ],
        }
    }
}

impl Config {
    /// Checks every input rule that applies to both modes.
    ///
    /// The partition list may be empty here; fixed-partition runs reject that
    /// case themselves.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimError`] found.
    pub fn validate(&self) -> Result<(), SimError> {
        validate_capacity(self.capacity)?;
        validate_processes(&self.processes)?;
        if !self.partitions.is_empty() {
            validate_partitions(&self.partitions)?;
        }
        Ok(())
    }
}

/// Rejects a zero memory capacity.
///
/// # Errors
///
/// Returns [`SimError::ZeroCapacity`] when `capacity` is zero.
pub fn validate_capacity(capacity: u64) -> Result<(), SimError> {
    if capacity == 0 {
        return Err(SimError::ZeroCapacity);
    }
    Ok(())
}

/// Rejects empty ids, duplicate ids, and zero sizes in a process list.
///
/// # Errors
///
/// Returns the first [`SimError`] found, scanning in input order.
pub fn validate_processes(processes: &[Process]) -> Result<(), SimError> {
    let mut seen = std::collections::HashSet::new();
    for process in processes {
        if process.id.is_empty() {
            return Err(SimError::EmptyProcessId);
        }
        if !seen.insert(process.id.as_str()) {
            return Err(SimError::DuplicateProcessId(process.id.clone()));
        }
        if process.size == 0 {
            return Err(SimError::ZeroProcessSize {
                id: process.id.clone(),
            });
        }
    }
    Ok(())
}

/// Rejects empty ids, duplicate ids, and zero sizes in a partition list.
///
/// # Errors
///
/// Returns the first [`SimError`] found, scanning in declaration order.
pub fn validate_partitions(partitions: &[Partition]) -> Result<(), SimError> {
    let mut seen = std::collections::HashSet::new();
    for partition in partitions {
        if partition.id.is_empty() {
            return Err(SimError::EmptyPartitionId);
        }
        if !seen.insert(partition.id.as_str()) {
            return Err(SimError::DuplicatePartitionId(partition.id.clone()));
        }
        if partition.size == 0 {
            return Err(SimError::ZeroPartitionSize {
                id: partition.id.clone(),
            });
        }
    }
    Ok(())
}
