//! Fragmentation and utilization metrics.
//!
//! Pure read-only projections over trace frames, consumed by dashboards and
//! the CLI report. This module provides:
//! 1. **Frame metrics:** Utilization plus the mode-specific fragmentation
//!    numbers (hole counts and sizes, partition waste).
//! 2. **Run metrics:** Step counts and waiting/turnaround averages over a
//!    finished trace.
//! 3. **Report:** A sectioned plain-text summary printed after a run.
//!
//! Nothing here mutates a frame; every function recomputes from the snapshot
//! it is given.

use crate::common::process::Process;
use crate::mem::image::MemoryImage;
use crate::mem::partition::{Allocation, Partition};
use crate::sim::frame::{FrameState, Trace};

/// Hole sizes below this threshold count as small-hole fragmentation (KB).
pub const SMALL_HOLE_THRESHOLD: u64 = 32;

/// Rounds `part / total` to the nearest percent; zero when `total` is zero.
fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Metrics of one dynamic-mode frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicFrameStats {
    /// Occupied share of capacity, rounded to the nearest percent.
    pub utilization: u32,
    /// Number of holes.
    pub free_blocks: usize,
    /// Size of the largest hole.
    pub largest_free: u64,
    /// Total free space scattered across holes (external fragmentation).
    pub external_frag: u64,
}

impl DynamicFrameStats {
    /// Computes the metrics of a memory image.
    pub fn of(image: &MemoryImage) -> Self {
        let mut free_blocks = 0;
        let mut largest_free = 0;
        let mut external_frag = 0;
        for hole in image.free_regions() {
            free_blocks += 1;
            largest_free = largest_free.max(hole.size);
            external_frag += hole.size;
        }
        Self {
            utilization: percent(image.occupied_total(), image.capacity()),
            free_blocks,
            largest_free,
            external_frag,
        }
    }
}

/// Metrics of one fixed-mode frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFrameStats {
    /// Allocated share of total declared partition size, rounded to the
    /// nearest percent.
    pub utilization: u32,
    /// Partitions without an allocation record.
    pub free_partitions: usize,
    /// Partitions with an allocation record.
    pub allocated_partitions: usize,
    /// Total internal fragmentation: Σ (partition size − owner size) over
    /// allocated partitions.
    pub total_waste: u64,
}

impl FixedFrameStats {
    /// Computes the metrics of a partition snapshot.
    pub fn of(partitions: &[Partition], allocations: &[Allocation]) -> Self {
        let total_size: u64 = partitions.iter().map(|part| part.size).sum();
        let allocated_size: u64 = allocations.iter().map(|alloc| alloc.owner_size).sum();
        let total_waste = allocations
            .iter()
            .filter_map(|alloc| {
                partitions
                    .iter()
                    .find(|part| part.id == alloc.partition_id)
                    .map(|part| part.size - alloc.owner_size)
            })
            .sum();
        Self {
            utilization: percent(allocated_size, total_size),
            free_partitions: partitions.len() - allocations.len(),
            allocated_partitions: allocations.len(),
            total_waste,
        }
    }
}

/// Metrics of one frame, whichever mode produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStats {
    /// Dynamic-mode metrics.
    Dynamic(DynamicFrameStats),
    /// Fixed-mode metrics.
    Fixed(FixedFrameStats),
}

impl FrameStats {
    /// Computes the metrics of a frame's memory snapshot.
    pub fn of(state: &FrameState) -> Self {
        match state {
            FrameState::Dynamic { memory } => Self::Dynamic(DynamicFrameStats::of(memory)),
            FrameState::Fixed {
                partitions,
                allocations,
            } => Self::Fixed(FixedFrameStats::of(partitions, allocations)),
        }
    }

    /// Utilization percent, regardless of mode.
    pub fn utilization(&self) -> u32 {
        match self {
            Self::Dynamic(stats) => stats.utilization,
            Self::Fixed(stats) => stats.utilization,
        }
    }
}

/// Total size of holes smaller than `threshold`.
///
/// Small holes are free space in name only: no realistic request fits them.
pub fn small_hole_fragmentation(image: &MemoryImage, threshold: u64) -> u64 {
    image
        .free_regions()
        .filter(|hole| hole.size < threshold)
        .map(|hole| hole.size)
        .sum()
}

/// Summary of one finished trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of frames in the trace.
    pub steps: usize,
    /// Processes that were allocated.
    pub finished: usize,
    /// Processes still waiting in the final frame (unsatisfiable or starved
    /// past the horizon).
    pub still_waiting: usize,
    /// Average ticks from arrival to allocation over finished processes,
    /// rounded to the nearest tick. Equals the average waiting time because
    /// allocation is the terminal event.
    pub avg_turnaround: u64,
}

impl RunStats {
    /// Computes the summary of a trace from its final frame.
    pub fn of(trace: &Trace) -> Self {
        let Some(last) = trace.last() else {
            return Self {
                steps: 0,
                finished: 0,
                still_waiting: 0,
                avg_turnaround: 0,
            };
        };
        let finished = last.finished.len();
        let avg_turnaround = if finished == 0 {
            0
        } else {
            let total: u64 = last.finished.iter().map(|done| done.turnaround()).sum();
            (total as f64 / finished as f64).round() as u64
        };
        Self {
            steps: trace.len(),
            finished,
            still_waiting: last.waiting.len(),
            avg_turnaround,
        }
    }
}

/// Summary of a partition declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSummary {
    /// Sum of all declared partition sizes.
    pub total_size: u64,
    /// Number of declared partitions.
    pub count: usize,
    /// Size of the largest declared partition.
    pub largest: u64,
}

impl PartitionSummary {
    /// Computes the summary of a declaration list.
    pub fn of(partitions: &[Partition]) -> Self {
        Self {
            total_size: partitions.iter().map(|part| part.size).sum(),
            count: partitions.len(),
            largest: partitions.iter().map(|part| part.size).max().unwrap_or(0),
        }
    }
}

/// Section names for selective report output.
///
/// Valid section identifiers: `"summary"`, `"memory"`, `"processes"`. Pass an
/// empty slice to `print_sections` to print all sections.
pub const REPORT_SECTIONS: &[&str] = &["summary", "memory", "processes"];

/// Prints only the requested report sections for a trace to stdout.
///
/// Each element of `sections` should be one of [`REPORT_SECTIONS`]; an empty
/// slice prints everything (same as [`print`]).
pub fn print_sections(trace: &Trace, sections: &[String]) {
    let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
    let Some(last) = trace.last() else {
        println!("empty trace");
        return;
    };
    let run = RunStats::of(trace);

    if want("summary") {
        println!("==========================================================");
        println!("MEMORY ALLOCATION SIMULATION");
        println!("==========================================================");
        println!("steps                    {}", run.steps);
        println!("final_tick               {}", last.tick);
        println!("final_event              {}", last.event);
        println!(
            "utilization              {}%",
            FrameStats::of(&last.state).utilization()
        );
        println!("----------------------------------------------------------");
    }
    if want("memory") {
        match &last.state {
            FrameState::Dynamic { memory } => {
                let stats = DynamicFrameStats::of(memory);
                println!("MEMORY (dynamic)");
                println!("  capacity               {} KB", memory.capacity());
                println!("  free_blocks            {}", stats.free_blocks);
                println!("  largest_free           {} KB", stats.largest_free);
                println!("  external_frag          {} KB", stats.external_frag);
                println!(
                    "  small_holes(<{})       {} KB",
                    SMALL_HOLE_THRESHOLD,
                    small_hole_fragmentation(memory, SMALL_HOLE_THRESHOLD)
                );
            }
            FrameState::Fixed {
                partitions,
                allocations,
            } => {
                let stats = FixedFrameStats::of(partitions, allocations);
                let summary = PartitionSummary::of(partitions);
                println!("MEMORY (fixed partitions)");
                println!("  declared               {} KB", summary.total_size);
                println!("  partitions             {}", summary.count);
                println!("  largest_partition      {} KB", summary.largest);
                println!("  allocated_partitions   {}", stats.allocated_partitions);
                println!("  free_partitions        {}", stats.free_partitions);
                println!("  total_waste            {} KB", stats.total_waste);
            }
        }
        println!("----------------------------------------------------------");
    }
    if want("processes") {
        println!("PROCESSES");
        println!("  finished               {}", run.finished);
        println!("  still_waiting          {}", run.still_waiting);
        println!("  avg_turnaround         {} tick(s)", run.avg_turnaround);
        for done in &last.finished {
            println!(
                "  {:<8} {:>6} KB  arrived t={} allocated t={}",
                done.process.id, done.process.size, done.process.arrival, done.finish_tick
            );
        }
        for process in &last.waiting {
            print_waiting(process);
        }
    }
    println!("==========================================================");
}

fn print_waiting(process: &Process) {
    println!(
        "  {:<8} {:>6} KB  arrived t={} never placed",
        process.id, process.size, process.arrival
    );
}

/// Prints the full report for a trace to stdout.
///
/// Equivalent to `print_sections(trace, &[])`.
pub fn print(trace: &Trace) {
    print_sections(trace, &[]);
}
