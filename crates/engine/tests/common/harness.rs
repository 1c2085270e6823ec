//! Scenario builders, trace runners, and invariant assertions.
//!
//! The sample scenario here is the one the reference scenarios are written
//! against: three processes (P1 200 KB @ t0, P2 350 KB @ t1, P3 100 KB @ t2)
//! placed into 1000 KB of dynamic memory or three fixed partitions
//! (Part1 300 KB, Part2 200 KB, Part3 400 KB).

use memsim_core::FitPolicy;
use memsim_core::common::Process;
use memsim_core::mem::{MemoryImage, Partition};
use memsim_core::sim::{FrameState, Trace, generate_partition_trace, generate_trace};

/// Capacity of the sample dynamic-memory scenario.
pub const SAMPLE_CAPACITY: u64 = 1000;

/// Initializes test logging once; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The three sample processes.
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 200, 0),
        Process::new("P2", 350, 1),
        Process::new("P3", 100, 2),
    ]
}

/// The three sample partitions.
pub fn sample_partitions() -> Vec<Partition> {
    vec![
        Partition::new("Part1", 300),
        Partition::new("Part2", 200),
        Partition::new("Part3", 400),
    ]
}

/// Runs the sample dynamic scenario under `policy`.
pub fn run_dynamic(policy: FitPolicy) -> Trace {
    init_logging();
    generate_trace(SAMPLE_CAPACITY, &sample_processes(), policy)
        .unwrap_or_else(|err| panic!("sample dynamic scenario must be valid: {err}"))
}

/// Runs the sample fixed-partition scenario under `policy`.
pub fn run_fixed(policy: FitPolicy) -> Trace {
    init_logging();
    generate_partition_trace(&sample_partitions(), &sample_processes(), policy)
        .unwrap_or_else(|err| panic!("sample fixed scenario must be valid: {err}"))
}

/// Asserts every segment-list invariant of a memory image: sorted, gapless,
/// exact coverage of `[0, capacity)`, no zero-size segment, no adjacent
/// holes.
pub fn assert_image_invariants(image: &MemoryImage) {
    let mut cursor = 0;
    let mut prev_free = false;
    for seg in image.segments() {
        assert_eq!(seg.start, cursor, "segments must be sorted and gapless");
        assert!(seg.size > 0, "zero-size segment at {}", seg.start);
        assert!(
            !(prev_free && seg.is_free()),
            "adjacent free segments at {}",
            seg.start
        );
        prev_free = seg.is_free();
        cursor = seg.end();
    }
    assert_eq!(cursor, image.capacity(), "segments must cover [0, capacity)");
}

/// Asserts the image invariants over every frame of a dynamic trace.
pub fn assert_trace_invariants(trace: &Trace) {
    for frame in trace {
        match &frame.state {
            FrameState::Dynamic { memory } => assert_image_invariants(memory),
            FrameState::Fixed { .. } => panic!("expected a dynamic trace"),
        }
    }
}

/// The memory image of a dynamic frame.
pub fn image_of(state: &FrameState) -> &MemoryImage {
    match state {
        FrameState::Dynamic { memory } => memory,
        FrameState::Fixed { .. } => panic!("expected a dynamic frame"),
    }
}
