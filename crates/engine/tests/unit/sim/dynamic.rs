//! # Dynamic Allocator Tests
//!
//! This module verifies the dynamic-fit tick loop end to end: the reference
//! first-fit scenario, invariants over every emitted frame, the termination
//! horizon for unsatisfiable processes, queue ordering, determinism, and
//! input validation.

use memsim_core::FitPolicy;
use memsim_core::common::{Process, SimError};
use memsim_core::mem::Segment;
use memsim_core::sim::generate_trace;
use memsim_core::stats::FrameStats;
use pretty_assertions::assert_eq;

use crate::common::harness::{
    assert_trace_invariants, image_of, run_dynamic, sample_processes,
};

/// Reference scenario: P1 is placed at 0 on tick 0, P2 at 200 on tick 1,
/// P3 at 550 on tick 2, and the final utilization is 65%.
#[test]
fn first_fit_reference_scenario() {
    let trace = run_dynamic(FitPolicy::First);

    let events: Vec<&str> = trace.iter().map(|frame| frame.event.as_str()).collect();
    assert_eq!(
        events,
        vec![
            "start",
            "arrive P1",
            "allocate P1",
            "arrive P2",
            "allocate P2",
            "arrive P3",
            "allocate P3",
            "done",
            "end",
        ]
    );

    let last = trace.last().unwrap_or_else(|| panic!("trace is never empty"));
    assert_eq!(last.tick, 2);
    assert_eq!(
        image_of(&last.state).segments(),
        &[
            Segment::occupied(0, 200, "P1"),
            Segment::occupied(200, 350, "P2"),
            Segment::occupied(550, 100, "P3"),
            Segment::free(650, 350),
        ]
    );
    assert_eq!(FrameStats::of(&last.state).utilization(), 65);

    let finish_ticks: Vec<u64> = last.finished.iter().map(|done| done.finish_tick).collect();
    assert_eq!(finish_ticks, vec![0, 1, 2]);
}

/// Every frame of a run upholds the coverage and merge invariants.
#[test]
fn every_frame_upholds_invariants() {
    for policy in FitPolicy::ALL {
        assert_trace_invariants(&run_dynamic(policy));
    }
}

/// The trace opens with a `start` frame over an empty image.
#[test]
fn trace_opens_with_empty_image() {
    let trace = run_dynamic(FitPolicy::First);
    let first = &trace.frames()[0];
    assert_eq!(first.tick, 0);
    assert_eq!(first.event, "start");
    assert_eq!(image_of(&first.state).segments(), &[Segment::free(0, 1000)]);
    assert!(first.waiting.is_empty());
    assert!(first.finished.is_empty());
}

/// A process larger than the whole memory never leaves the waiting set; the
/// trace still terminates, one tick past the horizon.
#[test]
fn unsatisfiable_process_hits_the_horizon() {
    let processes = vec![Process::new("Big", 600, 0)];
    let trace = generate_trace(500, &processes, FitPolicy::First)
        .unwrap_or_else(|err| panic!("valid input: {err}"));

    let events: Vec<&str> = trace.iter().map(|frame| frame.event.as_str()).collect();
    assert_eq!(events, vec!["start", "arrive Big", "end"]);

    // Horizon: last_arrival (0) + 1 process * 4 + 10 = 14; `end` lands at 15.
    let last = trace.last().unwrap_or_else(|| panic!("trace is never empty"));
    assert_eq!(last.tick, 15);
    assert_eq!(last.waiting.len(), 1);
    assert_eq!(last.waiting[0].id, "Big");
    assert!(last.finished.is_empty());
}

/// A blocked process at the queue front does not starve the rest of the
/// queue: the scan continues past it within the same tick.
#[test]
fn queue_scan_skips_blocked_process() {
    let processes = vec![Process::new("Big", 600, 0), Process::new("Small", 100, 0)];
    let trace = generate_trace(500, &processes, FitPolicy::First)
        .unwrap_or_else(|err| panic!("valid input: {err}"));

    let last = trace.last().unwrap_or_else(|| panic!("trace is never empty"));
    assert_eq!(last.finished.len(), 1);
    assert_eq!(last.finished[0].process.id, "Small");
    assert_eq!(last.waiting.len(), 1);
    assert_eq!(last.waiting[0].id, "Big");
}

/// Arrival ties are broken by input order: the earlier-listed process is
/// placed first.
#[test]
fn arrival_ties_keep_input_order() {
    let processes = vec![Process::new("A", 100, 0), Process::new("B", 100, 0)];
    let trace = generate_trace(1000, &processes, FitPolicy::First)
        .unwrap_or_else(|err| panic!("valid input: {err}"));

    let last = trace.last().unwrap_or_else(|| panic!("trace is never empty"));
    let order: Vec<&str> = last
        .finished
        .iter()
        .map(|done| done.process.id.as_str())
        .collect();
    assert_eq!(order, vec!["A", "B"]);
    assert_eq!(image_of(&last.state).segments()[0].owner.as_deref(), Some("A"));
}

/// An empty process list finishes immediately: start, done, end at tick 0.
#[test]
fn empty_process_list_finishes_at_tick_zero() {
    let trace = generate_trace(100, &[], FitPolicy::First)
        .unwrap_or_else(|err| panic!("valid input: {err}"));
    let events: Vec<&str> = trace.iter().map(|frame| frame.event.as_str()).collect();
    assert_eq!(events, vec!["start", "done", "end"]);
    assert_eq!(trace.last().unwrap_or_else(|| panic!("non-empty")).tick, 0);
}

/// Two runs over identical inputs serialize byte-identically.
#[test]
fn identical_inputs_yield_identical_traces() {
    let a = run_dynamic(FitPolicy::Best);
    let b = run_dynamic(FitPolicy::Best);
    assert_eq!(a, b);
    let json_a = a.to_json_pretty().unwrap_or_else(|err| panic!("serialize: {err}"));
    let json_b = b.to_json_pretty().unwrap_or_else(|err| panic!("serialize: {err}"));
    assert_eq!(json_a, json_b);
}

/// Frames are isolated value copies: later placements never show up in
/// frames captured earlier.
#[test]
fn earlier_frames_are_isolated_from_later_state() {
    let trace = run_dynamic(FitPolicy::First);
    // The `arrive P2` frame was captured before P2 was placed.
    let frame = trace
        .iter()
        .find(|frame| frame.event == "arrive P2")
        .unwrap_or_else(|| panic!("P2 arrives"));
    let owners: Vec<&str> = image_of(&frame.state)
        .segments()
        .iter()
        .filter_map(|seg| seg.owner.as_deref())
        .collect();
    assert_eq!(owners, vec!["P1"]);
    assert_eq!(frame.waiting.len(), 1);
}

/// Zero capacity is rejected before anything runs.
#[test]
fn zero_capacity_is_rejected() {
    let result = generate_trace(0, &sample_processes(), FitPolicy::First);
    assert_eq!(result, Err(SimError::ZeroCapacity));
}

/// A zero-size process is rejected before anything runs.
#[test]
fn zero_size_process_is_rejected() {
    let processes = vec![Process::new("P1", 0, 0)];
    let result = generate_trace(100, &processes, FitPolicy::First);
    assert_eq!(
        result,
        Err(SimError::ZeroProcessSize {
            id: "P1".to_string()
        })
    );
}
