//! # Trace and Frame Tests
//!
//! This module verifies the trace container's cursor clamping and the JSON
//! export format: tagged frame states, transparent trace encoding, and exact
//! round-tripping.

use memsim_core::FitPolicy;
use memsim_core::sim::Trace;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::harness::{run_dynamic, run_fixed};

/// `frame_at` clamps past-the-end cursors to the final frame.
#[test]
fn frame_at_clamps_to_the_final_frame() {
    let trace = run_dynamic(FitPolicy::First);
    assert_eq!(trace.frame_at(0), trace.frames().first());
    assert_eq!(trace.frame_at(trace.len() - 1), trace.last());
    assert_eq!(trace.frame_at(trace.len() + 100), trace.last());
}

/// An empty trace has no frame at any cursor position.
#[test]
fn empty_trace_has_no_frames() {
    let trace = Trace::default();
    assert!(trace.is_empty());
    assert_eq!(trace.frame_at(0), None);
    assert_eq!(trace.last(), None);
}

/// A dynamic trace round-trips through JSON exactly.
#[test]
fn dynamic_trace_round_trips_through_json() {
    let trace = run_dynamic(FitPolicy::Best);
    let json = trace
        .to_json_pretty()
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    let back: Trace =
        serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));
    assert_eq!(back, trace);
}

/// A fixed trace round-trips through JSON exactly.
#[test]
fn fixed_trace_round_trips_through_json() {
    let trace = run_fixed(FitPolicy::Worst);
    let json = trace
        .to_json_pretty()
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    let back: Trace =
        serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));
    assert_eq!(back, trace);
}

/// The export encodes the trace as a bare frame array, each frame's state
/// tagged with its `mode`.
#[test]
fn export_format_is_a_tagged_frame_array() {
    let trace = run_dynamic(FitPolicy::First);
    let json = trace
        .to_json_pretty()
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    let value: Value =
        serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));

    let frames = value
        .as_array()
        .unwrap_or_else(|| panic!("trace must encode as an array"));
    assert_eq!(frames.len(), trace.len());

    let first = &frames[0];
    assert_eq!(first["tick"], 0);
    assert_eq!(first["event"], "start");
    assert_eq!(first["state"]["mode"], "dynamic");
    assert!(first["state"]["memory"]["segments"].is_array());
}

/// Fixed frames carry the `fixed` tag with partitions and allocations.
#[test]
fn fixed_frames_tag_their_mode() {
    let trace = run_fixed(FitPolicy::First);
    let json = trace
        .to_json_pretty()
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    let value: Value =
        serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));

    let last = value
        .as_array()
        .and_then(|frames| frames.last())
        .unwrap_or_else(|| panic!("trace must encode as a non-empty array"));
    assert_eq!(last["state"]["mode"], "fixed");
    assert_eq!(last["state"]["partitions"].as_array().map(Vec::len), Some(3));
    assert_eq!(last["state"]["allocations"].as_array().map(Vec::len), Some(3));
}

/// Segment kinds encode as lowercase strings and holes have no owner.
#[test]
fn segments_encode_kind_and_owner() {
    let trace = run_dynamic(FitPolicy::First);
    let json = trace
        .to_json_pretty()
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    let value: Value =
        serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));

    let segments = value
        .as_array()
        .and_then(|frames| frames.last())
        .map(|frame| &frame["state"]["memory"]["segments"])
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("final frame must carry segments"));

    assert_eq!(segments[0]["kind"], "occupied");
    assert_eq!(segments[0]["owner"], "P1");
    let hole = &segments[segments.len() - 1];
    assert_eq!(hole["kind"], "free");
    assert_eq!(hole["owner"], Value::Null);
}
