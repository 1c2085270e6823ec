//! The shared tick-loop driver.
//!
//! Both allocation modes run the same loop over a logical clock: admit
//! arrivals, repeatedly scan the waiting queue under the fit policy, emit a
//! frame per event, and stop once everything has arrived and the queue is
//! empty. The only difference between modes is how a placement attempt is
//! answered, which is what the [`Allocator`] seam abstracts.
//!
//! Termination needs no caller-supplied end condition: the loop is bounded by
//! the horizon `last_arrival + process_count * 4 + 10`, so a process that can
//! never fit leaves a finite trace whose final frame still lists it as
//! waiting.

use crate::common::policy::FitPolicy;
use crate::common::process::{FinishedProcess, Process};
use crate::sim::frame::{FrameState, Trace, TraceFrame};

/// Placement backend for one allocation mode.
///
/// The driver owns the clock and the process queues; the backend owns the
/// memory state. `try_place` must be the only way the backend's state
/// changes.
pub(crate) trait Allocator {
    /// Attempts to place `process` under `policy`.
    ///
    /// On success the backend has recorded the placement and the returned
    /// string is the frame's event label; `None` leaves the backend
    /// untouched.
    fn try_place(&mut self, process: &Process, policy: FitPolicy) -> Option<String>;

    /// Deep-copies the current memory state for a frame.
    fn snapshot(&self) -> FrameState;
}

/// Runs the tick loop to completion and returns the materialized trace.
///
/// Inputs must already be validated. The waiting queue is ordered by arrival
/// tick with ties broken by input order, and is rescanned from the front
/// after every successful placement because the free set changed.
pub(crate) fn run<A: Allocator>(mut backend: A, processes: &[Process], policy: FitPolicy) -> Trace {
    let mut pending: Vec<Process> = processes.to_vec();
    pending.sort_by_key(|process| process.arrival);
    let last_arrival = pending.last().map_or(0, |process| process.arrival);
    let max_tick = last_arrival + pending.len() as u64 * 4 + 10;

    let mut trace = Trace::default();
    let mut waiting: Vec<Process> = Vec::new();
    let mut finished: Vec<FinishedProcess> = Vec::new();
    let mut tick = 0;

    trace.push(TraceFrame::capture(
        tick,
        "start",
        backend.snapshot(),
        &waiting,
        &finished,
        None,
    ));

    while tick <= max_tick {
        // Arrivals are a prefix of `pending` because it is sorted by arrival.
        while pending.first().is_some_and(|process| process.arrival == tick) {
            let process = pending.remove(0);
            waiting.push(process.clone());
            trace.push(TraceFrame::capture(
                tick,
                format!("arrive {}", process.id),
                backend.snapshot(),
                &waiting,
                &finished,
                Some(&process.id),
            ));
        }

        // Scan the queue until a full pass places nothing; every placement
        // invalidates the free set, so start over from the queue front.
        let mut progress = true;
        while progress {
            progress = false;
            for index in 0..waiting.len() {
                if let Some(event) = backend.try_place(&waiting[index], policy) {
                    let process = waiting.remove(index);
                    log::debug!("tick {tick}: {event}");
                    finished.push(FinishedProcess {
                        process,
                        finish_tick: tick,
                    });
                    let active = finished
                        .last()
                        .map(|done| done.process.id.clone());
                    trace.push(TraceFrame::capture(
                        tick,
                        event,
                        backend.snapshot(),
                        &waiting,
                        &finished,
                        active.as_deref(),
                    ));
                    progress = true;
                    break;
                }
            }
        }

        if pending.is_empty() && waiting.is_empty() {
            trace.push(TraceFrame::capture(
                tick,
                "done",
                backend.snapshot(),
                &waiting,
                &finished,
                None,
            ));
            break;
        }
        tick += 1;
    }

    if !waiting.is_empty() {
        log::debug!(
            "horizon reached at tick {max_tick}: {} process(es) never placed",
            waiting.len()
        );
    }
    trace.push(TraceFrame::capture(
        tick,
        "end",
        backend.snapshot(),
        &waiting,
        &finished,
        None,
    ));
    trace
}
