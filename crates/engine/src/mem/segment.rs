//! Typed memory segments and segment-list normalization.
//!
//! A segment list partitions a memory image of a given capacity into an
//! ordered, gapless sequence of free and occupied regions. [`normalize`] is
//! the single repair pass that restores every list invariant; all mutation of
//! a [`MemoryImage`](super::MemoryImage) funnels through it.

use serde::{Deserialize, Serialize};

/// Whether a segment is a hole or holds a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// An unallocated hole.
    Free,
    /// A region holding exactly one process.
    Occupied,
}

/// One contiguous region of a memory image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Offset of the first unit of the region.
    pub start: u64,
    /// Extent of the region; never zero in a normalized list.
    pub size: u64,
    /// Free or occupied.
    pub kind: SegmentKind,
    /// Owning process id; `Some` exactly when the segment is occupied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Segment {
    /// Creates a free segment (a hole).
    pub fn free(start: u64, size: u64) -> Self {
        Self {
            start,
            size,
            kind: SegmentKind::Free,
            owner: None,
        }
    }

    /// Creates an occupied segment owned by `owner`.
    pub fn occupied(start: u64, size: u64, owner: impl Into<String>) -> Self {
        Self {
            start,
            size,
            kind: SegmentKind::Occupied,
            owner: Some(owner.into()),
        }
    }

    /// One past the last unit of the region.
    pub fn end(&self) -> u64 {
        self.start + self.size
    }

    /// Whether the segment is a hole.
    pub fn is_free(&self) -> bool {
        self.kind == SegmentKind::Free
    }
}

/// Restores every segment-list invariant for a memory of `capacity` units.
///
/// The pass sorts segments ascending by start, clips any overflow past
/// `capacity`, fills every gap (including a trailing gap up to `capacity`)
/// with synthetic free segments, drops zero-size segments, and merges
/// adjacent free segments. The result covers exactly `[0, capacity)`.
///
/// Idempotent: normalizing an already-normalized list returns it unchanged.
pub fn normalize(capacity: u64, mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by_key(|seg| seg.start);

    let mut out: Vec<Segment> = Vec::with_capacity(segments.len() + 1);
    let mut cursor = 0;
    for mut seg in segments {
        if seg.start >= capacity {
            break;
        }
        if seg.start > cursor {
            out.push(Segment::free(cursor, seg.start - cursor));
        }
        let end = seg.end().min(capacity);
        seg.size = end.saturating_sub(seg.start);
        cursor = cursor.max(end);
        if seg.size > 0 {
            out.push(seg);
        }
    }
    if cursor < capacity {
        out.push(Segment::free(cursor, capacity - cursor));
    }

    merge_free(out)
}

/// Merges runs of adjacent free segments into single holes.
///
/// Occupied segments are never merged; two occupied neighbors always belong
/// to different processes.
fn merge_free(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        match out.last_mut() {
            Some(last) if last.is_free() && seg.is_free() && last.end() == seg.start => {
                last.size += seg.size;
            }
            _ => out.push(seg),
        }
    }
    out
}
