//! The dynamic-partitioning memory image.
//!
//! A [`MemoryImage`] is one memory of fixed capacity represented as an
//! ordered, gapless segment list. It upholds the list invariants (sorted,
//! non-overlapping, exact coverage of `[0, capacity)`, no zero-size segment,
//! no adjacent holes) by re-normalizing after every mutation; other
//! components only read it or call [`MemoryImage::place`].

use serde::{Deserialize, Serialize};

use super::segment::{Segment, normalize};

/// One memory image: a capacity plus its ordered segment partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryImage {
    capacity: u64,
    segments: Vec<Segment>,
}

impl MemoryImage {
    /// Creates an empty image: a single hole spanning `[0, capacity)`.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            segments: vec![Segment::free(0, capacity)],
        }
    }

    /// Builds an image from raw segments, normalizing them first.
    ///
    /// Gaps become holes, overflow past `capacity` is clipped, and adjacent
    /// holes are merged, so the result always satisfies the list invariants.
    pub fn from_segments(capacity: u64, segments: Vec<Segment>) -> Self {
        Self {
            capacity,
            segments: normalize(capacity, segments),
        }
    }

    /// Total capacity of the image.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// All segments, ascending by start.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All free segments, ascending by start.
    pub fn free_regions(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|seg| seg.is_free())
    }

    /// Total occupied units.
    pub fn occupied_total(&self) -> u64 {
        self.segments
            .iter()
            .filter(|seg| !seg.is_free())
            .map(|seg| seg.size)
            .sum()
    }

    /// Places a process of `size` units into the free region at position
    /// `free_index` of [`Self::free_regions`].
    ///
    /// The chosen hole is replaced by an occupied segment at its start,
    /// followed by a remainder hole only when the region is larger than the
    /// request; the list is then re-normalized. Returns the start offset of
    /// the placement, or `None` when the index is out of range or the region
    /// is too small.
    pub fn place(&mut self, free_index: usize, owner: &str, size: u64) -> Option<u64> {
        let seg_index = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, seg)| seg.is_free())
            .map(|(index, _)| index)
            .nth(free_index)?;
        let region = self.segments[seg_index].clone();
        if size == 0 || region.size < size {
            return None;
        }

        self.segments[seg_index] = Segment::occupied(region.start, size, owner);
        if region.size > size {
            let remainder = Segment::free(region.start + size, region.size - size);
            self.segments.insert(seg_index + 1, remainder);
        }
        self.segments = normalize(self.capacity, std::mem::take(&mut self.segments));
        Some(region.start)
    }
}
