use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of the interval in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Subtracts `[start, end)` from an ordered, disjoint interval list.
///
/// Intervals fully outside the consumed span are kept; overlapping
/// intervals are clipped, splitting in two when the span lands in the
/// middle. Sortedness and disjointness of the input are preserved, and
/// consuming a span already absent is a no-op.
pub fn consume(ranges: &[TimeRange], start: u32, end: u32) -> Vec<TimeRange> {
    let mut result = Vec::with_capacity(ranges.len() + 1);

    for r in ranges {
        if r.end <= start || r.start >= end {
            result.push(*r);
            continue;
        }

        // overlap: keep what is left on either side
        if r.start < start {
            result.push(TimeRange::new(r.start, start));
        }
        if r.end > end {
            result.push(TimeRange::new(end, r.end));
        }
    }

    result
}
