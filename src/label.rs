use std::ops::RangeInclusive;

/// End position of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelEnd {
    /// Leaf edge that grows with the builder's current phase.
    Open,
    /// Fixed inclusive end position.
    Closed(usize),
}

/// An edge label addressed as an inclusive range into the text.
///
/// Labels never copy symbols. Open leaf labels share the builder's single
/// "current end" value, passed in by the caller, so extending every leaf in a
/// phase costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeLabel {
    pub start: usize,
    pub end: LabelEnd,
}

impl EdgeLabel {
    /// Creates an open leaf label starting at `start`.
    pub(crate) fn open(start: usize) -> Self {
        Self {
            start,
            end: LabelEnd::Open,
        }
    }

    /// Creates a closed label covering `start..=end`.
    pub(crate) fn closed(start: usize, end: usize) -> Self {
        assert!(start <= end, "edge label {start}..={end} is empty");
        Self {
            start,
            end: LabelEnd::Closed(end),
        }
    }

    #[inline]
    pub(crate) fn is_open(&self) -> bool {
        matches!(self.end, LabelEnd::Open)
    }

    /// Inclusive end, resolving an open label to `current_end`.
    #[inline]
    pub(crate) fn effective_end(&self, current_end: usize) -> usize {
        match self.end {
            LabelEnd::Open => current_end,
            LabelEnd::Closed(end) => end,
        }
    }

    /// Number of symbols on the edge.
    #[inline]
    pub(crate) fn len(&self, current_end: usize) -> usize {
        let end = self.effective_end(current_end);
        debug_assert!(end >= self.start, "edge label ends before it starts");
        end - self.start + 1
    }

    #[inline]
    pub(crate) fn range(&self, current_end: usize) -> RangeInclusive<usize> {
        self.start..=self.effective_end(current_end)
    }

    /// Pins an open label to `end`. Closed labels are left untouched.
    pub(crate) fn freeze(&mut self, end: usize) {
        if self.is_open() {
            assert!(end >= self.start, "cannot freeze label before its start");
            self.end = LabelEnd::Closed(end);
        }
    }
}
