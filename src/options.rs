/// How the end of the text is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalPolicy {
    /// Append a unique end-of-text symbol before freezing the tree.
    ///
    /// Every suffix then ends at its own leaf, so suffix enumeration and
    /// occurrence lookup are complete.
    #[default]
    Unique,

    /// Keep the implicit tree exactly as the phases left it.
    ///
    /// Suffixes that are prefixes of longer suffixes end inside an edge and
    /// get no leaf of their own, so suffix enumeration skips them. Occurrence
    /// queries still report them.
    Omit,
}

/// Upper bound on the symbols a hint may reserve up front. Longer texts
/// still build; storage then grows on demand.
const MAX_RESERVED_SYMBOLS: usize = 1 << 20;

/// Configuration for [`SuffixTreeBuilder`](crate::SuffixTreeBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuffixTreeOptions {
    pub terminal: TerminalPolicy,
    /// Expected text length, used to pre-size the text and node arena.
    /// Oversized hints are clamped.
    pub capacity_hint: usize,
}

impl SuffixTreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminal(mut self, terminal: TerminalPolicy) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn capacity_hint(mut self, len: usize) -> Self {
        self.capacity_hint = len;
        self
    }

    /// Text capacity to reserve, counting the terminal.
    pub(crate) fn text_capacity(&self) -> usize {
        self.capacity_hint.min(MAX_RESERVED_SYMBOLS) + 1
    }

    /// Node capacity to reserve: a suffix tree over `n` symbols has at most
    /// `2n` nodes including the root.
    pub(crate) fn node_capacity(&self) -> usize {
        self.text_capacity() * 2
    }
}
