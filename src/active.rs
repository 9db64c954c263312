use slotmap::DefaultKey;

/// Where the next symbol of a phase must be matched or inserted.
///
/// `edge` is a text position whose symbol selects the outgoing edge of `node`;
/// `length` counts how far along that edge the cursor sits. `remainder` is the
/// number of suffixes still owed insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub node: DefaultKey,
    pub edge: usize,
    pub length: usize,
    pub remainder: usize,
}

impl ActivePoint {
    pub(crate) fn new(root: DefaultKey) -> Self {
        Self {
            node: root,
            edge: 0,
            length: 0,
            remainder: 0,
        }
    }

    /// Moves the cursor one edge down when it has run past the edge end
    /// (skip/count). Returns `true` if it moved.
    #[inline]
    pub(crate) fn walk_down(&mut self, child: DefaultKey, edge_len: usize) -> bool {
        if self.length < edge_len {
            return false;
        }
        self.edge += edge_len;
        self.length -= edge_len;
        self.node = child;
        true
    }

    /// Rule 1: after an insertion at the root, re-anchor on the next shorter
    /// suffix still owed.
    #[inline]
    pub(crate) fn reseed_from_root(&mut self, phase: usize) {
        assert!(self.length > 0, "root re-seed with an empty active length");
        self.length -= 1;
        self.edge = phase + 1 - self.remainder;
    }
}
