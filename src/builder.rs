use crate::active::ActivePoint;
use crate::error::SuffixTreeError;
use crate::node::Node;
use crate::options::{SuffixTreeOptions, TerminalPolicy};
use crate::symbol::Symbol;
use crate::tree::SuffixTree;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};
use std::hash::Hash;

/// Online suffix tree construction (Ukkonen's algorithm).
///
/// Each pushed value runs one phase. Open leaf edges all end at the current
/// phase index, so a phase only touches the nodes it splits or creates.
/// [`finish`](Self::finish) freezes the leaves and hands back an immutable
/// [`SuffixTree`].
///
/// # Example
///
/// ```
/// use ukkonen_rs::SuffixTreeBuilder;
///
/// let mut builder = SuffixTreeBuilder::new();
/// builder.extend("banana".chars());
/// let tree = builder.finish().unwrap();
///
/// assert!(tree.contains_str("nan").unwrap());
/// assert!(!tree.contains_str("nab").unwrap());
/// ```
pub struct SuffixTreeBuilder<T> {
    text: Vec<Symbol<T>>,
    nodes: SlotMap<DefaultKey, Node<T>>,
    root: DefaultKey,
    active: ActivePoint,
    options: SuffixTreeOptions,
}

impl<T: Hash + Eq + Clone> SuffixTreeBuilder<T> {
    /// Creates a builder holding only the root.
    pub fn new() -> Self {
        Self::with_options(SuffixTreeOptions::default())
    }

    pub fn with_options(options: SuffixTreeOptions) -> Self {
        let mut nodes = SlotMap::with_capacity(options.node_capacity());
        let root = nodes.insert(Node::root());

        Self {
            text: Vec::with_capacity(options.text_capacity()),
            nodes,
            root,
            active: ActivePoint::new(root),
            options,
        }
    }

    /// Appends a value to the text and runs its phase.
    pub fn push(&mut self, value: T) {
        self.extend_phase(Symbol::Value(value));
    }

    /// Appends multiple values, one phase each.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }

    /// Returns the number of values pushed so far.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Completes construction.
    ///
    /// Runs the terminal phase if the options ask for one, then freezes every
    /// open leaf edge at the last text position.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixTreeError::EmptyText`] if nothing was pushed.
    pub fn finish(mut self) -> Result<SuffixTree<T>, SuffixTreeError> {
        if self.text.is_empty() {
            return Err(SuffixTreeError::EmptyText);
        }
        let len = self.text.len();

        if self.options.terminal == TerminalPolicy::Unique {
            self.extend_phase(Symbol::Terminal);
        }
        self.freeze();

        let tree = SuffixTree::from_parts(
            self.text,
            self.nodes,
            self.root,
            len,
            self.active.remainder,
            self.options.terminal,
        );
        let stats = tree.stats();
        debug!(
            "suffix tree built: {} symbols, {} nodes ({} internal, {} leaves)",
            stats.text_len, stats.nodes, stats.internal_nodes, stats.leaves
        );
        Ok(tree)
    }

    /// Runs one phase for `symbol`.
    ///
    /// Inserts every suffix still owed, ending early once the symbol is found
    /// on the active edge (the remaining suffixes are then implicit).
    fn extend_phase(&mut self, symbol: Symbol<T>) {
        self.text.push(symbol);
        let phase = self.text.len() - 1;
        self.active.remainder += 1;

        // Internal node created earlier in this phase still awaiting its link.
        let mut pending: Option<DefaultKey> = None;

        while self.active.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = phase;
            }

            let edge_symbol = &self.text[self.active.edge];
            match self.nodes[self.active.node].get_node(edge_symbol) {
                None => {
                    assert_eq!(
                        self.active.length, 0,
                        "missing edge below a non-empty active length"
                    );
                    let leaf = self.nodes.insert(Node::leaf(phase));
                    let key = self.text[phase].clone();
                    self.nodes[self.active.node].add_edge(key, leaf);
                    self.link_pending(&mut pending, self.active.node);
                }
                Some(child) => {
                    let edge_len = self.nodes[child].label().len(phase);
                    if self.active.walk_down(child, edge_len) {
                        continue;
                    }

                    let probe = self.nodes[child].label().start + self.active.length;
                    if self.text[probe] == self.text[phase] {
                        // Already present: this and every shorter suffix are implicit.
                        self.link_pending(&mut pending, self.active.node);
                        self.active.length += 1;
                        break;
                    }

                    let split = self.split_edge(child, phase);
                    // Rule 2
                    if let Some(prev) = pending {
                        self.nodes[prev].set_suffix_link(prev, split);
                    }
                    pending = Some(split);
                }
            }

            self.active.remainder -= 1;

            if self.nodes[self.active.node].is_root() {
                // Rule 1
                if self.active.length > 0 {
                    self.active.reseed_from_root(phase);
                }
            } else {
                // Rule 3
                self.active.node = self.nodes[self.active.node]
                    .suffix_link
                    .unwrap_or(self.root);
            }
        }

        trace!(
            "phase {}: remainder {}, active length {}",
            phase,
            self.active.remainder,
            self.active.length
        );
    }

    /// Splits the active edge at the active length.
    ///
    /// The upper part becomes a new internal node carrying the old child and a
    /// fresh leaf for `phase`. Returns the internal node.
    fn split_edge(&mut self, child: DefaultKey, phase: usize) -> DefaultKey {
        let label = *self.nodes[child].label();
        let edge_len = label.len(phase);
        assert!(
            self.active.length > 0 && self.active.length < edge_len,
            "split at {} outside edge of length {}",
            self.active.length,
            edge_len
        );

        let split_end = label.start + self.active.length - 1;
        let split = self.nodes.insert(Node::internal(label.start, split_end));
        let key = self.text[self.active.edge].clone();
        self.nodes[self.active.node].add_edge(key, split);

        let leaf = self.nodes.insert(Node::leaf(phase));
        let key = self.text[phase].clone();
        self.nodes[split].add_edge(key, leaf);

        self.nodes[child].label_mut().start = split_end + 1;
        let key = self.text[split_end + 1].clone();
        self.nodes[split].add_edge(key, child);

        trace!(
            "phase {}: split edge {}..={} after {} symbols",
            phase,
            label.start,
            label.effective_end(phase),
            self.active.length
        );
        split
    }

    /// Links the node still pending from this phase to `target`.
    ///
    /// An unset link already means "root", so links to the root are skipped.
    fn link_pending(&mut self, pending: &mut Option<DefaultKey>, target: DefaultKey) {
        if let Some(prev) = pending.take() {
            if target != self.root {
                self.nodes[prev].set_suffix_link(prev, target);
            }
        }
    }

    /// Pins every open leaf edge to the last text position.
    fn freeze(&mut self) {
        let last = self.text.len() - 1;
        for node in self.nodes.values_mut() {
            if let Some(label) = node.label.as_mut() {
                label.freeze(last);
            }
        }
    }
}

impl<T: Hash + Eq + Clone> Default for SuffixTreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
