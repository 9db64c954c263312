use crate::node::{Node, NodeKind};
use crate::options::TerminalPolicy;
use crate::symbol::Symbol;
use slotmap::{DefaultKey, SlotMap};

/// A finished, immutable suffix tree.
///
/// Built by [`SuffixTreeBuilder`](crate::SuffixTreeBuilder) or [`build`](crate::build).
/// Every leaf edge has been frozen, so the tree can be shared across threads
/// for read-only queries.
#[derive(Debug)]
pub struct SuffixTree<T> {
    /// Indexed text, including the terminal when one was appended.
    pub(crate) text: Vec<Symbol<T>>,
    pub(crate) nodes: SlotMap<DefaultKey, Node<T>>,
    pub(crate) root: DefaultKey,
    /// Number of caller values in the text.
    len: usize,
    /// Suffixes left implicit by the last phase; they start at the last
    /// `implicit_suffixes` positions and have no leaf.
    implicit_suffixes: usize,
    terminal: TerminalPolicy,
}

impl<T> SuffixTree<T> {
    pub(crate) fn from_parts(
        text: Vec<Symbol<T>>,
        nodes: SlotMap<DefaultKey, Node<T>>,
        root: DefaultKey,
        len: usize,
        implicit_suffixes: usize,
        terminal: TerminalPolicy,
    ) -> Self {
        assert!(implicit_suffixes <= len, "more implicit suffixes than symbols");
        Self {
            text,
            nodes,
            root,
            len,
            implicit_suffixes,
            terminal,
        }
    }

    /// Returns the length of the indexed text.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a tree cannot be built over an empty text.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn terminal_policy(&self) -> TerminalPolicy {
        self.terminal
    }

    /// Returns an iterator over the indexed text.
    pub fn text(&self) -> impl Iterator<Item = &T> + '_ {
        self.text.iter().filter_map(Symbol::value)
    }

    /// Offset of the first suffix without a leaf. Always `len` when a
    /// terminal was appended.
    #[inline]
    pub(crate) fn first_implicit(&self) -> usize {
        self.len - self.implicit_suffixes
    }

    /// Last position of the stored text; every frozen leaf ends here.
    #[inline]
    pub(crate) fn last_index(&self) -> usize {
        self.text.len() - 1
    }

    /// Materializes the incoming edge label of `key` as a slice of the text.
    #[inline]
    pub(crate) fn label(&self, key: DefaultKey) -> &[Symbol<T>] {
        let range = self.nodes[key].label().range(self.last_index());
        &self.text[range]
    }

    /// Returns structural statistics about the tree.
    pub fn stats(&self) -> TreeStats {
        let mut internal_nodes = 0;
        let mut leaves = 0;
        let mut suffix_links = 0;

        for node in self.nodes.values() {
            match node.kind {
                NodeKind::Root => {}
                NodeKind::Internal => internal_nodes += 1,
                NodeKind::Leaf => leaves += 1,
            }
            if node.suffix_link.is_some() {
                suffix_links += 1;
            }
        }

        TreeStats {
            text_len: self.len,
            nodes: self.nodes.len(),
            internal_nodes,
            leaves,
            suffix_links,
        }
    }
}

/// Structural statistics about a suffix tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of input symbols indexed
    pub text_len: usize,
    /// Total nodes, root included
    pub nodes: usize,
    /// Branching nodes other than the root
    pub internal_nodes: usize,
    /// Leaves, one per suffix that ends at its own leaf
    pub leaves: usize,
    /// Internal nodes with an explicit suffix link
    pub suffix_links: usize,
}

impl TreeStats {
    /// Returns the number of nodes per indexed symbol.
    pub fn nodes_per_symbol(&self) -> f64 {
        if self.text_len == 0 {
            0.0
        } else {
            self.nodes as f64 / self.text_len as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{build, build_with, SuffixTreeOptions, TerminalPolicy};

    #[test]
    fn test_len_and_text() {
        let tree = build("hello".chars()).unwrap();
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert_eq!(tree.text().collect::<String>(), "hello");
        // Terminal is stored but never reported.
        assert_eq!(tree.text.len(), 6);
    }

    #[test]
    fn test_label_slices_text() {
        let tree = build("ab".chars()).unwrap();
        let leaves: Vec<_> = tree
            .nodes
            .iter()
            .filter(|(_, n)| n.is_leaf())
            .map(|(k, _)| tree.label(k).len())
            .collect();
        // "ab$", "b$" and "$"
        let mut lengths = leaves;
        lengths.sort_unstable();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[test]
    fn test_stats_distinct_symbols() {
        let tree = build_with(
            "abcd".chars(),
            SuffixTreeOptions::new().terminal(TerminalPolicy::Omit),
        )
        .unwrap();
        let stats = tree.stats();
        assert_eq!(stats.text_len, 4);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.internal_nodes, 0);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.suffix_links, 0);
        assert!((stats.nodes_per_symbol() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_with_branching() {
        // "abcabxabcd$": internal nodes ab, b, abc, bc, c.
        let tree = build("abcabxabcd".chars()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.leaves, 11);
        assert_eq!(stats.internal_nodes, 5);
        assert_eq!(stats.nodes, 17);
    }

    #[test]
    fn test_first_implicit() {
        let tree = build("abab".chars()).unwrap();
        assert_eq!(tree.first_implicit(), 4);

        // "ab" and "b" are prefixes of longer suffixes.
        let tree = build_with(
            "abab".chars(),
            SuffixTreeOptions::new().terminal(TerminalPolicy::Omit),
        )
        .unwrap();
        assert_eq!(tree.first_implicit(), 2);
    }
}
