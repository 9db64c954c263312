use crate::tree::SuffixTree;
use slotmap::DefaultKey;
use std::hash::Hash;

/// Iterator over the suffixes stored in a [`SuffixTree`].
///
/// Walks the tree depth first with an explicit stack, visiting children in
/// symbol order, so suffixes come out lexicographically sorted (a suffix
/// sorts before any longer suffix it prefixes).
pub struct Suffixes<'a, T> {
    tree: &'a SuffixTree<T>,
    /// Pending nodes with the path length above them.
    stack: Vec<(DefaultKey, usize)>,
    path: Vec<T>,
}

impl<'a, T: Hash + Ord + Clone> Suffixes<'a, T> {
    pub(crate) fn new(tree: &'a SuffixTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            path: Vec::new(),
        };
        iter.push_children(tree.root);
        iter
    }

    fn push_children(&mut self, key: DefaultKey) {
        let depth = self.path.len();
        for (_, child) in self.tree.nodes[key].sorted_children().into_iter().rev() {
            self.stack.push((child, depth));
        }
    }
}

impl<'a, T: Hash + Ord + Clone> Iterator for Suffixes<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path
                .extend(self.tree.label(key).iter().filter_map(|s| s.value().cloned()));

            if self.tree.nodes[key].is_leaf() {
                // The terminal-only leaf carries the empty suffix.
                if !self.path.is_empty() {
                    return Some(self.path.clone());
                }
            } else {
                self.push_children(key);
            }
        }
        None
    }
}

impl<T: Hash + Eq + Ord + Clone> SuffixTree<T> {
    /// Returns an iterator over the stored suffixes in lexicographic order.
    ///
    /// Under [`TerminalPolicy::Unique`](crate::TerminalPolicy::Unique) this
    /// yields every suffix of the text exactly once. Without a terminal it
    /// yields only suffixes that end at a leaf.
    pub fn suffixes(&self) -> Suffixes<'_, T> {
        Suffixes::new(self)
    }

    /// Returns the start offsets of the stored suffixes in lexicographic order.
    ///
    /// Under [`TerminalPolicy::Unique`](crate::TerminalPolicy::Unique) this is
    /// the suffix array of the text.
    pub fn suffix_array(&self) -> Vec<usize> {
        let total = self.text.len();
        let mut offsets = Vec::with_capacity(self.len());
        let mut stack = vec![(self.root, 0)];

        while let Some((key, depth)) = stack.pop() {
            let node = &self.nodes[key];
            if node.is_leaf() {
                let offset = total - depth;
                if offset < self.len() {
                    offsets.push(offset);
                }
                continue;
            }
            for (_, child) in node.sorted_children().into_iter().rev() {
                stack.push((child, depth + self.label(child).len()));
            }
        }

        offsets
    }
}

impl SuffixTree<char> {
    /// [`suffixes`](SuffixTree::suffixes) collected as strings.
    pub fn suffix_strings(&self) -> Vec<String> {
        self.suffixes().map(|s| s.into_iter().collect()).collect()
    }
}

impl<'a, T: Hash + Eq + Ord + Clone> IntoIterator for &'a SuffixTree<T> {
    type Item = Vec<T>;
    type IntoIter = Suffixes<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.suffixes()
    }
}
