use crate::error::SuffixTreeError;
use crate::symbol::Symbol;
use crate::tree::SuffixTree;
use slotmap::DefaultKey;
use std::hash::Hash;
use std::ops::Range;

/// Where a matched pattern ends: the node just below the match point and the
/// string depth at the bottom of that node's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchPoint {
    pub node: DefaultKey,
    pub depth: usize,
}

impl<T: Hash + Eq + Clone> SuffixTree<T> {
    /// Walks `pattern` down from the root.
    ///
    /// Returns `None` as soon as a symbol has no matching edge or differs
    /// from the edge label. A pattern that runs out mid-edge still matches.
    pub(crate) fn locate(&self, pattern: &[T]) -> Option<MatchPoint> {
        let mut node = self.root;
        let mut depth = 0;
        let mut matched = 0;

        while matched < pattern.len() {
            let key = Symbol::Value(pattern[matched].clone());
            let child = self.nodes[node].get_node(&key)?;
            let label = self.label(child);

            for symbol in label {
                if matched == pattern.len() {
                    break;
                }
                if !symbol.matches(&pattern[matched]) {
                    return None;
                }
                matched += 1;
            }

            depth += label.len();
            node = child;
        }

        Some(MatchPoint { node, depth })
    }

    /// Returns true if `pattern` occurs in the text.
    ///
    /// Runs in time proportional to the pattern length.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixTreeError::EmptyPattern`] for an empty pattern.
    pub fn contains(&self, pattern: &[T]) -> Result<bool, SuffixTreeError> {
        check_pattern(pattern)?;
        Ok(self.locate(pattern).is_some())
    }

    /// Returns the 0-based start offsets of every occurrence of `pattern`,
    /// ascending.
    ///
    /// Without a terminal, suffixes left implicit by construction have no
    /// leaf; they are checked directly against the text.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixTreeError::EmptyPattern`] for an empty pattern.
    pub fn find_all(&self, pattern: &[T]) -> Result<Vec<usize>, SuffixTreeError> {
        check_pattern(pattern)?;
        let mut offsets = self.occurrences(pattern);
        offsets.sort_unstable();
        Ok(offsets)
    }

    /// Returns the number of occurrences of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SuffixTreeError::EmptyPattern`] for an empty pattern.
    pub fn count(&self, pattern: &[T]) -> Result<usize, SuffixTreeError> {
        check_pattern(pattern)?;
        Ok(self.occurrences(pattern).len())
    }

    /// Start offsets of `pattern`, in arbitrary order.
    fn occurrences(&self, pattern: &[T]) -> Vec<usize> {
        let Some(point) = self.locate(pattern) else {
            return Vec::new();
        };

        let mut offsets = self.leaf_offsets(point);
        for offset in self.first_implicit()..self.len() {
            let matches = self
                .text
                .get(offset..offset + pattern.len())
                .is_some_and(|window| window.iter().zip(pattern).all(|(s, p)| s.matches(p)));
            if matches {
                offsets.push(offset);
            }
        }
        offsets
    }

    /// Start offsets of every leaf below `point`, in arbitrary order.
    fn leaf_offsets(&self, point: MatchPoint) -> Vec<usize> {
        let total = self.text.len();
        let mut offsets = Vec::new();
        let mut stack = vec![(point.node, point.depth)];

        while let Some((key, depth)) = stack.pop() {
            let node = &self.nodes[key];
            if node.is_leaf() {
                offsets.push(total - depth);
                continue;
            }
            for &child in node.children.values() {
                stack.push((child, depth + self.label(child).len()));
            }
        }

        offsets
    }
}

impl<T: Hash + Eq + Clone + Ord> SuffixTree<T> {
    /// Returns the longest substring that occurs at least twice.
    ///
    /// Ties go to the lexicographically smallest candidate. Returns an empty
    /// vector when no symbol repeats.
    ///
    /// Repeats that branch end at an internal node. Without a terminal, the
    /// longest implicit suffix also repeats, since it prefixes a longer one.
    pub fn longest_repeat(&self) -> Vec<T> {
        let mut best: Option<MatchPoint> = None;
        let mut stack = vec![(self.root, 0)];

        while let Some((key, depth)) = stack.pop() {
            let node = &self.nodes[key];
            if node.is_leaf() {
                continue;
            }
            if !node.is_root() && best.map_or(true, |b| depth > b.depth) {
                best = Some(MatchPoint { node: key, depth });
            }
            // Reverse so the smallest child is visited first.
            for (_, child) in node.sorted_children().into_iter().rev() {
                stack.push((child, depth + self.label(child).len()));
            }
        }

        let mut repeat: Vec<T> = match best {
            Some(point) => {
                let offset = self.leaf_offsets(point)[0];
                self.values(offset..offset + point.depth)
            }
            None => Vec::new(),
        };

        let tail = self.values(self.first_implicit()..self.len());
        if tail.len() > repeat.len() || (tail.len() == repeat.len() && tail < repeat) {
            repeat = tail;
        }
        repeat
    }

    fn values(&self, range: Range<usize>) -> Vec<T> {
        self.text[range]
            .iter()
            .filter_map(Symbol::value)
            .cloned()
            .collect()
    }
}

impl SuffixTree<char> {
    /// [`contains`](SuffixTree::contains) for string patterns.
    pub fn contains_str(&self, pattern: &str) -> Result<bool, SuffixTreeError> {
        let pattern: Vec<char> = pattern.chars().collect();
        self.contains(&pattern)
    }

    /// [`find_all`](SuffixTree::find_all) for string patterns.
    ///
    /// Offsets are 0-based and count characters, not bytes.
    pub fn find_str(&self, pattern: &str) -> Result<Vec<usize>, SuffixTreeError> {
        let pattern: Vec<char> = pattern.chars().collect();
        self.find_all(&pattern)
    }
}

fn check_pattern<T>(pattern: &[T]) -> Result<(), SuffixTreeError> {
    if pattern.is_empty() {
        Err(SuffixTreeError::EmptyPattern)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{build, build_with, SuffixTreeError, SuffixTreeOptions, TerminalPolicy};

    #[test]
    fn test_contains_examples() {
        let tree = build("abcabxabcd".chars()).unwrap();
        assert!(tree.contains_str("abx").unwrap());
        assert!(tree.contains_str("abcd").unwrap());
        assert!(tree.contains_str("abcabxabcd").unwrap());
        assert!(!tree.contains_str("xyz").unwrap());
        assert!(!tree.contains_str("abcabxabcdd").unwrap());
        assert!(!tree.contains_str("abxb").unwrap());
    }

    #[test]
    fn test_contains_repeated_symbol() {
        let tree = build("aaaa".chars()).unwrap();
        assert!(tree.contains_str("aa").unwrap());
        assert!(tree.contains_str("aaaa").unwrap());
        assert!(!tree.contains_str("aaaaa").unwrap());
    }

    #[test]
    fn test_contains_mid_edge() {
        // Without a terminal "b" ends inside the edge of "bc".
        let tree = build_with(
            "abc".chars(),
            SuffixTreeOptions::new().terminal(TerminalPolicy::Omit),
        )
        .unwrap();
        assert!(tree.contains_str("b").unwrap());
        assert!(tree.contains_str("bc").unwrap());
        assert!(!tree.contains_str("bd").unwrap());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let tree = build("abc".chars()).unwrap();
        assert_eq!(tree.contains(&[]), Err(SuffixTreeError::EmptyPattern));
        assert_eq!(tree.find_all(&[]), Err(SuffixTreeError::EmptyPattern));
        assert_eq!(tree.count(&[]), Err(SuffixTreeError::EmptyPattern));
    }

    #[test]
    fn test_find_all() {
        let tree = build("abcabxabcd".chars()).unwrap();
        assert_eq!(tree.find_str("abx").unwrap(), vec![3]);
        assert_eq!(tree.find_str("ab").unwrap(), vec![0, 3, 6]);
        assert_eq!(tree.find_str("bc").unwrap(), vec![1, 7]);
        assert_eq!(tree.find_str("d").unwrap(), vec![9]);
        assert!(tree.find_str("xyz").unwrap().is_empty());
    }

    #[test]
    fn test_find_all_overlapping() {
        let tree = build("aaaa".chars()).unwrap();
        assert_eq!(tree.find_str("aa").unwrap(), vec![0, 1, 2]);
        assert_eq!(tree.find_str("a").unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_count() {
        let tree = build("mississippi".chars()).unwrap();
        let count = |p: &str| tree.count(&p.chars().collect::<Vec<_>>()).unwrap();
        assert_eq!(count("ss"), 2);
        assert_eq!(count("issi"), 2);
        assert_eq!(count("i"), 4);
        assert_eq!(count("q"), 0);
    }

    #[test]
    fn test_longest_repeat() {
        let tree = build("banana".chars()).unwrap();
        assert_eq!(tree.longest_repeat().into_iter().collect::<String>(), "ana");

        let tree = build("mississippi".chars()).unwrap();
        assert_eq!(tree.longest_repeat().into_iter().collect::<String>(), "issi");

        let tree = build("abcd".chars()).unwrap();
        assert!(tree.longest_repeat().is_empty());
    }

    #[test]
    fn test_implicit_suffix_occurrences() {
        let omit = || SuffixTreeOptions::new().terminal(TerminalPolicy::Omit);

        let tree = build_with("abab".chars(), omit()).unwrap();
        assert_eq!(tree.count(&['a', 'b']).unwrap(), 2);
        assert_eq!(tree.find_str("ab").unwrap(), vec![0, 2]);
        assert_eq!(tree.find_str("b").unwrap(), vec![1, 3]);
        assert_eq!(tree.find_str("bab").unwrap(), vec![1]);

        let tree = build_with("aaaa".chars(), omit()).unwrap();
        assert_eq!(tree.find_str("a").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(tree.count(&['a', 'a', 'a']).unwrap(), 2);
        assert_eq!(tree.count(&['a'; 5]).unwrap(), 0);
    }

    #[test]
    fn test_longest_repeat_without_terminal() {
        let omit = || SuffixTreeOptions::new().terminal(TerminalPolicy::Omit);
        let repeat = |text: &str| {
            build_with(text.chars(), omit())
                .unwrap()
                .longest_repeat()
                .into_iter()
                .collect::<String>()
        };

        assert_eq!(repeat("aaaa"), "aaa");
        assert_eq!(repeat("abab"), "ab");
        assert_eq!(repeat("banana"), "ana");
        assert_eq!(repeat("abcd"), "");
    }

    #[test]
    fn test_integer_alphabet() {
        let tree = build(vec![3u32, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]).unwrap();
        assert!(tree.contains(&[1, 5, 9]).unwrap());
        assert!(!tree.contains(&[9, 9]).unwrap());
        assert_eq!(tree.find_all(&[5]).unwrap(), vec![4, 8, 10]);
    }
}
