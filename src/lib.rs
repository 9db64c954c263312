//! # Ukkonen - Online Suffix Tree Construction
//!
//! A Rust implementation of Ukkonen's algorithm for building suffix trees.
//!
//! The tree is a compact trie of every suffix of a fixed text. It is built in
//! linear time, one phase per symbol, using three pieces of bookkeeping:
//! 1. **Active point**: the cursor where the previous phase left off
//! 2. **Suffix links**: shortcuts between internal nodes after an edge split
//! 3. **Remainder**: how many suffixes are still owed insertion
//!
//! ## Example
//!
//! ```
//! use ukkonen_rs::build;
//!
//! let tree = build("abcabxabcd".chars()).unwrap();
//!
//! assert!(tree.contains_str("abx").unwrap());
//! assert!(!tree.contains_str("xyz").unwrap());
//! assert_eq!(tree.find_str("abc").unwrap(), vec![0, 6]);
//!
//! println!("{} nodes", tree.stats().nodes);
//! ```
//!
//! ## Performance
//!
//! - O(n) construction for a text of n symbols, O(m) substring queries
//! - Edge labels are ranges into the text; symbols are never copied
//! - Nodes live in a generational arena (SlotMap)

mod active;
mod builder;
mod error;
mod iter;
mod label;
mod node;
mod options;
mod query;
mod symbol;
mod tree;


pub use builder::SuffixTreeBuilder;
pub use error::SuffixTreeError;
pub use iter::Suffixes;
pub use options::{SuffixTreeOptions, TerminalPolicy};
pub use tree::{SuffixTree, TreeStats};

use std::hash::Hash;

/// Builds a suffix tree over `text` with the default options.
///
/// # Errors
///
/// Returns [`SuffixTreeError::EmptyText`] if `text` yields nothing.
pub fn build<T, I>(text: I) -> Result<SuffixTree<T>, SuffixTreeError>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    build_with(text, SuffixTreeOptions::default())
}

/// Builds a suffix tree over `text` with explicit options.
///
/// # Errors
///
/// Returns [`SuffixTreeError::EmptyText`] if `text` yields nothing.
pub fn build_with<T, I>(text: I, options: SuffixTreeOptions) -> Result<SuffixTree<T>, SuffixTreeError>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut builder = SuffixTreeBuilder::with_options(options);
    builder.extend(text);
    builder.finish()
}

/// Returns true if `pattern` occurs in the text indexed by `tree`.
///
/// # Errors
///
/// Returns [`SuffixTreeError::EmptyPattern`] for an empty pattern.
pub fn contains<T>(tree: &SuffixTree<T>, pattern: &[T]) -> Result<bool, SuffixTreeError>
where
    T: Hash + Eq + Clone,
{
    tree.contains(pattern)
}

/// Collects every suffix stored in `tree`, in lexicographic order.
pub fn suffixes<T>(tree: &SuffixTree<T>) -> Vec<Vec<T>>
where
    T: Hash + Eq + Ord + Clone,
{
    tree.suffixes().collect()
}
