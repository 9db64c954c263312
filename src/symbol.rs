/// A symbol of the indexed text.
///
/// Caller values are wrapped in `Value`. `Terminal` is the end-of-text marker
/// appended by the builder so every suffix ends at its own leaf. It compares
/// equal only to itself and orders below every value, which makes a sorted
/// traversal list suffixes in lexicographic order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Symbol<T> {
    /// Unique end-of-text marker.
    Terminal,

    /// A value from the input text.
    Value(T),
}

impl<T> Symbol<T> {
    /// Returns the wrapped value, or `None` for the terminal.
    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Symbol::Value(v) => Some(v),
            Symbol::Terminal => None,
        }
    }
}

impl<T: PartialEq> Symbol<T> {
    /// Checks a text symbol against a pattern value without allocating a key.
    #[inline]
    pub(crate) fn matches(&self, other: &T) -> bool {
        self.value() == Some(other)
    }
}
