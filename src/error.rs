use thiserror::Error as ThisError;

/// Precondition failures reported by construction and queries.
///
/// A pattern that simply does not occur is not an error; queries report that
/// as `false` or an empty result.
#[derive(Debug, Clone, Copy, ThisError, PartialEq, Eq)]
pub enum SuffixTreeError {
    #[error("cannot build a suffix tree over an empty text")]
    EmptyText,
    #[error("query pattern must contain at least one symbol")]
    EmptyPattern,
}
