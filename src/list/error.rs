use thiserror::Error;

/// Errors returned by [`SelectableList::select`](super::SelectableList::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The requested position is outside `0..len`.
    #[error("index {index} is out of range for a list of {len} item(s)")]
    InvalidIndex { index: usize, len: usize },
}
