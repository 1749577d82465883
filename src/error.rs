use thiserror::Error;

/// Errors raised by index-addressed operations on a `LinkedList`.
///
/// Both variants are reported before the list is touched, so a failed call
/// never leaves the list partially modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    #[error("index must be an integer, got {index}")]
    NotAnInteger { index: f64 },

    #[error("index out of range: {index} (size {size})")]
    OutOfRange { index: i64, size: usize },
}
