use std::collections::TryReserveError;

/// Failure while building an expanded string.
///
/// Expansion itself never fails on content: unknown names, malformed
/// placeholders and empty input all produce output. The only thing that
/// can go wrong is growing the result buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("out of memory while growing expansion buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
