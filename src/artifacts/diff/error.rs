use thiserror::Error;

/// Recoverable outcomes of a budgeted diff
///
/// Internal invariant violations are not represented here: they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("edit distance exceeds {limit}")]
    TooLarge { limit: usize },
}
