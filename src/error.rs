//! Error types.

use thiserror::Error;

/// Errors returned when building a [`Sortable`](crate::Sortable) adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Parallel slices handed to [`Zip`](crate::Zip) differ in length.
    #[error("Length mismatch: {keys} keys but {values} values")]
    LengthMismatch { keys: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
