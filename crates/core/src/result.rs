//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Provides functional combinators for Result types, enabling clean error handling
//! without unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for Chroma operations.
///
/// All fallible operations in Chroma return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```ignore
/// fn operation() -> Result<usize> {
///     let graph = Graph::from_matrix(&matrix);
///     Ok(welsh_powell(&graph).class_count())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for Results.
pub trait ResultExt<T> {
    /// Log the error (if any) under `context` and pass the result through unchanged.
    #[must_use]
    fn log_failure(self, context: &str) -> Self;

    /// Inspect the error without consuming the Result.
    #[must_use]
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn log_failure(self, context: &str) -> Self {
        self.inspect_error(|e| {
            if e.is_user_error() {
                tracing::warn!("{context} rejected: {e}");
            } else {
                tracing::error!("{context} failed: {e}");
            }
        })
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
