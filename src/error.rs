//! Errors raised by [`Namespace`](crate::Namespace) lookups.
//!
//! Hashing itself is total and has no error path.

/// Namespace error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No native function is bound under this name.
    #[error("attempt to call undefined function '{0}'")]
    UndefinedFunction(String),
}

/// Result alias for namespace operations.
pub type Result<T> = std::result::Result<T, Error>;
