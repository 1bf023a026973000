//! Common error types used throughout mediaforged.
//!
//! Every failure in the core is synchronous and surfaced immediately: a field
//! the container or codec never set, a stream lookup that matched nothing, or a
//! write attempted through a borrowed buffer.

use crate::types::StreamKind;

/// Common error type for mediaforged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required field on the container or codec handle is absent or unset.
    #[error("missing data: {field}")]
    MissingData { field: &'static str },

    /// No typed stream record carries the requested stream index.
    #[error("no {kind} properties correspond to stream at index {index}")]
    NotFound { kind: StreamKind, index: usize },

    /// A mutating operation was attempted on a frame that borrows its bytes.
    #[error("cannot {operation} a frame that borrows its data")]
    BorrowedBuffer { operation: &'static str },
}

impl Error {
    /// Create a new MissingData error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingData { field }
    }

    /// Create a new NotFound error.
    pub fn not_found(kind: StreamKind, index: usize) -> Self {
        Self::NotFound { kind, index }
    }

    /// Create a new BorrowedBuffer error.
    pub fn borrowed(operation: &'static str) -> Self {
        Self::BorrowedBuffer { operation }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
