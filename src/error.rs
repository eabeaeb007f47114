// In: src/error.rs

//! This module defines the single, unified error type for the entire vektor library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VektorError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// `get` was called on a slot whose validity bit is 0. Recoverable; the
    /// caller should have used `get_or_null`.
    #[error("Value at index {0} is null")]
    NullValue(usize),

    /// A caller bug, e.g. a negative tri-state `is_set` flag. Not retried.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or range exceeded the declared capacity in an unchecked or
    /// range-copy operation. The `*_safe` variants exist to avoid this.
    #[error("Index {index} out of range for capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },

    /// The underlying allocator could not satisfy a growth or transfer
    /// request. The vector is left in its prior, unmodified state.
    #[error("Allocation of {requested} bytes failed: {reason}")]
    AllocationFailed { requested: usize, reason: String },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically during config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for VektorError {
    fn from(err: bytemuck::PodCastError) -> Self {
        VektorError::PodCast(err.to_string())
    }
}
