//! This module provides a set of shared, low-level utility functions used
//! throughout the vektor Rust core.
//!
//! Its primary responsibilities include:
//! 1.  Providing safe, validated conversions between raw byte slices and typed slices.
//! 2.  Keeping every byte/type reinterpretation behind `bytemuck`'s checked
//!     casts so the rest of the crate stays free of `unsafe`.

use crate::error::VektorError;

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Safely reinterprets a byte slice as a slice of a primitive type.
///
/// This function is the primary gateway for converting the raw value buffer
/// into a workable, typed slice. It performs critical safety checks before
/// creating a zero-copy view of the data.
///
/// # Errors
/// Returns a `VektorError::PodCast` if the byte slice length is not perfectly
/// divisible by the size of the target type `T`, or if the slice is
/// misaligned for `T`.
pub fn safe_bytes_to_typed_slice<T>(bytes: &[u8]) -> Result<&[T], VektorError>
where
    T: bytemuck::Pod, // Use bytemuck's trait for "Plain Old Data"
{
    bytemuck::try_cast_slice(bytes).map_err(VektorError::from)
}

/// Converts a slice of primitive values into a `Vec<u8>`, respecting the
/// platform byte order (Little-Endian on all supported targets).
///
/// This function performs a memory copy to create a new, owned byte vector.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
