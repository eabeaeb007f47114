// In: src/vector/growth.rs

//! This module implements the capacity growth policy invoked by the vector's
//! safe accessors.
//!
//! The policy is a pure doubling sequence: start from the configured initial
//! capacity and double until the requested index fits. The buffer work around
//! it is all-or-nothing: a failed allocation leaves the vector bit-for-bit in
//! its prior state, so callers can shrink their batch and retry. Capacity
//! never shrinks, and repeated calls with non-increasing indices are no-ops.

use std::sync::Arc;

use crate::error::VektorError;
use crate::memory::allocator::Allocator;
use crate::memory::buffer::RawBuffer;
use crate::vector::bitmap::{bytes_for, ValidityBitmap};
use crate::vector::fixed::FixedWidthVector;
use crate::vector::scalar::FixedWidth;

/// Computes the capacity the doubling policy lands on for `index`: the first
/// term of the sequence `initial, 2*initial, 4*initial, ...` (continuing from
/// `current` when the vector has already grown) that exceeds `index`.
pub fn grown_capacity(current: usize, index: usize, initial: usize) -> usize {
    let mut capacity = if current == 0 { initial.max(1) } else { current };
    while capacity <= index {
        capacity = capacity.saturating_mul(2);
    }
    capacity
}

impl<T: FixedWidth> FixedWidthVector<T> {
    /// Makes `index` addressable, growing both buffers if needed.
    ///
    /// A no-op when `index` already fits. On growth, old contents are copied
    /// into the low range of the new buffers and every newly added validity
    /// bit is zero, so new slots default to null. Any `AllocationFailed` is
    /// returned with the vector unmodified.
    pub fn ensure_capacity(&mut self, index: usize) -> Result<(), VektorError> {
        let current = self.capacity();
        if index < current {
            return Ok(());
        }
        let target = grown_capacity(current, index, self.initial_capacity());
        log::debug!(
            "vector '{}': growing {} -> {} slots for index {}",
            self.name(),
            current,
            target,
            index
        );
        grow_buffers(self, target)?;
        log_metric!(
            "event" = "ensure_capacity",
            "outcome" = "grown",
            "capacity" = &target,
        );
        Ok(())
    }
}

/// Reallocates both buffers of `vector` for `new_capacity` slots.
///
/// Ordering is what makes this all-or-nothing: the fresh validity buffer is
/// acquired first (failure touches nothing), then the value buffer grows in
/// place (failure releases the fresh buffer and leaves the old contents
/// intact). Only after both succeed is the old bitmap copied and swapped out.
fn grow_buffers<T: FixedWidth>(
    vector: &mut FixedWidthVector<T>,
    new_capacity: usize,
) -> Result<(), VektorError> {
    let (allocator, validity, values) = vector.growth_parts();

    let mut new_validity = allocator.allocate(bytes_for(new_capacity))?;

    if let Err(err) = allocator.reallocate(values.buffer_mut(), new_capacity * T::WIDTH) {
        allocator.release(new_validity);
        return Err(err);
    }
    values.set_capacity(new_capacity);

    copy_validity(&allocator, validity, new_validity, new_capacity);
    Ok(())
}

/// Copies the old bitmap bytes into the low range of `new_validity` (its tail
/// is already zero-filled, i.e. null) and installs it, releasing the old
/// buffer.
fn copy_validity(
    allocator: &Arc<dyn Allocator>,
    validity: &mut ValidityBitmap,
    mut new_validity: RawBuffer,
    new_capacity: usize,
) {
    let old_bytes = validity.as_bytes();
    new_validity.as_mut_slice()[..old_bytes.len()].copy_from_slice(old_bytes);
    let old_validity = validity.replace(new_validity, new_capacity);
    allocator.release(old_validity);
}
