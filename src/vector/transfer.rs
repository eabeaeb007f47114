// In: src/vector/transfer.rs

//! This module implements `TransferPair`, the ownership-transfer and
//! range-split operations between two vectors of identical element type.
//!
//! `transfer` is the only sanctioned mechanism for moving buffer ownership
//! between vectors: it is O(1), moves both buffers, and leaves the source
//! owning nothing — by construction, since `RawBuffer` handles move.
//! `split_and_transfer` instead copies a sub-range into freshly sized target
//! buffers and leaves the source untouched.

use bitvec::prelude::*;

use crate::error::VektorError;
use crate::vector::bitmap::bytes_for;
use crate::vector::fixed::FixedWidthVector;
use crate::vector::scalar::FixedWidth;

/// Binds a source and a target vector of the same element type for ownership
/// transfer. The element type is pinned by the shared `T`, so a kind mismatch
/// is a compile error rather than a runtime check.
pub struct TransferPair<'a, T: FixedWidth> {
    source: &'a mut FixedWidthVector<T>,
    target: &'a mut FixedWidthVector<T>,
}

impl<'a, T: FixedWidth> TransferPair<'a, T> {
    pub fn new(
        source: &'a mut FixedWidthVector<T>,
        target: &'a mut FixedWidthVector<T>,
    ) -> Self {
        Self { source, target }
    }

    /// Moves ownership of the source's buffer pair to the target. The
    /// target's prior buffers (if any) are released; the source reverts to
    /// zero capacity and length and owns nothing afterward. No byte copying.
    pub fn transfer(&mut self) {
        log::trace!(
            "transfer: '{}' -> '{}' ({} slots)",
            self.source.name(),
            self.target.name(),
            self.source.capacity()
        );
        let (validity, values, capacity, value_count) = self.source.take_parts();
        self.target
            .adopt_parts(validity, values, capacity, value_count);
    }

    /// Copies source slots [start, start+length) into target slots
    /// [0, length), preserving nullness, into freshly allocated target
    /// buffers. The source is left unmodified.
    ///
    /// Fails with `OutOfRange` when the range exceeds the source's declared
    /// length, and with `AllocationFailed` (target untouched) when the target
    /// allocator cannot size the new buffers.
    pub fn split_and_transfer(&mut self, start: usize, length: usize) -> Result<(), VektorError> {
        let source_len = self.source.value_count();
        let end = start
            .checked_add(length)
            .ok_or(VektorError::OutOfRange {
                index: usize::MAX,
                capacity: source_len,
            })?;
        if end > source_len {
            return Err(VektorError::OutOfRange {
                index: end,
                capacity: source_len,
            });
        }

        let allocator = self.target.allocator_handle();
        let mut new_validity = allocator.allocate(bytes_for(length))?;
        let mut new_values = match allocator.allocate(length * T::WIDTH) {
            Ok(buf) => buf,
            Err(err) => {
                allocator.release(new_validity);
                return Err(err);
            }
        };

        // Value bytes are a straight memcpy of the source range.
        new_values
            .as_mut_slice()
            .copy_from_slice(&self.source.value_bytes()[start * T::WIDTH..end * T::WIDTH]);

        // Validity bits rarely land on a byte boundary, so copy them as bits.
        let source_bits = self.source.validity_bytes().view_bits::<Lsb0>();
        let target_bits = new_validity.as_mut_slice().view_bits_mut::<Lsb0>();
        for offset in 0..length {
            target_bits.set(offset, source_bits[start + offset]);
        }

        self.target
            .adopt_parts(new_validity, new_values, length, length);
        Ok(())
    }

    /// Copies one slot from the source into the target, growing the target
    /// when `to_index` is past its capacity.
    pub fn copy_value_safe(&mut self, from_index: usize, to_index: usize) -> Result<(), VektorError> {
        self.target.copy_from_safe(from_index, to_index, self.source)
    }

    /// The target vector, for inspection after a transfer.
    pub fn target(&self) -> &FixedWidthVector<T> {
        self.target
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VectorConfig;
    use crate::memory::allocator::{CappedAllocator, SystemAllocator};
    use std::sync::Arc;

    fn small_vector(name: &str) -> FixedWidthVector<f32> {
        FixedWidthVector::new(
            name,
            Arc::new(SystemAllocator),
            Arc::new(VectorConfig {
                initial_capacity: 8,
            }),
        )
    }

    fn sample_source(len: usize) -> FixedWidthVector<f32> {
        let mut source = small_vector("source");
        for i in 0..len {
            if i % 3 == 0 {
                source.set_null_safe(i).unwrap();
            } else {
                source.set_safe(i, i as f32 * 0.5).unwrap();
            }
        }
        source.set_value_count(len).unwrap();
        source
    }

    #[test]
    fn test_transfer_moves_ownership() {
        let mut source = sample_source(6);
        let mut target = small_vector("target");
        let before: Vec<Option<f32>> = (0..6).map(|i| source.get_or_null(i)).collect();

        TransferPair::new(&mut source, &mut target).transfer();

        assert_eq!(source.capacity(), 0);
        assert_eq!(source.value_count(), 0);
        assert_eq!(target.value_count(), 6);
        for (i, expected) in before.iter().enumerate() {
            assert_eq!(target.get_or_null(i), *expected);
        }
    }

    #[test]
    fn test_transfer_releases_targets_prior_buffers() {
        let allocator = Arc::new(CappedAllocator::new(4096));
        let config = Arc::new(VectorConfig {
            initial_capacity: 8,
        });
        let mut source =
            FixedWidthVector::<f32>::new("source", allocator.clone(), config.clone());
        let mut target = FixedWidthVector::<f32>::new("target", allocator.clone(), config);

        source.set_safe(0, 1.0).unwrap();
        source.set_value_count(1).unwrap();
        target.set_safe(0, 2.0).unwrap();
        let before_transfer = allocator.in_use();

        TransferPair::new(&mut source, &mut target).transfer();

        // The target's prior pair went back to the allocator; only the moved
        // pair remains outstanding.
        assert!(allocator.in_use() < before_transfer);
        assert_eq!(target.get_or_null(0), Some(1.0));
    }

    #[test]
    fn test_split_preserves_subrange_and_source() {
        // Slots 2, 3, 4 = {null, 1.0, 2.0}.
        let mut source = small_vector("source");
        for i in 0..10 {
            source.set_safe(i, 100.0).unwrap();
        }
        source.set_null(2).unwrap();
        source.set(3, 1.0).unwrap();
        source.set(4, 2.0).unwrap();
        source.set_value_count(10).unwrap();

        let mut target = small_vector("target");
        TransferPair::new(&mut source, &mut target)
            .split_and_transfer(2, 3)
            .unwrap();

        assert_eq!(target.value_count(), 3);
        assert_eq!(target.get_or_null(0), None);
        assert_eq!(target.get_or_null(1), Some(1.0));
        assert_eq!(target.get_or_null(2), Some(2.0));

        // Source is unmodified.
        assert_eq!(source.value_count(), 10);
        assert_eq!(source.get_or_null(2), None);
        assert_eq!(source.get_or_null(3), Some(1.0));
        assert_eq!(source.get_or_null(9), Some(100.0));
    }

    #[test]
    fn test_split_copies_unaligned_validity_bits() {
        let mut source = sample_source(16);
        let mut target = small_vector("target");

        TransferPair::new(&mut source, &mut target)
            .split_and_transfer(5, 9)
            .unwrap();

        for offset in 0..9 {
            assert_eq!(
                target.get_or_null(offset),
                source.get_or_null(5 + offset),
                "slot {} diverged",
                offset
            );
        }
    }

    #[test]
    fn test_split_out_of_range() {
        let mut source = sample_source(10);
        let mut target = small_vector("target");

        let result = TransferPair::new(&mut source, &mut target).split_and_transfer(8, 3);
        assert!(matches!(result, Err(VektorError::OutOfRange { .. })));
    }

    #[test]
    fn test_copy_value_safe_grows_target() {
        let mut source = sample_source(6);
        let mut target = small_vector("target");

        let mut pair = TransferPair::new(&mut source, &mut target);
        pair.copy_value_safe(4, 20).unwrap();
        pair.copy_value_safe(0, 21).unwrap(); // slot 0 is null in the source

        assert!(target.capacity() >= 22);
        assert_eq!(target.get_or_null(20), Some(2.0));
        assert_eq!(target.get_or_null(21), None);
    }
}
