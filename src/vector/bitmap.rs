// In: src/vector/bitmap.rs

//! This module defines `ValidityBitmap`, the packed bit-per-slot null tracker.
//!
//! The bit layout is a wire contract shared with external readers and
//! serializers: one bit per logical slot, packed LSB-first within each byte,
//! byte length ⌈capacity/8⌉. Bit `index % 8` of byte `index / 8` is 1 iff the
//! slot holds a value. Any change here breaks binary compatibility. The
//! `bitvec` views below use the `Lsb0` ordering for exactly this reason.

use bitvec::prelude::*;

use crate::error::VektorError;
use crate::memory::buffer::RawBuffer;

/// The number of bitmap bytes needed to cover `capacity` slots.
pub fn bytes_for(capacity: usize) -> usize {
    (capacity + 7) / 8
}

/// A packed null tracker over an exclusively-owned byte buffer.
///
/// Bits at positions >= `capacity` are unspecified; readers must not
/// interpret them.
#[derive(Debug, Default)]
pub struct ValidityBitmap {
    buf: RawBuffer,
    capacity: usize,
}

impl ValidityBitmap {
    /// A bitmap covering zero slots and owning no memory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The number of slots this bitmap covers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads the validity bit for `index`, failing with `OutOfRange` when the
    /// index is not covered by this bitmap.
    pub fn is_valid(&self, index: usize) -> Result<bool, VektorError> {
        if index >= self.capacity {
            return Err(VektorError::OutOfRange {
                index,
                capacity: self.capacity,
            });
        }
        Ok(self.is_valid_unchecked(index))
    }

    /// Reads the validity bit for `index`. Precondition: `index < capacity()`.
    pub fn is_valid_unchecked(&self, index: usize) -> bool {
        self.buf.as_slice().view_bits::<Lsb0>()[index]
    }

    /// Writes the validity bit for `index` in place. No allocation, no side
    /// effects beyond the target byte. Precondition: `index < capacity()`.
    pub fn set_bit(&mut self, index: usize, valid: bool) {
        debug_assert!(index < self.capacity);
        self.buf
            .as_mut_slice()
            .view_bits_mut::<Lsb0>()
            .set(index, valid);
    }

    /// Marks `index` as holding a value; the common case right after the
    /// value bytes were written. Precondition: `index < capacity()`.
    pub fn set_valid(&mut self, index: usize) {
        self.set_bit(index, true);
    }

    /// The number of 0 bits among the first `len` slots.
    pub fn count_nulls(&self, len: usize) -> usize {
        debug_assert!(len <= self.capacity);
        len - self.buf.as_slice().view_bits::<Lsb0>()[..len].count_ones()
    }

    /// Byte-exact view of the backing buffer, for readers and serializers.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    //==============================================================================
    // Ownership plumbing (crate-internal, used by growth and transfer)
    //==============================================================================

    /// Installs a new backing buffer covering `capacity` slots, returning the
    /// old buffer for the caller to release. The new buffer must be at least
    /// `bytes_for(capacity)` bytes.
    pub(crate) fn replace(&mut self, buf: RawBuffer, capacity: usize) -> RawBuffer {
        debug_assert!(buf.len() >= bytes_for(capacity));
        self.capacity = capacity;
        std::mem::replace(&mut self.buf, buf)
    }

    /// Moves the backing buffer out, reverting this bitmap to zero capacity.
    pub(crate) fn take(&mut self) -> RawBuffer {
        self.capacity = 0;
        self.buf.take()
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
