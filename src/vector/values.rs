// In: src/vector/values.rs

//! This module defines `ValueBuffer`, the contiguous fixed-width value storage
//! of a vector.
//!
//! The layout is a wire contract shared with external readers: slot i occupies
//! bytes [i*W, i*W+W), little-endian, for a fixed width W. Bytes of null slots
//! are leftover data; only the validity bitmap says whether they mean anything.

use crate::memory::buffer::RawBuffer;

/// Fixed-width value storage over an exclusively-owned byte buffer.
#[derive(Debug)]
pub struct ValueBuffer {
    buf: RawBuffer,
    width: usize,
    capacity: usize,
}

impl ValueBuffer {
    /// A buffer for `width`-byte slots, covering zero slots and owning no
    /// memory.
    pub fn empty(width: usize) -> Self {
        debug_assert!(width > 0);
        Self {
            buf: RawBuffer::empty(),
            width,
            capacity: 0,
        }
    }

    /// The fixed width W in bytes of one slot.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of slots this buffer has storage for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The W bytes of slot `index`. Precondition: `index < capacity()`.
    pub fn slot_bytes(&self, index: usize) -> &[u8] {
        let offset = index * self.width;
        &self.buf.as_slice()[offset..offset + self.width]
    }

    /// The W bytes of slot `index`, mutably. Precondition: `index < capacity()`.
    pub fn slot_bytes_mut(&mut self, index: usize) -> &mut [u8] {
        let offset = index * self.width;
        &mut self.buf.as_mut_slice()[offset..offset + self.width]
    }

    /// Byte-exact view of the backing buffer, for readers and serializers.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    //==============================================================================
    // Ownership plumbing (crate-internal, used by growth and transfer)
    //==============================================================================

    /// The backing buffer, mutably; used by in-place reallocation. The caller
    /// must keep `capacity` in sync via `set_capacity`.
    pub(crate) fn buffer_mut(&mut self) -> &mut RawBuffer {
        &mut self.buf
    }

    /// Declares the slot capacity after the backing buffer has grown. The
    /// buffer must already hold at least `capacity * width` bytes.
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        debug_assert!(self.buf.len() >= capacity * self.width);
        self.capacity = capacity;
    }

    /// Installs a new backing buffer covering `capacity` slots, returning the
    /// old buffer for the caller to release.
    pub(crate) fn replace(&mut self, buf: RawBuffer, capacity: usize) -> RawBuffer {
        debug_assert!(buf.len() >= capacity * self.width);
        self.capacity = capacity;
        std::mem::replace(&mut self.buf, buf)
    }

    /// Moves the backing buffer out, reverting this storage to zero capacity.
    pub(crate) fn take(&mut self) -> RawBuffer {
        self.capacity = 0;
        self.buf.take()
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
