// In: src/memory/buffer.rs

//! This module defines `RawBuffer`, the exclusively-owned byte region that
//! backs both the validity bitmap and the value buffer of a vector.
//!
//! `RawBuffer` is deliberately *not* `Clone`: a buffer has exactly one owner
//! at any time, and ownership moves only through explicit transfer. This turns
//! the "one vector owns a given buffer pair" invariant into a compile-time
//! guarantee instead of a convention.

/// An exclusively-owned, contiguous byte region handed out by an `Allocator`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RawBuffer {
    bytes: Vec<u8>,
}

impl RawBuffer {
    /// An empty buffer owning no memory. This is what a freshly constructed
    /// or fully transferred vector holds.
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Wraps an already-materialized byte vector. Only the allocator module
    /// creates non-empty buffers.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The byte length of the region.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True iff the buffer owns no memory.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A read-only view of the whole region.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// A mutable view of the whole region.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Grows the region in place to `new_len` bytes, zero-filling the tail
    /// and preserving existing contents. Never shrinks.
    pub(crate) fn grow_to(&mut self, new_len: usize) {
        debug_assert!(new_len >= self.bytes.len());
        self.bytes.resize(new_len, 0);
    }

    /// Moves the region out, leaving this handle empty. The taken buffer is
    /// the caller's to release.
    pub(crate) fn take(&mut self) -> RawBuffer {
        std::mem::take(self)
    }
}
