// In: src/memory/allocator.rs

//! This module defines the allocator boundary consumed by vectors.
//!
//! Vectors never touch the global allocator directly; they acquire, grow, and
//! release `RawBuffer`s through the `Allocator` trait. Accounting policy and
//! pooling live behind this trait and are out of scope for the vector itself.
//! Two implementations ship with the crate: `SystemAllocator` (the default,
//! heap-backed) and `CappedAllocator` (a byte-budgeted wrapper that makes
//! allocation failure deterministic, which the growth tests rely on).

use std::cell::Cell;

use crate::error::VektorError;
use crate::memory::buffer::RawBuffer;

//==================================================================================
// 1. The Allocator Boundary
//==================================================================================

/// Hands out, grows, and reclaims `RawBuffer`s.
///
/// Contract: every method either fully succeeds or fails with
/// `AllocationFailed` while leaving its inputs untouched. `reallocate` in
/// particular must preserve the buffer's existing contents on success and
/// leave them bit-for-bit intact on failure, so callers can implement
/// all-or-nothing growth.
///
/// The `Debug` supertrait keeps vectors holding an `Arc<dyn Allocator>`
/// debug-printable.
pub trait Allocator: std::fmt::Debug {
    /// Acquires a zero-filled region of `bytes` bytes.
    fn allocate(&self, bytes: usize) -> Result<RawBuffer, VektorError>;

    /// Grows `buf` in place to `new_bytes` bytes, copying existing contents
    /// and zero-filling the tail. `new_bytes` must be >= `buf.len()`.
    fn reallocate(&self, buf: &mut RawBuffer, new_bytes: usize) -> Result<(), VektorError>;

    /// Returns a region to the allocator. Infallible: a buffer, once handed
    /// out, can always be given back.
    fn release(&self, buf: RawBuffer);
}

//==================================================================================
// 2. SystemAllocator (the default)
//==================================================================================

/// The default heap-backed allocator. No accounting, no budget.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&self, bytes: usize) -> Result<RawBuffer, VektorError> {
        log::trace!("SystemAllocator: allocate {} bytes", bytes);
        Ok(RawBuffer::from_vec(vec![0u8; bytes]))
    }

    fn reallocate(&self, buf: &mut RawBuffer, new_bytes: usize) -> Result<(), VektorError> {
        if new_bytes < buf.len() {
            return Err(VektorError::InternalError(format!(
                "reallocate cannot shrink a buffer ({} -> {} bytes)",
                buf.len(),
                new_bytes
            )));
        }
        log::trace!(
            "SystemAllocator: reallocate {} -> {} bytes",
            buf.len(),
            new_bytes
        );
        buf.grow_to(new_bytes);
        Ok(())
    }

    fn release(&self, buf: RawBuffer) {
        log::trace!("SystemAllocator: release {} bytes", buf.len());
        drop(buf);
    }
}

//==================================================================================
// 3. CappedAllocator (deterministic failure for tests and admission control)
//==================================================================================

/// An allocator with a fixed byte budget. Requests that would push the
/// outstanding total past the budget fail with `AllocationFailed` and leave
/// every buffer untouched.
///
/// Single-threaded by design, like the vectors themselves; the running total
/// is a `Cell`, not an atomic.
#[derive(Debug)]
pub struct CappedAllocator {
    limit: usize,
    in_use: Cell<usize>,
}

impl CappedAllocator {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            in_use: Cell::new(0),
        }
    }

    /// Bytes currently handed out and not yet released.
    pub fn in_use(&self) -> usize {
        self.in_use.get()
    }

    fn admit(&self, additional: usize, requested: usize) -> Result<(), VektorError> {
        let in_use = self.in_use.get();
        if in_use + additional > self.limit {
            return Err(VektorError::AllocationFailed {
                requested,
                reason: format!(
                    "budget exhausted ({} of {} bytes in use)",
                    in_use, self.limit
                ),
            });
        }
        self.in_use.set(in_use + additional);
        Ok(())
    }
}

impl Allocator for CappedAllocator {
    fn allocate(&self, bytes: usize) -> Result<RawBuffer, VektorError> {
        self.admit(bytes, bytes)?;
        Ok(RawBuffer::from_vec(vec![0u8; bytes]))
    }

    fn reallocate(&self, buf: &mut RawBuffer, new_bytes: usize) -> Result<(), VektorError> {
        if new_bytes < buf.len() {
            return Err(VektorError::InternalError(format!(
                "reallocate cannot shrink a buffer ({} -> {} bytes)",
                buf.len(),
                new_bytes
            )));
        }
        self.admit(new_bytes - buf.len(), new_bytes)?;
        buf.grow_to(new_bytes);
        Ok(())
    }

    fn release(&self, buf: RawBuffer) {
        self.in_use.set(self.in_use.get() - buf.len());
        drop(buf);
    }
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_allocate_zero_fills() {
        let alloc = SystemAllocator;
        let buf = alloc.allocate(16).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_system_reallocate_preserves_contents() {
        let alloc = SystemAllocator;
        let mut buf = alloc.allocate(4).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

        alloc.reallocate(&mut buf, 8).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn test_capped_allocator_enforces_budget() {
        let alloc = CappedAllocator::new(10);
        let buf = alloc.allocate(8).unwrap();
        assert_eq!(alloc.in_use(), 8);

        // 8 + 4 > 10: must fail, leaving accounting unchanged.
        let result = alloc.allocate(4);
        assert!(matches!(result, Err(VektorError::AllocationFailed { .. })));
        assert_eq!(alloc.in_use(), 8);

        alloc.release(buf);
        assert_eq!(alloc.in_use(), 0);
        assert!(alloc.allocate(10).is_ok());
    }

    #[test]
    fn test_capped_reallocate_failure_leaves_buffer_intact() {
        let alloc = CappedAllocator::new(6);
        let mut buf = alloc.allocate(4).unwrap();
        buf.as_mut_slice().copy_from_slice(&[9, 9, 9, 9]);

        let result = alloc.reallocate(&mut buf, 8);
        assert!(matches!(result, Err(VektorError::AllocationFailed { .. })));
        assert_eq!(buf.as_slice(), &[9, 9, 9, 9]);
        assert_eq!(alloc.in_use(), 4);
    }
}
