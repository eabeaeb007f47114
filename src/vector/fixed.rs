// In: src/vector/fixed.rs

//! This module defines `FixedWidthVector<T>`, the nullable fixed-width
//! columnar vector at the heart of the crate.
//!
//! A vector composes two exclusively-owned buffers — a packed validity bitmap
//! and a contiguous little-endian value buffer — and exposes typed accessors
//! over them. Accessors come in two explicit sets: precondition-bearing "raw"
//! operations (`set`, `set_null`, `copy_from`) that never allocate, for hot
//! loops that already know the index is in bounds, and self-growing "safe"
//! operations (`set_safe`, ...) that consult the capacity growth policy first.
//!
//! A null slot's value bytes are leftover data. The validity bit is the only
//! authoritative signal of nullness; every reader must check it before
//! trusting the value bytes.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::VectorConfig;
use crate::error::VektorError;
use crate::memory::allocator::{Allocator, SystemAllocator};
use crate::memory::buffer::RawBuffer;
use crate::types::ScalarKind;
use crate::utils::safe_bytes_to_typed_slice;
use crate::vector::bitmap::{bytes_for, ValidityBitmap};
use crate::vector::scalar::FixedWidth;
use crate::vector::values::ValueBuffer;

/// A nullable vector of fixed-width scalars.
///
/// Both buffers are allocated lazily: a new vector owns no memory until the
/// first `*_safe` write (or explicit `ensure_capacity`) triggers the growth
/// policy. Vectors are single-threaded; `&mut self` on every mutator makes
/// concurrent mutation a compile error.
#[derive(Debug)]
pub struct FixedWidthVector<T: FixedWidth> {
    name: String,
    allocator: Arc<dyn Allocator>,
    config: Arc<VectorConfig>,
    validity: ValidityBitmap,
    values: ValueBuffer,
    value_count: usize,
    _marker: PhantomData<T>,
}

impl<T: FixedWidth> FixedWidthVector<T> {
    /// Creates a vector against the given allocator and growth config. This
    /// doesn't allocate any memory for the data in the vector.
    pub fn new(
        name: impl Into<String>,
        allocator: Arc<dyn Allocator>,
        config: Arc<VectorConfig>,
    ) -> Self {
        Self {
            name: name.into(),
            allocator,
            config,
            validity: ValidityBitmap::empty(),
            values: ValueBuffer::empty(T::WIDTH),
            value_count: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a vector against the heap allocator and the default growth
    /// config.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(
            name,
            Arc::new(SystemAllocator),
            Arc::new(VectorConfig::default()),
        )
    }

    //==============================================================================
    // 1. Identity & reader surface
    //==============================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element type tag: numeric kind plus fixed width W.
    pub fn data_type(&self) -> ScalarKind {
        T::KIND
    }

    /// The number of slots both buffers currently have storage for.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// The declared logical length, always <= `capacity()`.
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Declares the logical length consumed by readers and serializers.
    pub fn set_value_count(&mut self, count: usize) -> Result<(), VektorError> {
        if count > self.capacity() {
            return Err(VektorError::OutOfRange {
                index: count,
                capacity: self.capacity(),
            });
        }
        self.value_count = count;
        Ok(())
    }

    /// The number of null slots among the first `value_count()` slots.
    pub fn null_count(&self) -> usize {
        self.validity.count_nulls(self.value_count)
    }

    /// Byte-exact validity bitmap for the declared length: ⌈value_count/8⌉
    /// bytes, LSB-first. Readers never mutate this.
    pub fn validity_bytes(&self) -> &[u8] {
        &self.validity.as_bytes()[..bytes_for(self.value_count)]
    }

    /// Byte-exact value buffer for the declared length: value_count × W
    /// bytes, little-endian, slot i at offset i×W. Readers never mutate this.
    pub fn value_bytes(&self) -> &[u8] {
        &self.values.as_bytes()[..self.value_count * T::WIDTH]
    }

    /// Zero-copy typed view over the declared value bytes. Null slots are
    /// present in the view but hold leftover data; consult the validity
    /// bitmap before trusting any element.
    pub fn typed_values(&self) -> Result<&[T], VektorError> {
        safe_bytes_to_typed_slice(self.value_bytes())
    }

    //==============================================================================
    // 2. Value retrieval
    //==============================================================================

    /// Gets the element at `index`. Fails with `NullValue` if the slot's
    /// validity bit is 0, or `OutOfRange` if the index is past capacity.
    pub fn get(&self, index: usize) -> Result<T, VektorError> {
        if !self.validity.is_valid(index)? {
            return Err(VektorError::NullValue(index));
        }
        Ok(T::read_le(self.values.slot_bytes(index)))
    }

    /// Gets the element at `index`, or `None` for a null or out-of-capacity
    /// slot. Never fails.
    pub fn get_or_null(&self, index: usize) -> Option<T> {
        if index >= self.capacity() || !self.validity.is_valid_unchecked(index) {
            return None;
        }
        Some(T::read_le(self.values.slot_bytes(index)))
    }

    /// Whether the slot at `index` holds a value.
    pub fn is_set(&self, index: usize) -> Result<bool, VektorError> {
        self.validity.is_valid(index)
    }

    /// Whether the slot at `index` is null.
    pub fn is_null(&self, index: usize) -> Result<bool, VektorError> {
        Ok(!self.is_set(index)?)
    }

    /// Decodes the value at `index` directly from an externally supplied
    /// value buffer, without any validity checking. Used by bulk readers that
    /// already know validity out-of-band.
    ///
    /// Precondition: `value_bytes` covers at least `(index + 1) * W` bytes.
    pub fn raw_get(value_bytes: &[u8], index: usize) -> T {
        T::read_le(&value_bytes[index * T::WIDTH..(index + 1) * T::WIDTH])
    }

    //==============================================================================
    // 3. Value setters (raw: never allocate, precondition index < capacity)
    //==============================================================================

    /// Sets the element at `index`: validity bit to 1, value bytes written.
    /// Does not check or grow capacity beyond the `OutOfRange` guard.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VektorError> {
        self.check_bounds(index)?;
        self.validity.set_valid(index);
        value.write_le(self.values.slot_bytes_mut(index));
        Ok(())
    }

    /// Sets the slot at `index` to null. The value bytes are left untouched;
    /// the cleared bit makes them unobservable.
    pub fn set_null(&mut self, index: usize) -> Result<(), VektorError> {
        self.check_bounds(index)?;
        self.validity.set_bit(index, false);
        Ok(())
    }

    /// Unified tri-state setter. A negative `is_set` is an `InvalidArgument`;
    /// zero clears the validity bit only; positive behaves as `set`.
    pub fn set_with_flag(&mut self, index: usize, is_set: i32, value: T) -> Result<(), VektorError> {
        if is_set < 0 {
            return Err(VektorError::InvalidArgument(format!(
                "is_set flag must be non-negative, got {}",
                is_set
            )));
        }
        if is_set > 0 {
            self.set(index, value)
        } else {
            self.set_null(index)
        }
    }

    /// Copies one slot from `source`: a value is written (validity 1), a null
    /// clears the bit at `to_index`. Requires `to_index` within this vector's
    /// capacity and `from_index` within the source's.
    pub fn copy_from(
        &mut self,
        from_index: usize,
        to_index: usize,
        source: &Self,
    ) -> Result<(), VektorError> {
        self.check_bounds(to_index)?;
        if source.validity.is_valid(from_index)? {
            self.set(to_index, T::read_le(source.values.slot_bytes(from_index)))
        } else {
            self.validity.set_bit(to_index, false);
            Ok(())
        }
    }

    //==============================================================================
    // 4. Safe setters (consult the growth policy first)
    //==============================================================================

    /// Same as `set`, growing capacity first when `index` is past it.
    pub fn set_safe(&mut self, index: usize, value: T) -> Result<(), VektorError> {
        self.ensure_capacity(index)?;
        self.set(index, value)
    }

    /// Same as `set_null`, growing capacity first when `index` is past it.
    pub fn set_null_safe(&mut self, index: usize) -> Result<(), VektorError> {
        self.ensure_capacity(index)?;
        self.set_null(index)
    }

    /// Same as `set_with_flag`, growing capacity first when `index` is past it.
    pub fn set_with_flag_safe(
        &mut self,
        index: usize,
        is_set: i32,
        value: T,
    ) -> Result<(), VektorError> {
        self.ensure_capacity(index)?;
        self.set_with_flag(index, is_set, value)
    }

    /// Same as `copy_from`, growing this vector first when `to_index` is past
    /// its capacity.
    pub fn copy_from_safe(
        &mut self,
        from_index: usize,
        to_index: usize,
        source: &Self,
    ) -> Result<(), VektorError> {
        self.ensure_capacity(to_index)?;
        self.copy_from(from_index, to_index, source)
    }

    //==============================================================================
    // 5. Lifecycle
    //==============================================================================

    /// Releases both buffers back to the allocator and reverts the vector to
    /// zero capacity and length.
    pub fn close(&mut self) {
        let capacity = self.capacity();
        if capacity > 0 {
            log::trace!("vector '{}': releasing {} slots", self.name, capacity);
        }
        let validity = self.validity.take();
        let values = self.values.take();
        self.allocator.release(validity);
        self.allocator.release(values);
        self.value_count = 0;
    }

    fn check_bounds(&self, index: usize) -> Result<(), VektorError> {
        if index >= self.capacity() {
            return Err(VektorError::OutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    //==============================================================================
    // 6. Ownership plumbing (crate-internal, used by growth and transfer)
    //==============================================================================

    pub(crate) fn allocator_handle(&self) -> Arc<dyn Allocator> {
        Arc::clone(&self.allocator)
    }

    pub(crate) fn initial_capacity(&self) -> usize {
        self.config.initial_capacity
    }

    /// Split borrows for the growth path: the allocator plus both buffer
    /// components, mutably.
    pub(crate) fn growth_parts(
        &mut self,
    ) -> (Arc<dyn Allocator>, &mut ValidityBitmap, &mut ValueBuffer) {
        (Arc::clone(&self.allocator), &mut self.validity, &mut self.values)
    }

    /// Moves both buffers out, reverting this vector to zero capacity and
    /// length. Returns (validity, values, capacity, value_count).
    pub(crate) fn take_parts(&mut self) -> (RawBuffer, RawBuffer, usize, usize) {
        let capacity = self.capacity();
        let count = self.value_count;
        let validity = self.validity.take();
        let values = self.values.take();
        self.value_count = 0;
        (validity, values, capacity, count)
    }

    /// Adopts a buffer pair as this vector's storage, releasing whatever it
    /// owned before. The pair must be sized for `capacity` slots of width W.
    pub(crate) fn adopt_parts(
        &mut self,
        validity: RawBuffer,
        values: RawBuffer,
        capacity: usize,
        value_count: usize,
    ) {
        let old_validity = self.validity.replace(validity, capacity);
        let old_values = self.values.replace(values, capacity);
        self.allocator.release(old_validity);
        self.allocator.release(old_values);
        self.value_count = value_count;
    }
}

impl<T: FixedWidth> Drop for FixedWidthVector<T> {
    fn drop(&mut self) {
        self.close();
    }
}
