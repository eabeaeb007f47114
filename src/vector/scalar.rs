// In: src/vector/scalar.rs

//! This module defines the `FixedWidth` trait that ties a Rust scalar type to
//! its on-buffer representation: a fixed byte width W, a `ScalarKind` tag, and
//! little-endian encode/decode functions.
//!
//! One generic vector keyed by this trait replaces the per-type class
//! duplication a codegen approach would produce, while preserving the exact
//! byte contract per kind: slot i occupies bytes [i*W, i*W+W), little-endian,
//! on every target.

use std::fmt;

use crate::types::ScalarKind;

/// A scalar that can live in a fixed-width value buffer.
///
/// The `bytemuck::Pod` bound guarantees the type has no invalid bit patterns,
/// which is what makes the zero-copy `typed_values` view and the raw decoder
/// sound even over stale bytes in null slots.
pub trait FixedWidth: bytemuck::Pod + Copy + PartialEq + fmt::Debug + 'static {
    /// The fixed width W: the byte size of one slot.
    const WIDTH: usize;

    /// The type tag this scalar contributes to a vector's public identity.
    const KIND: ScalarKind;

    /// Encodes `self` into exactly `Self::WIDTH` bytes, little-endian.
    fn write_le(self, dst: &mut [u8]);

    /// Decodes a value from exactly `Self::WIDTH` bytes, little-endian.
    fn read_le(src: &[u8]) -> Self;
}

// Implement the trait for all supported primitive scalar types.
macro_rules! impl_fixed_width {
    ($T:ty, $kind:expr) => {
        impl FixedWidth for $T {
            const WIDTH: usize = std::mem::size_of::<$T>();
            const KIND: ScalarKind = $kind;

            fn write_le(self, dst: &mut [u8]) {
                dst.copy_from_slice(&self.to_le_bytes());
            }

            fn read_le(src: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$T>()];
                bytes.copy_from_slice(src);
                <$T>::from_le_bytes(bytes)
            }
        }
    };
}

impl_fixed_width!(i8, ScalarKind::Int8);
impl_fixed_width!(i16, ScalarKind::Int16);
impl_fixed_width!(i32, ScalarKind::Int32);
impl_fixed_width!(i64, ScalarKind::Int64);
impl_fixed_width!(u8, ScalarKind::UInt8);
impl_fixed_width!(u16, ScalarKind::UInt16);
impl_fixed_width!(u32, ScalarKind::UInt32);
impl_fixed_width!(u64, ScalarKind::UInt64);
impl_fixed_width!(f32, ScalarKind::Float32);
impl_fixed_width!(f64, ScalarKind::Float64);

//==================================================================================
// Unit Tests
//==================================================================================
