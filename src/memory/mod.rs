//! The memory boundary of the crate: exclusively-owned byte regions and the
//! allocator trait that hands them out.
//!
//! Everything above this module manipulates `RawBuffer`s; nothing above this
//! module calls the global allocator directly.

pub mod allocator;
pub mod buffer;

pub use allocator::{Allocator, CappedAllocator, SystemAllocator};
pub use buffer::RawBuffer;
