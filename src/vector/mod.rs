//! The vector core: a nullable fixed-width columnar vector composed of a
//! packed validity bitmap and a contiguous value buffer, plus the capacity
//! growth and ownership transfer machinery around it.

pub mod bitmap;
pub mod fixed;
pub mod growth;
pub mod scalar;
pub mod transfer;
pub mod values;


pub use bitmap::ValidityBitmap;
pub use fixed::FixedWidthVector;
pub use scalar::FixedWidth;
pub use transfer::TransferPair;
pub use values::ValueBuffer;
