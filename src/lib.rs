//! This file is the root of the `vektor` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`vector`, `memory`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types that make up the public surface:
//!     the vector itself, its buffers, the allocator boundary, and the
//!     unified error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod memory;
pub mod types;
pub mod vector;

mod error;
mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::VectorConfig;
pub use error::VektorError;
pub use memory::allocator::{Allocator, CappedAllocator, SystemAllocator};
pub use types::ScalarKind;
pub use vector::fixed::FixedWidthVector;
pub use vector::scalar::FixedWidth;
pub use vector::transfer::TransferPair;
