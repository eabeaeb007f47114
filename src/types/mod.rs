//! Type-level metadata for vectors: the `ScalarKind` tag that, together with
//! the two buffers and the value count, forms a vector's public identity.

mod scalar_kind;

pub use scalar_kind::ScalarKind;
