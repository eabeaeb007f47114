//! This module defines the canonical, type-safe representation of the scalar
//! kinds a vector can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical tag for a vector's element type: a numeric kind with a fixed
/// byte width.
///
/// This enum is part of a vector's public identity (§external readers key on
/// it), so the set of variants and their string representations are a stable
/// contract. Using an enum instead of a free-form string enables compile-time
/// checks and eliminates an entire class of runtime errors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl ScalarKind {
    /// The fixed width W in bytes of one slot of this kind.
    pub fn width(&self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// Returns `true` if the kind is a signed integer.
    pub fn is_signed_int(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns `true` if the kind is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

/// Provides the canonical string representation for a `ScalarKind`.
impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These string representations are part of the public contract.
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(ScalarKind::Int8.width(), 1);
        assert_eq!(ScalarKind::UInt16.width(), 2);
        assert_eq!(ScalarKind::Float32.width(), 4);
        assert_eq!(ScalarKind::Int64.width(), 8);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ScalarKind::Int32.is_signed_int());
        assert!(!ScalarKind::UInt32.is_signed_int());
        assert!(ScalarKind::Float64.is_float());
        assert!(!ScalarKind::Int64.is_float());
    }

    #[test]
    fn test_display_matches_serde_tag() {
        assert_eq!(ScalarKind::Float32.to_string(), "Float32");
        let json = serde_json::to_string(&ScalarKind::Float32).unwrap();
        assert_eq!(json, "\"Float32\"");
    }
}
