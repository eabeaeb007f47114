// In: src/config.rs

//! The single source of truth for all vektor allocation configuration.
//!
//! This module defines the `VectorConfig` struct, which is designed to be
//! created once at the application boundary (e.g., from a user's JSON file)
//! and then shared across every vector that should follow the same growth
//! policy, via a read-only `Arc<VectorConfig>`.

use serde::{Deserialize, Serialize};

use crate::error::VektorError;

//==================================================================================
// I. Core Configuration Struct
//==================================================================================

/// The default number of slots a vector grows to on its very first write.
///
/// Vectors allocate nothing at construction; the first `ensure_capacity` call
/// starts the doubling sequence from this value.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;

/// Allocation policy shared by every vector created against it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct VectorConfig {
    /// The capacity (in slots) of the first allocation. Doubling starts here.
    /// Must be at least 1; a zero value is rejected at parse time.
    pub initial_capacity: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl VectorConfig {
    /// Parses a config from its JSON representation, as supplied at the
    /// application boundary. Unknown fields are rejected; a zero
    /// `initial_capacity` is rejected because it would stall the doubling
    /// sequence.
    pub fn from_json(json: &str) -> Result<Self, VektorError> {
        let config: Self = serde_json::from_str(json)?;
        if config.initial_capacity == 0 {
            return Err(VektorError::InvalidArgument(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

//==================================================================================
// II. Unit Tests
//==================================================================================
