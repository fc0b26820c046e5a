//! Input size limits.
//!
//! Both logs are fully buffered before scoring. No cap applies by default;
//! a configured cap rejects an oversized input up front instead of
//! exhausting memory halfway through a run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits applied to each input log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum size of one input file in bytes (default: unlimited)
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,
}

pub(crate) fn default_max_input_bytes() -> u64 {
    u64::MAX
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl InputLimits {
    /// Validate the size of an input file
    pub fn validate_input(&self, path: &Path, size: u64) -> Result<(), LimitViolation> {
        if size > self.max_input_bytes {
            return Err(LimitViolation::InputTooLarge {
                path: path.display().to_string(),
                actual: size,
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// Limit violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("Input {path} is {actual} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge { path: String, actual: u64, limit: u64 },
}
