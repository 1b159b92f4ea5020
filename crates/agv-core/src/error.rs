//! Core error type.
//!
//! Planning and collision checks are total functions and never error; the
//! variants here cover the construction/validation seams (unknown ids, bad
//! configuration).  Sub-crates define their own error enums and wrap or
//! convert `CoreError` as one variant where needed.

use thiserror::Error;

use crate::{JobId, VehicleId};

/// The base error type for `agv-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("job {0} not found")]
    JobNotFound(JobId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
