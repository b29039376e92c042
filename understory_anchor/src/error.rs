// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only configuration problems are errors. A boundary with no area is a normal
//! outcome of resolution and is reported through
//! [`Resolution::boundary_empty`](crate::Resolution::boundary_empty) instead.

use alloc::string::String;

use thiserror::Error;

/// An [`Options`](crate::Options) value that cannot be resolved against.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `auto` search was requested with nothing to search.
    #[error("`possible_placements` is empty while `auto` is enabled")]
    EmptyPlacements,
    /// A numeric option is NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFinite {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A numeric option that must not be negative is.
    #[error("`{name}` must not be negative, got {value}")]
    Negative {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The flip threshold is a fit-fraction delta and must lie in `0..=1`.
    #[error("`flip_threshold` must lie in 0..=1, got {0}")]
    FlipThreshold(f64),
    /// A fixed layer size is negative or not finite.
    #[error("fixed layer size must be finite and non-negative, got {width}x{height}")]
    LayerSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// A placement name that is not one of the known placements.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown placement `{name}`")]
pub struct ParsePlacementError {
    name: String,
}

impl ParsePlacementError {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}
