// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Solve-time options.
//!
//! `SolveParameters` can be built in code or loaded from JSON. Every field
//! has a default, so a configuration file only lists what it changes:
//!
//! ```json
//! { "enforce_zero_minimum": true, "num_neighbors": 4, "verbose": true }
//! ```

use crate::{constraints::BaseLevelConstraint, error::UsageError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use surfrec_lp::params::{BackendParameters, MipFocus, DEFAULT_MIP_GAP};
use thiserror::Error;

/// Options of a single `IlpSolver::min_surface` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolveParameters {
    /// Require every local minimum of the surface to reach level zero.
    pub enforce_zero_minimum: bool,
    /// Number of neighbors of an interior column. Required with
    /// `enforce_zero_minimum`.
    pub num_neighbors: Option<usize>,
    /// Backend thread count; `0` lets the backend decide.
    pub num_threads: usize,
    pub verbose: bool,
    /// Accepted for compatibility. Has no effect: the program is always binary.
    pub solve_relaxed_problem: bool,
    pub mip_gap: f64,
    pub mip_focus: MipFocus,
    pub base_level_constraint: BaseLevelConstraint,
}

impl Default for SolveParameters {
    fn default() -> Self {
        Self {
            enforce_zero_minimum: false,
            num_neighbors: None,
            num_threads: 0,
            verbose: false,
            solve_relaxed_problem: false,
            mip_gap: DEFAULT_MIP_GAP,
            mip_focus: MipFocus::Balanced,
            base_level_constraint: BaseLevelConstraint::Equality,
        }
    }
}

/// Failure to load `SolveParameters` from JSON.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("could not read parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid parameters: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolveParameters {
    /// Parses parameters from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ParameterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads parameters from a JSON file.
    pub fn from_json_file<P>(path: P) -> Result<Self, ParameterError>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Enables the zero-minimum constraint for columns with `num_neighbors` neighbors.
    #[inline]
    pub fn with_zero_minimum(mut self, num_neighbors: usize) -> Self {
        self.enforce_zero_minimum = true;
        self.num_neighbors = Some(num_neighbors);
        self
    }

    #[inline]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    #[inline]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[inline]
    pub fn with_mip_gap(mut self, mip_gap: f64) -> Self {
        self.mip_gap = mip_gap;
        self
    }

    #[inline]
    pub fn with_mip_focus(mut self, mip_focus: MipFocus) -> Self {
        self.mip_focus = mip_focus;
        self
    }

    #[inline]
    pub fn with_base_level_constraint(mut self, form: BaseLevelConstraint) -> Self {
        self.base_level_constraint = form;
        self
    }

    /// The neighbor count the zero-minimum constraint uses, if it is enabled.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::MissingNeighborCount` if the constraint is
    /// enabled without a neighbor count.
    pub fn zero_minimum_neighbors(&self) -> Result<Option<usize>, UsageError> {
        match (self.enforce_zero_minimum, self.num_neighbors) {
            (false, _) => Ok(None),
            (true, Some(n)) => Ok(Some(n)),
            (true, None) => Err(UsageError::MissingNeighborCount),
        }
    }

    /// The part of the options the backend consumes.
    #[inline]
    pub fn backend_parameters(&self) -> BackendParameters {
        BackendParameters {
            mip_gap: self.mip_gap,
            mip_focus: self.mip_focus,
            num_threads: self.num_threads,
            verbose: self.verbose,
        }
    }
}
