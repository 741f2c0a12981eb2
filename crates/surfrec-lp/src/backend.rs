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

//! The solver backend contract.
//!
//! The surface engine never talks to a concrete solver. It formulates its
//! program through `SolverBackend`, in this order:
//!
//! 1. `initialize` with the number of variables and their types,
//! 2. `set_objective`,
//! 3. `set_constraints` (and optionally `add_constraint`),
//! 4. `solve`, or `dump_problem` to write the program to a file.
//!
//! A backend instance is built for one formulation; callers obtain a fresh
//! one from a `BackendFactory` for every solve.

use crate::{
    constraint::{LinearConstraint, LinearConstraints},
    index::VariableIndex,
    objective::LinearObjective,
    params::BackendParameters,
    solution::Solution,
    variable::VariableTypes,
};
use std::path::Path;
use thiserror::Error;

/// Failures reported by a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend does not implement the requested operation.
    #[error("backend `{backend}` does not support {operation}")]
    NotSupported {
        backend: &'static str,
        operation: &'static str,
    },
    /// An operation was called before `initialize`.
    #[error("the backend has not been initialized")]
    Uninitialized,
    /// A term refers to a variable the backend was not initialized with.
    #[error("{variable} is out of range: the problem has {num_variables} variables")]
    VariableOutOfRange {
        variable: VariableIndex,
        num_variables: usize,
    },
    /// The objective does not have one coefficient per variable.
    #[error("objective has {actual} coefficients, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("the problem is infeasible")]
    Infeasible,
    #[error("the problem is unbounded")]
    Unbounded,
    /// Any other failure, with the solver's own message.
    #[error("{0}")]
    SolveFailed(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A pluggable linear or integer programming solver.
pub trait SolverBackend: Send {
    /// A short, stable name such as `"microlp"`.
    fn name(&self) -> &'static str;

    /// Declares `num_variables` variables with the given types. Discards any
    /// previously formulated program.
    fn initialize(
        &mut self,
        num_variables: usize,
        variable_types: VariableTypes,
    ) -> Result<(), BackendError>;

    /// Sets the objective. It must have one coefficient per variable.
    fn set_objective(&mut self, objective: LinearObjective) -> Result<(), BackendError>;

    /// Replaces all constraints.
    fn set_constraints(&mut self, constraints: LinearConstraints) -> Result<(), BackendError>;

    /// Adds a single constraint to the ones already set.
    fn add_constraint(&mut self, constraint: LinearConstraint) -> Result<(), BackendError>;

    /// Solves the formulated program. Blocks until the backend finishes.
    fn solve(&mut self, parameters: &BackendParameters) -> Result<Solution, BackendError>;

    /// Writes the formulated program to `path` in a backend-defined text format.
    fn dump_problem(&self, path: &Path) -> Result<(), BackendError> {
        let _ = path;
        Err(BackendError::NotSupported {
            backend: self.name(),
            operation: "dump_problem",
        })
    }
}

impl std::fmt::Debug for dyn SolverBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolverBackend({})", self.name())
    }
}
