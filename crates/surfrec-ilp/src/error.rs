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

use surfrec_lp::backend::BackendError;
use surfrec_model::{error::ModelError, index::ColumnIndex};
use thiserror::Error;

/// Invalid use of the solver by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The zero-minimum constraint needs the number of neighbors per column.
    #[error("enforce_zero_minimum is set but num_neighbors is not")]
    MissingNeighborCount,
    /// Levels were requested before any successful solve.
    #[error("no solution is available: min_surface has not succeeded yet")]
    NotSolved,
    /// The column was added after the solution was computed.
    #[error("column {column} was added after the last successful solve")]
    ColumnNotSolved { column: ColumnIndex },
}

/// Errors raised by `IlpSolver`.
#[derive(Debug, Error)]
pub enum SurfrecError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// The backend failed to solve the program; its message is kept verbatim.
    #[error("linear program could not be solved: {0}")]
    Backend(#[source] BackendError),
    /// The backend could not write the program to a file.
    #[error("linear program could not be written: {0}")]
    Dump(#[source] BackendError),
    /// A successful solve returned a column with its lowest threshold
    /// inactive. The solution is inconsistent with the formulation.
    #[error("no level was selected for column {column}")]
    InvariantViolation { column: ColumnIndex },
}

impl From<ModelError> for SurfrecError {
    #[inline]
    fn from(err: ModelError) -> Self {
        SurfrecError::Usage(UsageError::Model(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_forwarded() {
        let err = SurfrecError::Backend(BackendError::SolveFailed("time limit reached".into()));
        assert_eq!(
            err.to_string(),
            "linear program could not be solved: time limit reached"
        );
    }

    #[test]
    fn test_model_errors_are_usage_errors() {
        let err: SurfrecError = ModelError::ZeroColumns.into();
        assert!(matches!(err, SurfrecError::Usage(UsageError::Model(ModelError::ZeroColumns))));
        assert_eq!(
            err.to_string(),
            "at least one column has to be added with a call to add_columns"
        );
    }

    #[test]
    fn test_invariant_violation_message() {
        let err = SurfrecError::InvariantViolation {
            column: ColumnIndex::new(3),
        };
        assert_eq!(err.to_string(), "no level was selected for column ColumnIndex(3)");
    }
}
