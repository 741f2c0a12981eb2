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

use crate::index::ColumnIndex;
use thiserror::Error;

/// Invalid input given while building a `GraphModel`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// `add_columns` was called with a count of zero.
    #[error("at least one column has to be added with a call to add_columns")]
    ZeroColumns,
    /// The model was created with zero levels per column.
    #[error("the number of levels per column must be at least one")]
    ZeroLevels,
    /// A column identifier does not refer to an existing column.
    #[error("unknown column {column}: the model has {num_columns} columns")]
    UnknownColumn {
        column: ColumnIndex,
        num_columns: usize,
    },
    /// A cost vector does not have one entry per level.
    #[error("cost vector for column {column} has {actual} entries, expected {expected}")]
    CostLengthMismatch {
        column: ColumnIndex,
        expected: usize,
        actual: usize,
    },
    /// A column has no cost vector at solve time.
    #[error("no level costs were set for column {column}")]
    MissingCosts { column: ColumnIndex },
}
