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

//! Reading levels back out of a threshold solution.

use crate::{
    error::{SurfrecError, UsageError},
    layout::ThresholdLayout,
};
use surfrec_lp::solution::Solution;
use surfrec_model::index::ColumnIndex;

/// Decodes the level of each column from a backend solution.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDecoder<'a> {
    solution: &'a Solution,
    layout: ThresholdLayout,
}

impl<'a> SolutionDecoder<'a> {
    #[inline]
    pub fn new(solution: &'a Solution, layout: ThresholdLayout) -> Self {
        Self { solution, layout }
    }

    /// Number of columns the solution covers.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.solution.num_variables() / self.layout.num_levels()
    }

    /// Returns the level of `column`: the level just below its first inactive
    /// threshold, or the top level if every threshold is active.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::ColumnNotSolved` if the solution does not cover
    /// `column`, and `SurfrecError::InvariantViolation` if its lowest
    /// threshold is inactive.
    pub fn level(&self, column: ColumnIndex) -> Result<usize, SurfrecError> {
        if column.get() >= self.num_columns() {
            return Err(UsageError::ColumnNotSolved { column }.into());
        }

        if !self.solution.is_active(self.layout.variable(column, 0)) {
            return Err(SurfrecError::InvariantViolation { column });
        }

        let num_levels = self.layout.num_levels();
        let level = (1..num_levels)
            .find(|&l| !self.solution.is_active(self.layout.variable(column, l)))
            .map_or(num_levels - 1, |l| l - 1);
        Ok(level)
    }

    /// Decodes every column the solution covers.
    pub fn levels(&self) -> Result<LevelAssignment, SurfrecError> {
        let levels = ColumnIndex::range(ColumnIndex::new(0), self.num_columns())
            .map(|column| self.level(column))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LevelAssignment::new(levels, self.solution.objective_value()))
    }
}

/// One level per column, with the objective value of the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelAssignment {
    levels: Vec<usize>,
    objective_value: f64,
}

impl LevelAssignment {
    #[inline]
    pub fn new(levels: Vec<usize>, objective_value: f64) -> Self {
        Self {
            levels,
            objective_value,
        }
    }

    /// Returns the level of `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn level(&self, column: ColumnIndex) -> usize {
        debug_assert!(
            column.get() < self.levels.len(),
            "called `LevelAssignment::level` with column index out of bounds: the len is {} but the index is {}",
            self.levels.len(),
            column.get()
        );

        self.levels[column.get()]
    }

    #[inline]
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    #[inline]
    pub fn into_levels(self) -> Vec<usize> {
        self.levels
    }
}

impl std::fmt::Display for LevelAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Level Assignment")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        if self.levels.is_empty() {
            writeln!(f, "   (No columns)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Column", "Level")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (i, level) in self.levels.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", i, level)?;
        }

        Ok(())
    }
}
