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

//! The threshold variable layout.
//!
//! Column `n` owns the `num_levels` consecutive variables starting at
//! `n * num_levels`; variable `n * num_levels + l` reads "the level of column
//! `n` is at least `l`". Objective construction, constraint construction and
//! decoding all go through `ThresholdLayout`, so the scheme is defined once.

use surfrec_lp::index::VariableIndex;
use surfrec_model::index::ColumnIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdLayout {
    num_levels: usize,
}

impl ThresholdLayout {
    /// Creates the layout for columns with `num_levels` levels.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `num_levels` is zero.
    #[inline]
    pub fn new(num_levels: usize) -> Self {
        debug_assert!(
            num_levels > 0,
            "called `ThresholdLayout::new` with zero levels"
        );

        Self { num_levels }
    }

    #[inline]
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    /// Total number of threshold variables for `num_columns` columns.
    #[inline]
    pub fn num_variables(&self, num_columns: usize) -> usize {
        num_columns * self.num_levels
    }

    /// The threshold variable of `column` at `level`.
    #[inline(always)]
    pub fn variable(&self, column: ColumnIndex, level: usize) -> VariableIndex {
        debug_assert!(
            level < self.num_levels,
            "called `ThresholdLayout::variable` with level out of bounds: the len is {} but the level is {}",
            self.num_levels,
            level
        );

        VariableIndex::new(column.get() * self.num_levels + level)
    }

    /// The variables of `column`, lowest level first.
    #[inline]
    pub fn column_variables(
        &self,
        column: ColumnIndex,
    ) -> impl DoubleEndedIterator<Item = VariableIndex> + ExactSizeIterator {
        VariableIndex::range(self.variable(column, 0), self.num_levels)
    }

    /// The column a variable belongs to.
    #[inline]
    pub fn column_of(&self, variable: VariableIndex) -> ColumnIndex {
        ColumnIndex::new(variable.get() / self.num_levels)
    }

    /// The level a variable stands for.
    #[inline]
    pub fn level_of(&self, variable: VariableIndex) -> usize {
        variable.get() % self.num_levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_numbering() {
        let layout = ThresholdLayout::new(4);
        assert_eq!(layout.variable(ColumnIndex::new(0), 0).get(), 0);
        assert_eq!(layout.variable(ColumnIndex::new(0), 3).get(), 3);
        assert_eq!(layout.variable(ColumnIndex::new(2), 1).get(), 9);
        assert_eq!(layout.num_variables(5), 20);
    }

    #[test]
    fn test_inverse_mapping() {
        let layout = ThresholdLayout::new(7);
        for n in 0..5 {
            for l in 0..7 {
                let v = layout.variable(ColumnIndex::new(n), l);
                assert_eq!(layout.column_of(v), ColumnIndex::new(n));
                assert_eq!(layout.level_of(v), l);
            }
        }
    }

    #[test]
    fn test_column_variables() {
        let layout = ThresholdLayout::new(3);
        let vars: Vec<usize> = layout
            .column_variables(ColumnIndex::new(2))
            .map(|v| v.get())
            .collect();
        assert_eq!(vars, vec![6, 7, 8]);
    }
}
