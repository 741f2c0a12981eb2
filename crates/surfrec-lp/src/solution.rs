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

use crate::index::VariableIndex;
use surfrec_core::tolerance;

/// The values a backend assigned to the variables, and the objective value
/// they achieve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: Vec<f64>,
    objective_value: f64,
}

impl Solution {
    #[inline]
    pub fn new(values: Vec<f64>, objective_value: f64) -> Self {
        Self {
            values,
            objective_value,
        }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Returns the value of `variable`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, variable: VariableIndex) -> Option<f64> {
        self.values.get(variable.get()).copied()
    }

    /// Returns `true` if `variable` counts as one under the binary threshold.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of bounds.
    #[inline]
    pub fn is_active(&self, variable: VariableIndex) -> bool {
        tolerance::is_active(self[variable])
    }

    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl std::ops::Index<VariableIndex> for Solution {
    type Output = f64;

    #[inline]
    fn index(&self, variable: VariableIndex) -> &Self::Output {
        debug_assert!(
            variable.get() < self.values.len(),
            "called `Solution::index` with variable index out of bounds: the len is {} but the index is {}",
            self.values.len(),
            variable.get()
        );

        &self.values[variable.get()]
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution(objective: {}, variables: {}, active: {})",
            self.objective_value,
            self.values.len(),
            self.values.iter().filter(|&&x| tolerance::is_active(x)).count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_interpretation() {
        let s = Solution::new(vec![1.0, 0.999_999, 0.5, 0.499, 0.0], 3.0);
        let active: Vec<bool> = (0..5).map(|i| s.is_active(VariableIndex::new(i))).collect();
        assert_eq!(active, vec![true, true, true, false, false]);
        assert_eq!(s[VariableIndex::new(1)], 0.999_999);
        assert_eq!(s.get(VariableIndex::new(5)), None);
    }

    #[test]
    fn test_display() {
        let s = Solution::new(vec![1.0, 0.0, 1.0], -2.5);
        assert_eq!(format!("{}", s), "Solution(objective: -2.5, variables: 3, active: 2)");
    }
}
