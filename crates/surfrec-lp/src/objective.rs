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
use serde::{Deserialize, Serialize};

/// Whether the objective is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

impl std::fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveSense::Minimize => write!(f, "Minimize"),
            ObjectiveSense::Maximize => write!(f, "Maximize"),
        }
    }
}

/// A linear objective with one dense coefficient per variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearObjective {
    coefficients: Vec<f64>,
    sense: ObjectiveSense,
}

impl LinearObjective {
    /// Creates an objective over `num_variables` variables with all
    /// coefficients zero.
    #[inline]
    pub fn new(num_variables: usize, sense: ObjectiveSense) -> Self {
        Self {
            coefficients: vec![0.0; num_variables],
            sense,
        }
    }

    /// Creates an objective from a dense coefficient vector.
    #[inline]
    pub fn from_coefficients(coefficients: Vec<f64>, sense: ObjectiveSense) -> Self {
        Self {
            coefficients,
            sense,
        }
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    #[inline]
    pub fn set_sense(&mut self, sense: ObjectiveSense) {
        self.sense = sense;
    }

    /// Sets the coefficient of `variable`.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of bounds.
    #[inline]
    pub fn set_coefficient(&mut self, variable: VariableIndex, value: f64) {
        debug_assert!(
            variable.get() < self.coefficients.len(),
            "called `LinearObjective::set_coefficient` with variable index out of bounds: the len is {} but the index is {}",
            self.coefficients.len(),
            variable.get()
        );

        self.coefficients[variable.get()] = value;
    }

    /// Returns the coefficient of `variable`.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of bounds.
    #[inline]
    pub fn coefficient(&self, variable: VariableIndex) -> f64 {
        self.coefficients[variable.get()]
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Iterates over the variables with a non-zero coefficient.
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = (VariableIndex, f64)> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0.0)
            .map(|(i, &c)| (VariableIndex::new(i), c))
    }

    /// Evaluates the objective at `values`. Missing trailing values count as zero.
    #[inline]
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }
}

impl std::fmt::Display for LinearObjective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sense)?;
        let mut any = false;
        for (v, c) in self.terms() {
            write!(f, " {:+} x{}", c, v.get())?;
            any = true;
        }
        if !any {
            write!(f, " 0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_evaluate() {
        let mut obj = LinearObjective::new(3, ObjectiveSense::Minimize);
        obj.set_coefficient(VariableIndex::new(0), 5.0);
        obj.set_coefficient(VariableIndex::new(1), -4.0);
        obj.set_coefficient(VariableIndex::new(2), 2.0);

        assert_eq!(obj.coefficient(VariableIndex::new(1)), -4.0);
        assert_eq!(obj.evaluate(&[1.0, 1.0, 0.0]), 1.0);
        assert_eq!(obj.evaluate(&[1.0]), 5.0);
    }

    #[test]
    fn test_terms_skip_zeros() {
        let obj = LinearObjective::from_coefficients(vec![0.0, 2.0, 0.0, -1.0], ObjectiveSense::Maximize);
        let terms: Vec<_> = obj.terms().map(|(v, c)| (v.get(), c)).collect();
        assert_eq!(terms, vec![(1, 2.0), (3, -1.0)]);
        assert_eq!(format!("{}", obj), "Maximize +2 x1 -1 x3");
    }
}
