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

use std::time::Duration;

/// Size and timing of one formulation and solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulationStatistics {
    /// Number of threshold variables.
    pub num_variables: usize,
    /// Rows fixing the lowest threshold of each column.
    pub base_level_constraints: usize,
    /// Rows ordering the thresholds of each column.
    pub monotonicity_constraints: usize,
    /// Rows bounding the level difference across neighbor edges.
    pub gradient_constraints: usize,
    /// Rows forcing local minima down to level zero.
    pub zero_minimum_constraints: usize,
    /// Time spent building the objective and constraints.
    pub formulation_duration: Duration,
    /// Time spent inside the backend.
    pub solve_duration: Duration,
}

impl FormulationStatistics {
    /// Total number of constraint rows.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.base_level_constraints
            + self.monotonicity_constraints
            + self.gradient_constraints
            + self.zero_minimum_constraints
    }
}

impl std::fmt::Display for FormulationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Formulation Statistics:")?;
        writeln!(f, "  Variables:              {}", self.num_variables)?;
        writeln!(f, "  Constraints:            {}", self.num_constraints())?;
        writeln!(f, "    Base level:           {}", self.base_level_constraints)?;
        writeln!(f, "    Monotonicity:         {}", self.monotonicity_constraints)?;
        writeln!(f, "    Gradient:             {}", self.gradient_constraints)?;
        writeln!(f, "    Zero minimum:         {}", self.zero_minimum_constraints)?;
        writeln!(
            f,
            "  Formulation (secs):     {:.3}",
            self.formulation_duration.as_secs_f64()
        )?;
        writeln!(
            f,
            "  Solve (secs):           {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `FormulationStatistics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormulationStatisticsBuilder {
    num_variables: usize,
    base_level_constraints: usize,
    monotonicity_constraints: usize,
    gradient_constraints: usize,
    zero_minimum_constraints: usize,
    formulation_duration: Duration,
    solve_duration: Duration,
}

impl FormulationStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_variables(mut self, num_variables: usize) -> Self {
        self.num_variables = num_variables;
        self
    }

    #[inline]
    pub fn base_level_constraints(mut self, count: usize) -> Self {
        self.base_level_constraints = count;
        self
    }

    #[inline]
    pub fn monotonicity_constraints(mut self, count: usize) -> Self {
        self.monotonicity_constraints = count;
        self
    }

    #[inline]
    pub fn gradient_constraints(mut self, count: usize) -> Self {
        self.gradient_constraints = count;
        self
    }

    #[inline]
    pub fn zero_minimum_constraints(mut self, count: usize) -> Self {
        self.zero_minimum_constraints = count;
        self
    }

    #[inline]
    pub fn formulation_duration(mut self, duration: Duration) -> Self {
        self.formulation_duration = duration;
        self
    }

    #[inline]
    pub fn solve_duration(mut self, duration: Duration) -> Self {
        self.solve_duration = duration;
        self
    }

    #[inline]
    pub fn build(self) -> FormulationStatistics {
        FormulationStatistics {
            num_variables: self.num_variables,
            base_level_constraints: self.base_level_constraints,
            monotonicity_constraints: self.monotonicity_constraints,
            gradient_constraints: self.gradient_constraints,
            zero_minimum_constraints: self.zero_minimum_constraints,
            formulation_duration: self.formulation_duration,
            solve_duration: self.solve_duration,
        }
    }
}

impl From<FormulationStatistics> for FormulationStatisticsBuilder {
    fn from(stats: FormulationStatistics) -> Self {
        Self {
            num_variables: stats.num_variables,
            base_level_constraints: stats.base_level_constraints,
            monotonicity_constraints: stats.monotonicity_constraints,
            gradient_constraints: stats.gradient_constraints,
            zero_minimum_constraints: stats.zero_minimum_constraints,
            formulation_duration: stats.formulation_duration,
            solve_duration: stats.solve_duration,
        }
    }
}
