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

//! Telescoped level costs.
//!
//! With threshold variables, a column at level `L*` has thresholds
//! `0..=L*` active. Giving threshold `l` the coefficient
//! `cost[l] - cost[l - 1]` (and threshold 0 the coefficient `cost[0]`)
//! makes the active coefficients sum to exactly `cost[L*]`:
//!
//! ```text
//! cost[0] + (cost[1] - cost[0]) + ... + (cost[L*] - cost[L* - 1]) = cost[L*]
//! ```
//!
//! The identity holds for arbitrary, non-monotone cost vectors.

use crate::{error::UsageError, layout::ThresholdLayout};
use surfrec_lp::objective::{LinearObjective, ObjectiveSense};
use surfrec_model::{error::ModelError, graph::GraphModel, index::ColumnIndex};
use tracing::trace;

/// Builds the minimization objective of a `GraphModel`.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveBuilder<'a> {
    model: &'a GraphModel,
    layout: ThresholdLayout,
}

impl<'a> ObjectiveBuilder<'a> {
    #[inline]
    pub fn new(model: &'a GraphModel, layout: ThresholdLayout) -> Self {
        debug_assert_eq!(
            model.num_levels(),
            layout.num_levels(),
            "called `ObjectiveBuilder::new` with a layout that does not match the model"
        );

        Self { model, layout }
    }

    /// Builds the objective over all threshold variables.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingCosts` for the first column without a cost vector.
    pub fn build(&self) -> Result<LinearObjective, UsageError> {
        let num_variables = self.layout.num_variables(self.model.num_columns());
        let mut objective = LinearObjective::new(num_variables, ObjectiveSense::Minimize);

        for column in self.model.columns() {
            let costs = self
                .model
                .level_costs(column)
                .ok_or(ModelError::MissingCosts { column })?;

            for (level, coefficient) in telescoped(costs).enumerate() {
                objective.set_coefficient(self.layout.variable(column, level), coefficient);
            }
            trace!(%column, ?costs, "objective: telescoped column costs");
        }

        Ok(objective)
    }

    /// Coefficients of the thresholds of a single column.
    pub fn column_coefficients(&self, column: ColumnIndex) -> Option<Vec<f64>> {
        self.model
            .level_costs(column)
            .map(|costs| telescoped(costs).collect())
    }
}

/// The running difference `costs[l] - costs[l - 1]`, with `costs[-1] = 0`.
pub fn telescoped(costs: &[f64]) -> impl Iterator<Item = f64> + '_ {
    costs.iter().scan(0.0, |previous, &cost| {
        let coefficient = cost - *previous;
        *previous = cost;
        Some(coefficient)
    })
}
