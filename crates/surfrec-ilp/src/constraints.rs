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

//! # Surface Constraints
//!
//! Four families of rows over the threshold variables `x(n, l)`, with `L`
//! levels per column:
//!
//! 1. **Base level.** Every column has a level: `x(n, 0) = 1`. The looser
//!    form `sum_l x(n, l) >= 1` is available through
//!    `BaseLevelConstraint::AtLeastOne`; together with monotonicity it is
//!    equivalent.
//! 2. **Monotonicity.** `x(n, l) - x(n, l - 1) <= 0` for `l` in `1..L`, so
//!    the thresholds of a column read `1, ..., 1, 0, ..., 0`.
//! 3. **Gradient.** For an edge `(u, v)` with bound `g`, in both directions:
//!    `x(u, l) - x(v, l - g) <= 0` for `l` in `g..L`. If `u` is at level `l`
//!    or above, `v` is at `l - g` or above.
//! 4. **Zero minimum** (optional). With `N` the neighbor count of an
//!    interior column, for `l` in `1..L - 1`:
//!    `sum_{nb} x(nb, l) - x(n, l + 1) <= N - 1`. A column at or below level
//!    `l` may have at most `N - 1` neighbors at or above `l`. Hence no column
//!    strictly between level zero and the top level is a local minimum,
//!    while plateaus at the top level are left alone. Columns with fewer
//!    than `N` distinct neighbors (borders) are never constrained by it.

use crate::{layout::ThresholdLayout, stats::FormulationStatisticsBuilder};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use surfrec_lp::constraint::{LinearConstraint, LinearConstraints, Relation};
use surfrec_model::{graph::GraphModel, index::ColumnIndex};
use tracing::{debug, trace};

/// The form of the base-level rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseLevelConstraint {
    /// `x(n, 0) = 1`.
    #[default]
    Equality,
    /// `sum_l x(n, l) >= 1`.
    AtLeastOne,
}

/// Which optional rows to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintOptions {
    pub base_level: BaseLevelConstraint,
    /// Neighbor count for the zero-minimum rows; `None` disables them.
    pub zero_minimum_neighbors: Option<usize>,
}

/// Generates the constraint rows of a `GraphModel`.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintBuilder<'a> {
    model: &'a GraphModel,
    layout: ThresholdLayout,
    options: ConstraintOptions,
}

impl<'a> ConstraintBuilder<'a> {
    #[inline]
    pub fn new(model: &'a GraphModel, layout: ThresholdLayout, options: ConstraintOptions) -> Self {
        debug_assert_eq!(
            model.num_levels(),
            layout.num_levels(),
            "called `ConstraintBuilder::new` with a layout that does not match the model"
        );

        Self {
            model,
            layout,
            options,
        }
    }

    /// Generates every enabled family and reports the row counts.
    pub fn build(&self) -> (LinearConstraints, FormulationStatisticsBuilder) {
        let mut rows = LinearConstraints::with_capacity(self.estimated_rows());

        let base_level = self.base_level(&mut rows);
        let monotonicity = self.monotonicity(&mut rows);
        let gradient = self.gradient(&mut rows);
        let zero_minimum = match self.options.zero_minimum_neighbors {
            Some(num_neighbors) => self.zero_minimum(num_neighbors, &mut rows),
            None => 0,
        };

        debug!(
            base_level,
            monotonicity,
            gradient,
            zero_minimum,
            total = rows.len(),
            "constraints: generated"
        );

        let stats = FormulationStatisticsBuilder::new()
            .num_variables(self.layout.num_variables(self.model.num_columns()))
            .base_level_constraints(base_level)
            .monotonicity_constraints(monotonicity)
            .gradient_constraints(gradient)
            .zero_minimum_constraints(zero_minimum);

        (rows, stats)
    }

    fn estimated_rows(&self) -> usize {
        let n = self.model.num_columns();
        let l = self.layout.num_levels();
        let per_column = if self.options.zero_minimum_neighbors.is_some() {
            2 * l
        } else {
            l
        };
        n * per_column + 2 * self.model.num_edges() * l
    }

    /// Family 1: every column has a level. Returns the number of rows added.
    pub fn base_level(&self, out: &mut LinearConstraints) -> usize {
        for column in self.model.columns() {
            let row = match self.options.base_level {
                BaseLevelConstraint::Equality => LinearConstraint::from_terms(
                    [(self.layout.variable(column, 0), 1.0)],
                    Relation::Equal,
                    1.0,
                ),
                BaseLevelConstraint::AtLeastOne => LinearConstraint::from_terms(
                    self.layout.column_variables(column).map(|v| (v, 1.0)),
                    Relation::GreaterEqual,
                    1.0,
                ),
            };
            out.add(row);
        }

        self.model.num_columns()
    }

    /// Family 2: threshold `l` implies threshold `l - 1`.
    pub fn monotonicity(&self, out: &mut LinearConstraints) -> usize {
        let mut added = 0;
        for column in self.model.columns() {
            for level in 1..self.layout.num_levels() {
                out.add(LinearConstraint::from_terms(
                    [
                        (self.layout.variable(column, level), 1.0),
                        (self.layout.variable(column, level - 1), -1.0),
                    ],
                    Relation::LessEqual,
                    0.0,
                ));
                added += 1;
            }
        }
        added
    }

    /// Family 3: `|level(u) - level(v)| <= g` on every edge. Self-loops add
    /// no rows.
    pub fn gradient(&self, out: &mut LinearConstraints) -> usize {
        let num_levels = self.layout.num_levels();
        let mut added = 0;

        for (edge, u, v) in self.model.edges() {
            if u == v {
                continue;
            }

            let g = self.model.effective_gradient(edge);
            for (source, target) in [(u, v), (v, u)] {
                for level in g..num_levels {
                    out.add(LinearConstraint::from_terms(
                        [
                            (self.layout.variable(source, level), 1.0),
                            (self.layout.variable(target, level - g), -1.0),
                        ],
                        Relation::LessEqual,
                        0.0,
                    ));
                    added += 1;
                }
            }
            trace!(%edge, %u, %v, g, "constraints: gradient edge");
        }

        added
    }

    /// Family 4: a column at or below `l` sees fewer than `N` neighbors at or
    /// above `l`. Sums run over distinct neighbors, the column itself and
    /// duplicate edges excluded.
    pub fn zero_minimum(&self, num_neighbors: usize, out: &mut LinearConstraints) -> usize {
        let num_levels = self.layout.num_levels();
        if num_levels < 3 {
            return 0;
        }

        let rhs = num_neighbors as f64 - 1.0;
        let mut seen: FxHashSet<ColumnIndex> = FxHashSet::default();
        let mut distinct: Vec<ColumnIndex> = Vec::new();
        let mut added = 0;

        for column in self.model.columns() {
            seen.clear();
            distinct.clear();
            distinct.extend(
                self.model
                    .neighbors(column)
                    .iter()
                    .copied()
                    .filter(|&nb| nb != column && seen.insert(nb)),
            );

            for level in 1..num_levels - 1 {
                let mut row = LinearConstraint::from_terms(
                    distinct
                        .iter()
                        .map(|&nb| (self.layout.variable(nb, level), 1.0)),
                    Relation::LessEqual,
                    rhs,
                );
                row.set_coefficient(self.layout.variable(column, level + 1), -1.0);
                out.add(row);
                added += 1;
            }
        }

        added
    }
}
