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

//! # ILP Solver Facade
//!
//! `IlpSolver` owns a `GraphModel` under construction and the backend
//! factory chosen by the caller. Building is incremental (`add_columns`,
//! `add_edge`, `set_level_costs`); `min_surface` then formulates the whole
//! program, hands it to a backend freshly obtained from the factory, and
//! keeps the returned solution for decoding.
//!
//! ## State
//!
//! - Before the first successful solve, decoding fails with
//!   `UsageError::NotSolved`.
//! - A successful solve replaces the stored solution.
//! - A failed solve leaves the previous solution (if any) in place.
//! - Columns added after a solve cannot be decoded until the next one.
//!
//! An `IlpSolver` is not shared between threads while solving; distinct
//! solvers are independent.

use crate::{
    constraints::{ConstraintBuilder, ConstraintOptions},
    decoder::{LevelAssignment, SolutionDecoder},
    error::{SurfrecError, UsageError},
    layout::ThresholdLayout,
    objective::ObjectiveBuilder,
    params::SolveParameters,
    stats::{FormulationStatistics, FormulationStatisticsBuilder},
};
use std::{path::Path, time::Instant};
use surfrec_lp::{
    backend::SolverBackend, registry::BackendFactory, solution::Solution, variable::VariableType,
};
use surfrec_model::{
    error::ModelError,
    graph::GraphModel,
    index::{ColumnIndex, EdgeIndex},
};
use tracing::{debug, debug_span, info, trace, warn};

/// Chooses one level per column minimizing total cost under gradient and
/// optional zero-minimum constraints.
pub struct IlpSolver {
    model: GraphModel,
    layout: ThresholdLayout,
    factory: BackendFactory,
    solution: Option<Solution>,
    statistics: Option<FormulationStatistics>,
}

impl IlpSolver {
    /// Creates a solver for columns with `num_levels` levels and a default
    /// gradient bound of `max_gradient`. The column and edge counts are
    /// capacity hints only.
    ///
    /// # Errors
    ///
    /// Returns a usage error if `num_levels` is zero.
    pub fn new(
        num_columns_hint: usize,
        num_edges_hint: usize,
        num_levels: usize,
        max_gradient: usize,
        factory: BackendFactory,
    ) -> Result<Self, SurfrecError> {
        let model =
            GraphModel::with_capacity(num_columns_hint, num_edges_hint, num_levels, max_gradient)?;
        Ok(Self::from_model(model, factory))
    }

    /// Creates a solver over an already built model.
    pub fn from_model(model: GraphModel, factory: BackendFactory) -> Self {
        let layout = ThresholdLayout::new(model.num_levels());
        Self {
            model,
            layout,
            factory,
            solution: None,
            statistics: None,
        }
    }

    /// Adds `count` columns and returns the first one.
    #[inline]
    pub fn add_columns(&mut self, count: usize) -> Result<ColumnIndex, SurfrecError> {
        Ok(self.model.add_columns(count)?)
    }

    /// Adds a neighbor edge using the default gradient bound.
    #[inline]
    pub fn add_edge(&mut self, u: ColumnIndex, v: ColumnIndex) -> Result<EdgeIndex, SurfrecError> {
        Ok(self.model.add_edge(u, v)?)
    }

    /// Adds a neighbor edge with its own gradient bound.
    #[inline]
    pub fn add_edge_with_gradient(
        &mut self,
        u: ColumnIndex,
        v: ColumnIndex,
        max_gradient: usize,
    ) -> Result<EdgeIndex, SurfrecError> {
        Ok(self.model.add_edge_with_gradient(u, v, max_gradient)?)
    }

    /// Sets the per-level costs of `column`.
    #[inline]
    pub fn set_level_costs<C>(&mut self, column: ColumnIndex, costs: C) -> Result<(), SurfrecError>
    where
        C: AsRef<[f64]>,
    {
        Ok(self.model.set_level_costs(column, costs)?)
    }

    #[inline]
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    #[inline]
    pub fn layout(&self) -> ThresholdLayout {
        self.layout
    }

    /// Returns `true` once a solve has succeeded.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The raw threshold solution of the last successful solve.
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Statistics of the last successful solve.
    #[inline]
    pub fn statistics(&self) -> Option<&FormulationStatistics> {
        self.statistics.as_ref()
    }

    /// Formulates and solves the program and returns the optimal objective
    /// value. Every call uses a new backend instance from the factory.
    ///
    /// # Errors
    ///
    /// - `UsageError::MissingNeighborCount` if the zero-minimum constraint is
    ///   enabled without a neighbor count.
    /// - `ModelError::MissingCosts` (as a usage error) if a column has no costs.
    /// - `SurfrecError::Backend` if the backend fails, with its message.
    pub fn min_surface(&mut self, parameters: &SolveParameters) -> Result<f64, SurfrecError> {
        let span = debug_span!(
            "min_surface",
            columns = self.model.num_columns(),
            edges = self.model.num_edges(),
            levels = self.model.num_levels()
        );
        let _guard = span.enter();

        let mut backend = (self.factory)();
        debug!(backend = backend.name(), "formulating");
        let stats = self.formulate(backend.as_mut(), parameters)?;

        debug!("solving");
        let start = Instant::now();
        let solution = backend
            .solve(&parameters.backend_parameters())
            .map_err(SurfrecError::Backend)?;
        let stats = stats.solve_duration(start.elapsed()).build();

        if parameters.verbose {
            info!("{}", stats);
        } else {
            debug!("{}", stats);
        }
        trace!(values = ?solution.values(), "threshold solution");

        let objective_value = solution.objective_value();
        self.solution = Some(solution);
        self.statistics = Some(stats);
        Ok(objective_value)
    }

    /// Formulates the program and asks a new backend instance to write it to
    /// `path`.
    ///
    /// # Errors
    ///
    /// The usage errors of `min_surface`, or `SurfrecError::Dump` if the
    /// backend cannot write problems or the write fails.
    pub fn dump_ilp<P>(&self, path: P, parameters: &SolveParameters) -> Result<(), SurfrecError>
    where
        P: AsRef<Path>,
    {
        let mut backend = (self.factory)();
        self.formulate(backend.as_mut(), parameters)?;
        backend
            .dump_problem(path.as_ref())
            .map_err(SurfrecError::Dump)
    }

    /// Returns the level of `column` in the last successful solve.
    ///
    /// # Errors
    ///
    /// - `ModelError::UnknownColumn` if the column does not exist.
    /// - `UsageError::NotSolved` before the first successful solve.
    /// - `UsageError::ColumnNotSolved` for columns added since that solve.
    /// - `SurfrecError::InvariantViolation` if the solution has the lowest
    ///   threshold of the column inactive.
    pub fn level(&self, column: ColumnIndex) -> Result<usize, SurfrecError> {
        if !self.model.contains_column(column) {
            return Err(ModelError::UnknownColumn {
                column,
                num_columns: self.model.num_columns(),
            }
            .into());
        }

        self.decoder()?.level(column)
    }

    /// Returns the levels of all columns covered by the last successful solve.
    pub fn levels(&self) -> Result<LevelAssignment, SurfrecError> {
        self.decoder()?.levels()
    }

    #[inline]
    fn decoder(&self) -> Result<SolutionDecoder<'_>, SurfrecError> {
        let solution = self.solution.as_ref().ok_or(UsageError::NotSolved)?;
        Ok(SolutionDecoder::new(solution, self.layout))
    }

    /// Builds the objective and constraints and loads them into `backend`.
    fn formulate(
        &self,
        backend: &mut dyn SolverBackend,
        parameters: &SolveParameters,
    ) -> Result<FormulationStatisticsBuilder, SurfrecError> {
        let zero_minimum_neighbors = parameters.zero_minimum_neighbors()?;
        if parameters.solve_relaxed_problem {
            warn!("solve_relaxed_problem is not supported and has no effect");
        }
        self.model.validate()?;

        let start = Instant::now();
        let objective = ObjectiveBuilder::new(&self.model, self.layout).build()?;
        debug!(variables = objective.num_variables(), "objective built");
        trace!(%objective, "objective");

        let options = ConstraintOptions {
            base_level: parameters.base_level_constraint,
            zero_minimum_neighbors,
        };
        let (constraints, stats) =
            ConstraintBuilder::new(&self.model, self.layout, options).build();
        let stats = stats.formulation_duration(start.elapsed());

        let num_variables = objective.num_variables();
        backend
            .initialize(num_variables, VariableType::Binary.into())
            .map_err(SurfrecError::Backend)?;
        backend
            .set_objective(objective)
            .map_err(SurfrecError::Backend)?;
        backend
            .set_constraints(constraints)
            .map_err(SurfrecError::Backend)?;

        Ok(stats)
    }
}

impl std::fmt::Debug for IlpSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IlpSolver")
            .field("model", &self.model)
            .field("solved", &self.is_solved())
            .finish()
    }
}

impl std::fmt::Display for IlpSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IlpSolver({}, solved: {})", self.model, self.is_solved())
    }
}
