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

//! Adapter onto the `good_lp` modelling layer with its pure-Rust `microlp`
//! solver.
//!
//! The program is kept as a `LinearProblem` until `solve`, which translates
//! it into a fresh `good_lp` model. `microlp` exposes no gap, focus or thread
//! settings, so those parameters are only logged. The retained problem is
//! what `dump_problem` writes, in the format of `lp_format`.

use crate::{
    backend::{BackendError, SolverBackend},
    constraint::{LinearConstraint, LinearConstraints, Relation},
    index::VariableIndex,
    lp_format,
    objective::{LinearObjective, ObjectiveSense},
    params::BackendParameters,
    problem::LinearProblem,
    registry::BackendFactory,
    solution::Solution,
    variable::{VariableType, VariableTypes},
};
use good_lp::{
    constraint, solvers::microlp::microlp, variable, Expression, ProblemVariables,
    ResolutionError, Solution as _, SolverModel, Variable,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::Arc,
};
use surfrec_core::tolerance::{self, DEFAULT_TOLERANCE};
use tracing::{debug, trace, warn};

/// Backend that solves programs with `good_lp` and `microlp`.
#[derive(Debug, Clone, Default)]
pub struct MicrolpBackend {
    problem: Option<LinearProblem>,
}

impl MicrolpBackend {
    pub const NAME: &'static str = "microlp";

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory producing fresh instances of this backend.
    pub fn factory() -> BackendFactory {
        Arc::new(|| Box::new(MicrolpBackend::new()) as Box<dyn SolverBackend>)
    }

    #[inline]
    fn problem_mut(&mut self) -> Result<&mut LinearProblem, BackendError> {
        self.problem.as_mut().ok_or(BackendError::Uninitialized)
    }
}

fn expression<I>(terms: I, vars: &[Variable]) -> Expression
where
    I: Iterator<Item = (VariableIndex, f64)>,
{
    let mut expr = Expression::with_capacity(terms.size_hint().0);
    for (v, c) in terms {
        expr.add_mul(c, vars[v.get()]);
    }
    expr
}

/// Rounds integer-typed values, warning when the solver left one fractional.
fn integral_value(variable: usize, value: f64) -> f64 {
    const INTEGRALITY_TOLERANCE: f64 = 1e-6;
    if !tolerance::is_integral(value, INTEGRALITY_TOLERANCE) {
        warn!(variable, value, "microlp: integer variable has a fractional value");
    }
    let rounded = value.round();
    if tolerance::approx_eq(rounded, 0.0, DEFAULT_TOLERANCE) {
        0.0
    } else {
        rounded
    }
}

fn map_error(err: ResolutionError) -> BackendError {
    match err {
        ResolutionError::Infeasible => BackendError::Infeasible,
        ResolutionError::Unbounded => BackendError::Unbounded,
        other => BackendError::SolveFailed(other.to_string()),
    }
}

impl SolverBackend for MicrolpBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(
        &mut self,
        num_variables: usize,
        variable_types: VariableTypes,
    ) -> Result<(), BackendError> {
        self.problem = Some(LinearProblem::new(num_variables, variable_types)?);
        Ok(())
    }

    fn set_objective(&mut self, objective: LinearObjective) -> Result<(), BackendError> {
        self.problem_mut()?.set_objective(objective)
    }

    fn set_constraints(&mut self, constraints: LinearConstraints) -> Result<(), BackendError> {
        self.problem_mut()?.set_constraints(constraints)
    }

    fn add_constraint(&mut self, constraint: LinearConstraint) -> Result<(), BackendError> {
        self.problem_mut()?.add_constraint(constraint)
    }

    fn solve(&mut self, parameters: &BackendParameters) -> Result<Solution, BackendError> {
        let problem = self.problem.as_ref().ok_or(BackendError::Uninitialized)?;
        debug!(
            variables = problem.num_variables(),
            constraints = problem.constraints().len(),
            %parameters,
            "microlp: gap, focus and thread settings are not supported and are ignored"
        );

        let types = problem.variable_types();
        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = (0..problem.num_variables())
            .map(|i| {
                let definition = match types.get(VariableIndex::new(i)) {
                    VariableType::Binary => variable().binary(),
                    VariableType::Integer => variable().integer().min(0.0),
                    VariableType::Continuous => variable().min(0.0),
                };
                vars.add(definition)
            })
            .collect();

        let objective = expression(problem.objective().terms(), &xs);
        let unsolved = match problem.objective().sense() {
            ObjectiveSense::Minimize => vars.minimise(objective),
            ObjectiveSense::Maximize => vars.maximise(objective),
        };

        let mut model = unsolved.using(microlp);
        for c in problem.constraints() {
            let lhs = expression(c.terms(), &xs);
            let row = match c.relation() {
                Relation::LessEqual => constraint::leq(lhs, c.value()),
                Relation::Equal => constraint::eq(lhs, c.value()),
                Relation::GreaterEqual => constraint::geq(lhs, c.value()),
            };
            model.add_constraint(row);
        }

        let solved = model.solve().map_err(map_error)?;

        let values: Vec<f64> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let value = solved.value(x);
                match types.get(VariableIndex::new(i)) {
                    VariableType::Continuous => value,
                    VariableType::Binary | VariableType::Integer => integral_value(i, value),
                }
            })
            .collect();
        let objective_value = problem.objective().evaluate(&values);
        trace!(?values, objective_value, "microlp: solution");

        Ok(Solution::new(values, objective_value))
    }

    fn dump_problem(&self, path: &Path) -> Result<(), BackendError> {
        let problem = self.problem.as_ref().ok_or(BackendError::Uninitialized)?;

        let mut out = BufWriter::new(File::create(path)?);
        lp_format::write_lp(problem, &mut out)?;
        out.flush()?;

        debug!(path = %path.display(), "microlp: wrote problem");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    #[test]
    fn test_solves_single_column() {
        let mut backend = MicrolpBackend::new();
        backend.initialize(3, VariableType::Binary.into()).unwrap();
        backend
            .set_objective(LinearObjective::from_coefficients(
                vec![5.0, -4.0, 2.0],
                ObjectiveSense::Minimize,
            ))
            .unwrap();
        backend
            .add_constraint(LinearConstraint::from_terms([(v(0), 1.0)], Relation::Equal, 1.0))
            .unwrap();
        for l in 1..3 {
            backend
                .add_constraint(LinearConstraint::from_terms(
                    [(v(l), 1.0), (v(l - 1), -1.0)],
                    Relation::LessEqual,
                    0.0,
                ))
                .unwrap();
        }

        let solution = backend.solve(&BackendParameters::default()).unwrap();
        assert_eq!(solution.values(), &[1.0, 1.0, 0.0]);
        assert_eq!(solution.objective_value(), 1.0);
    }

    #[test]
    fn test_infeasible_is_reported() {
        let mut backend = MicrolpBackend::new();
        backend.initialize(1, VariableType::Binary.into()).unwrap();
        backend
            .add_constraint(LinearConstraint::from_terms([(v(0), 1.0)], Relation::GreaterEqual, 2.0))
            .unwrap();
        assert!(matches!(
            backend.solve(&BackendParameters::default()),
            Err(BackendError::Infeasible)
        ));
    }

    #[test]
    fn test_dump_problem_writes_lp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problem.lp");

        let backend = MicrolpBackend::new();
        assert!(matches!(
            backend.dump_problem(&path),
            Err(BackendError::Uninitialized)
        ));

        let mut backend = MicrolpBackend::new();
        backend.initialize(2, VariableType::Binary.into()).unwrap();
        backend
            .set_objective(LinearObjective::from_coefficients(
                vec![1.0, -1.0],
                ObjectiveSense::Minimize,
            ))
            .unwrap();
        backend
            .add_constraint(LinearConstraint::from_terms(
                [(v(1), 1.0), (v(0), -1.0)],
                Relation::LessEqual,
                0.0,
            ))
            .unwrap();
        backend.dump_problem(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Minimize\n obj: + 1 x0 - 1 x1\nSubject To\n"));
        assert!(text.contains(" c0: - 1 x0 + 1 x1 <= 0\n"));
        assert!(text.ends_with("End\n"));
    }

    #[test]
    fn test_dump_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = MicrolpBackend::new();
        backend.initialize(1, VariableType::Binary.into()).unwrap();
        assert!(matches!(
            backend.dump_problem(&dir.path().join("missing").join("p.lp")),
            Err(BackendError::Io(_))
        ));
    }

    #[test]
    fn test_integral_value_rounds() {
        assert_eq!(integral_value(0, 0.999_999_9), 1.0);
        assert_eq!(integral_value(0, -1e-12), 0.0);
        assert_eq!(integral_value(0, 3.0), 3.0);
    }
}
