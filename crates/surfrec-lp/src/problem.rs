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

//! A formulated linear program, as stored by the built-in backends.

use crate::{
    backend::BackendError,
    constraint::{LinearConstraint, LinearConstraints},
    index::VariableIndex,
    objective::{LinearObjective, ObjectiveSense},
    variable::VariableTypes,
};

/// Variables, objective and constraints of one linear program.
///
/// Every mutation checks that the terms refer to declared variables, so a
/// backend reading a `LinearProblem` can index its vectors without bounds
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProblem {
    variable_types: VariableTypes,
    objective: LinearObjective,
    constraints: LinearConstraints,
}

impl LinearProblem {
    /// Declares `num_variables` variables with a zero objective and no constraints.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::VariableOutOfRange` if a type override refers
    /// to a variable beyond `num_variables`.
    pub fn new(num_variables: usize, variable_types: VariableTypes) -> Result<Self, BackendError> {
        if let Some(variable) = variable_types.max_override() {
            check_variable(variable, num_variables)?;
        }

        Ok(Self {
            variable_types,
            objective: LinearObjective::new(num_variables, ObjectiveSense::Minimize),
            constraints: LinearConstraints::new(),
        })
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    #[inline]
    pub fn variable_types(&self) -> &VariableTypes {
        &self.variable_types
    }

    #[inline]
    pub fn objective(&self) -> &LinearObjective {
        &self.objective
    }

    #[inline]
    pub fn constraints(&self) -> &LinearConstraints {
        &self.constraints
    }

    /// Replaces the objective.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::DimensionMismatch` if the objective does not
    /// have one coefficient per variable.
    pub fn set_objective(&mut self, objective: LinearObjective) -> Result<(), BackendError> {
        if objective.num_variables() != self.num_variables() {
            return Err(BackendError::DimensionMismatch {
                expected: self.num_variables(),
                actual: objective.num_variables(),
            });
        }

        self.objective = objective;
        Ok(())
    }

    /// Replaces all constraints. On error the previous constraints are kept.
    pub fn set_constraints(&mut self, constraints: LinearConstraints) -> Result<(), BackendError> {
        for constraint in &constraints {
            self.check_constraint(constraint)?;
        }

        self.constraints = constraints;
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: LinearConstraint) -> Result<(), BackendError> {
        self.check_constraint(&constraint)?;
        self.constraints.add(constraint);
        Ok(())
    }

    #[inline]
    fn check_constraint(&self, constraint: &LinearConstraint) -> Result<(), BackendError> {
        match constraint.max_variable() {
            Some(variable) => check_variable(variable, self.num_variables()),
            None => Ok(()),
        }
    }
}

#[inline]
fn check_variable(variable: VariableIndex, num_variables: usize) -> Result<(), BackendError> {
    if variable.get() < num_variables {
        Ok(())
    } else {
        Err(BackendError::VariableOutOfRange {
            variable,
            num_variables,
        })
    }
}

impl std::fmt::Display for LinearProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LinearProblem(variables: {}, constraints: {}, sense: {})",
            self.num_variables(),
            self.constraints.len(),
            self.objective.sense()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constraint::Relation, variable::VariableType};

    fn v(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    #[test]
    fn test_objective_dimension_is_checked() {
        let mut p = LinearProblem::new(3, VariableType::Binary.into()).unwrap();
        let err = p
            .set_objective(LinearObjective::new(2, ObjectiveSense::Minimize))
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert!(p
            .set_objective(LinearObjective::new(3, ObjectiveSense::Maximize))
            .is_ok());
        assert_eq!(p.objective().sense(), ObjectiveSense::Maximize);
    }

    #[test]
    fn test_constraint_variables_are_checked() {
        let mut p = LinearProblem::new(2, VariableType::Binary.into()).unwrap();
        let bad = LinearConstraint::from_terms([(v(2), 1.0)], Relation::LessEqual, 1.0);
        assert!(matches!(
            p.add_constraint(bad.clone()),
            Err(BackendError::VariableOutOfRange { num_variables: 2, .. })
        ));

        let good = LinearConstraint::from_terms([(v(1), 1.0)], Relation::LessEqual, 1.0);
        p.add_constraint(good.clone()).unwrap();

        let replaced: LinearConstraints = vec![good.clone(), bad].into_iter().collect();
        assert!(p.set_constraints(replaced).is_err());
        assert_eq!(p.constraints().len(), 1);
    }

    #[test]
    fn test_type_override_out_of_range() {
        let types = VariableTypes::with_overrides(VariableType::Binary, [(v(5), VariableType::Integer)]);
        assert!(LinearProblem::new(5, types.clone()).is_err());
        assert!(LinearProblem::new(6, types).is_ok());
    }
}
