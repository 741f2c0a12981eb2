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

//! The `microlp` backend agrees with exhaustive enumeration on small random
//! binary programs.

use proptest::prelude::*;
use surfrec_lp::{
    backend::{BackendError, SolverBackend},
    constraint::{LinearConstraint, LinearConstraints, Relation},
    index::VariableIndex,
    microlp::MicrolpBackend,
    objective::{LinearObjective, ObjectiveSense},
    params::BackendParameters,
    solution::Solution,
    variable::VariableType,
};

#[derive(Debug, Clone)]
struct Program {
    num_variables: usize,
    costs: Vec<f64>,
    sense: ObjectiveSense,
    constraints: Vec<LinearConstraint>,
}

fn relation() -> impl Strategy<Value = Relation> {
    prop_oneof![
        Just(Relation::LessEqual),
        Just(Relation::Equal),
        Just(Relation::GreaterEqual),
    ]
}

fn coefficient() -> impl Strategy<Value = i32> {
    prop_oneof![-3i32..=-1, 1i32..=3]
}

fn program() -> impl Strategy<Value = Program> {
    (1usize..=6).prop_flat_map(|n| {
        let costs = prop::collection::vec(-5i32..=5, n);
        let sense = prop_oneof![Just(ObjectiveSense::Minimize), Just(ObjectiveSense::Maximize)];
        let row = (
            prop::collection::vec((0..n, coefficient()), 1..=3),
            relation(),
            -2i32..=4,
        )
            .prop_map(|(terms, relation, rhs)| {
                LinearConstraint::from_terms(
                    terms
                        .into_iter()
                        .map(|(v, a)| (VariableIndex::new(v), f64::from(a))),
                    relation,
                    f64::from(rhs),
                )
            });
        let rows = prop::collection::vec(row, 0..=3);

        (Just(n), costs, sense, rows).prop_map(|(n, costs, sense, constraints)| Program {
            num_variables: n,
            costs: costs.into_iter().map(f64::from).collect(),
            sense,
            constraints,
        })
    })
}

/// Best objective over all feasible assignments, by enumeration.
fn brute_force(p: &Program) -> Option<f64> {
    let mut best: Option<f64> = None;
    for mask in 0u32..(1 << p.num_variables) {
        let values: Vec<f64> = (0..p.num_variables)
            .map(|i| if mask & (1 << i) != 0 { 1.0 } else { 0.0 })
            .collect();
        if !p.constraints.iter().all(|c| c.is_satisfied(&values, 1e-9)) {
            continue;
        }
        let objective: f64 = p.costs.iter().zip(&values).map(|(c, x)| c * x).sum();
        best = Some(match (best, p.sense) {
            (None, _) => objective,
            (Some(b), ObjectiveSense::Minimize) => b.min(objective),
            (Some(b), ObjectiveSense::Maximize) => b.max(objective),
        });
    }
    best
}

fn solve(p: &Program) -> Result<Solution, BackendError> {
    let mut backend = MicrolpBackend::new();
    backend.initialize(p.num_variables, VariableType::Binary.into())?;
    backend.set_objective(LinearObjective::from_coefficients(p.costs.clone(), p.sense))?;
    backend.set_constraints(p.constraints.iter().cloned().collect::<LinearConstraints>())?;
    backend.solve(&BackendParameters::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn microlp_matches_enumeration(p in program()) {
        match (brute_force(&p), solve(&p)) {
            (None, Err(BackendError::Infeasible)) => {}
            (Some(best), Ok(solution)) => {
                prop_assert!((solution.objective_value() - best).abs() < 1e-6,
                    "microlp objective {} but enumeration found {}", solution.objective_value(), best);
                for c in &p.constraints {
                    prop_assert!(c.is_satisfied(solution.values(), 1e-6), "violates {}", c);
                }
                prop_assert!(solution.values().iter().all(|&x| x == 0.0 || x == 1.0));
            }
            (expected, actual) => {
                prop_assert!(false, "enumeration {:?} but microlp returned {:?}", expected, actual);
            }
        }
    }
}
