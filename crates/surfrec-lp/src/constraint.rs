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

//! Linear constraints.
//!
//! A `LinearConstraint` is a sparse row `sum(a_j * x_j) <relation> value`.
//! Coefficients are kept in a map keyed by variable, so setting the
//! coefficient of the same variable twice overwrites the first value instead
//! of adding to it.

use crate::index::VariableIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use surfrec_core::tolerance::approx_eq;

/// The relation between a constraint's activity and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    LessEqual,
    Equal,
    GreaterEqual,
}

impl Relation {
    /// The operator as written in LP files.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::LessEqual => "<=",
            Relation::Equal => "=",
            Relation::GreaterEqual => ">=",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single linear constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    coefficients: BTreeMap<VariableIndex, f64>,
    relation: Relation,
    value: f64,
}

impl LinearConstraint {
    /// Creates a constraint without terms.
    #[inline]
    pub fn new(relation: Relation, value: f64) -> Self {
        Self {
            coefficients: BTreeMap::new(),
            relation,
            value,
        }
    }

    /// Creates a constraint from `(variable, coefficient)` terms. A variable
    /// listed twice keeps its last coefficient.
    #[inline]
    pub fn from_terms<I>(terms: I, relation: Relation, value: f64) -> Self
    where
        I: IntoIterator<Item = (VariableIndex, f64)>,
    {
        Self {
            coefficients: terms.into_iter().collect(),
            relation,
            value,
        }
    }

    /// Sets the coefficient of `variable`, replacing any previous one.
    #[inline]
    pub fn set_coefficient(&mut self, variable: VariableIndex, coefficient: f64) {
        self.coefficients.insert(variable, coefficient);
    }

    #[inline]
    pub fn set_relation(&mut self, relation: Relation) {
        self.relation = relation;
    }

    #[inline]
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    #[inline]
    pub fn coefficient(&self, variable: VariableIndex) -> Option<f64> {
        self.coefficients.get(&variable).copied()
    }

    /// Iterates over the terms in increasing variable order.
    #[inline]
    pub fn terms(&self) -> impl ExactSizeIterator<Item = (VariableIndex, f64)> + '_ {
        self.coefficients.iter().map(|(&v, &c)| (v, c))
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the highest variable index used by the constraint.
    #[inline]
    pub fn max_variable(&self) -> Option<VariableIndex> {
        self.coefficients.keys().next_back().copied()
    }

    /// Computes `sum(a_j * x_j)`. Variables beyond `values` count as zero.
    #[inline]
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .map(|(v, c)| c * values.get(v.get()).copied().unwrap_or(0.0))
            .sum()
    }

    /// Returns `true` if `values` satisfy the constraint within `tolerance`.
    #[inline]
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let activity = self.activity(values);
        match self.relation {
            Relation::LessEqual => activity <= self.value + tolerance,
            Relation::Equal => approx_eq(activity, self.value, tolerance),
            Relation::GreaterEqual => activity >= self.value - tolerance,
        }
    }
}

impl std::fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")?;
        }
        for (i, (v, c)) in self.terms().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:+} x{}", c, v.get())?;
        }
        write!(f, " {} {}", self.relation, self.value)
    }
}

/// An ordered collection of constraints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearConstraints {
    constraints: Vec<LinearConstraint>,
}

impl LinearConstraints {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            constraints: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LinearConstraint> {
        self.constraints.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Returns the first constraint violated by `values`, if any.
    pub fn first_violated(&self, values: &[f64], tolerance: f64) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| !c.is_satisfied(values, tolerance))
    }
}

impl Extend<LinearConstraint> for LinearConstraints {
    #[inline]
    fn extend<I: IntoIterator<Item = LinearConstraint>>(&mut self, iter: I) {
        self.constraints.extend(iter);
    }
}

impl FromIterator<LinearConstraint> for LinearConstraints {
    #[inline]
    fn from_iter<I: IntoIterator<Item = LinearConstraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LinearConstraints {
    type Item = LinearConstraint;
    type IntoIter = std::vec::IntoIter<LinearConstraint>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinearConstraints {
    type Item = &'a LinearConstraint;
    type IntoIter = std::slice::Iter<'a, LinearConstraint>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    #[test]
    fn test_set_coefficient_overwrites() {
        let mut c = LinearConstraint::new(Relation::LessEqual, 0.0);
        c.set_coefficient(v(2), 1.0);
        c.set_coefficient(v(2), -1.0);
        assert_eq!(c.num_terms(), 1);
        assert_eq!(c.coefficient(v(2)), Some(-1.0));
    }

    #[test]
    fn test_from_terms_keeps_last_duplicate() {
        let c = LinearConstraint::from_terms([(v(0), 1.0), (v(0), 3.0)], Relation::Equal, 1.0);
        assert_eq!(c.coefficient(v(0)), Some(3.0));
        assert_eq!(c.max_variable(), Some(v(0)));
    }

    #[test]
    fn test_activity_and_satisfaction() {
        let c = LinearConstraint::from_terms([(v(1), 1.0), (v(0), -1.0)], Relation::LessEqual, 0.0);
        assert!(c.is_satisfied(&[1.0, 1.0], 1e-9));
        assert!(c.is_satisfied(&[1.0, 0.0], 1e-9));
        assert!(!c.is_satisfied(&[0.0, 1.0], 1e-9));

        let eq = LinearConstraint::from_terms([(v(0), 1.0)], Relation::Equal, 1.0);
        assert!(eq.is_satisfied(&[1.0], 1e-9));
        assert!(!eq.is_satisfied(&[0.0], 1e-9));
        assert!(eq.is_satisfied(&[1.0 + 1e-12], 1e-9));
        assert!(!eq.is_satisfied(&[1.0 + 1e-6], 1e-9));

        let ge = LinearConstraint::from_terms([(v(0), 1.0), (v(1), 1.0)], Relation::GreaterEqual, 1.0);
        assert!(!ge.is_satisfied(&[0.0, 0.0], 1e-9));
        assert!(ge.is_satisfied(&[0.0, 1.0], 1e-9));
    }

    #[test]
    fn test_collection_first_violated() {
        let set: LinearConstraints = vec![
            LinearConstraint::from_terms([(v(0), 1.0)], Relation::Equal, 1.0),
            LinearConstraint::from_terms([(v(1), 1.0), (v(0), -1.0)], Relation::LessEqual, 0.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.first_violated(&[1.0, 1.0], 1e-9), None);
        assert_eq!(set.first_violated(&[0.0, 0.0], 1e-9), Some(0));
    }

    #[test]
    fn test_display() {
        let c = LinearConstraint::from_terms([(v(3), 1.0), (v(1), -1.0)], Relation::LessEqual, 0.0);
        assert_eq!(format!("{}", c), "-1 x1 +1 x3 <= 0");
    }
}
