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

//! Variable domains.
//!
//! A backend is initialized with one default `VariableType` for all
//! variables, optionally refined by per-variable overrides.

use crate::index::VariableIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// A real value, bounded below by zero.
    Continuous,
    /// A non-negative integer.
    Integer,
    /// Zero or one.
    #[default]
    Binary,
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableType::Continuous => write!(f, "Continuous"),
            VariableType::Integer => write!(f, "Integer"),
            VariableType::Binary => write!(f, "Binary"),
        }
    }
}

/// The types of all variables: a default plus sparse per-variable overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableTypes {
    default: VariableType,
    overrides: BTreeMap<VariableIndex, VariableType>,
}

impl VariableTypes {
    /// Every variable has type `default`.
    #[inline]
    pub fn uniform(default: VariableType) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Every variable has type `default` except those listed in `overrides`.
    #[inline]
    pub fn with_overrides<I>(default: VariableType, overrides: I) -> Self
    where
        I: IntoIterator<Item = (VariableIndex, VariableType)>,
    {
        Self {
            default,
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Sets the type of a single variable.
    #[inline]
    pub fn set(&mut self, variable: VariableIndex, variable_type: VariableType) {
        if variable_type == self.default {
            self.overrides.remove(&variable);
        } else {
            self.overrides.insert(variable, variable_type);
        }
    }

    #[inline]
    pub fn default_type(&self) -> VariableType {
        self.default
    }

    /// Returns the type of `variable`.
    #[inline]
    pub fn get(&self, variable: VariableIndex) -> VariableType {
        self.overrides
            .get(&variable)
            .copied()
            .unwrap_or(self.default)
    }

    /// Iterates over the variables whose type differs from the default.
    #[inline]
    pub fn overrides(&self) -> impl Iterator<Item = (VariableIndex, VariableType)> + '_ {
        self.overrides.iter().map(|(&v, &t)| (v, t))
    }

    /// Returns the highest override index, if any.
    #[inline]
    pub fn max_override(&self) -> Option<VariableIndex> {
        self.overrides.keys().next_back().copied()
    }

    /// Returns `true` if every one of the first `num_variables` variables is binary.
    pub fn all_binary(&self, num_variables: usize) -> bool {
        let overrides_binary = self
            .overrides
            .iter()
            .filter(|(v, _)| v.get() < num_variables)
            .all(|(_, &t)| t == VariableType::Binary);

        if self.default == VariableType::Binary {
            return overrides_binary;
        }

        // Every variable must then be overridden to binary.
        let overridden = self
            .overrides
            .range(..VariableIndex::new(num_variables))
            .count();
        overrides_binary && overridden == num_variables
    }
}

impl From<VariableType> for VariableTypes {
    #[inline]
    fn from(default: VariableType) -> Self {
        Self::uniform(default)
    }
}
