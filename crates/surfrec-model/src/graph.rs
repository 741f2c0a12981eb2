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

//! The column graph arena.
//!
//! `GraphModel` stores columns and neighbor edges in dense vectors. All
//! per-column data (cost vectors, adjacency) and per-edge data (endpoints,
//! gradient overrides) are parallel arrays addressed by `ColumnIndex` and
//! `EdgeIndex`. Columns and edges are only ever appended, so identifiers stay
//! stable for the lifetime of the model.

use crate::{
    error::ModelError,
    index::{ColumnIndex, EdgeIndex},
};
use smallvec::SmallVec;

/// Neighbor lists of grid-like graphs rarely exceed four entries.
type Neighbors = SmallVec<[ColumnIndex; 4]>;

#[inline(always)]
fn flatten_index(num_levels: usize, column: ColumnIndex, level: usize) -> usize {
    column.get() * num_levels + level
}

/// A graph of columns with per-level costs and gradient-bounded neighbor edges.
///
/// # Examples
///
/// ```rust
/// use surfrec_model::graph::GraphModel;
///
/// let mut model = GraphModel::new(3, 1).unwrap();
/// let first = model.add_columns(2).unwrap();
/// let second = first + 1;
/// model.add_edge(first, second).unwrap();
/// model.set_level_costs(first, vec![5.0, 1.0, 3.0]).unwrap();
/// model.set_level_costs(second, vec![0.0, 2.0, 4.0]).unwrap();
///
/// assert_eq!(model.num_columns(), 2);
/// assert_eq!(model.num_edges(), 1);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct GraphModel {
    num_levels: usize,
    default_max_gradient: usize,
    level_costs: Vec<f64>,           // len = num_columns * num_levels
    has_costs: Vec<bool>,            // len = num_columns
    adjacency: Vec<Neighbors>,       // len = num_columns
    edge_endpoints: Vec<(ColumnIndex, ColumnIndex)>, // len = num_edges
    edge_gradients: Vec<Option<usize>>,              // len = num_edges
}

impl GraphModel {
    /// Creates an empty model with `num_levels` levels per column.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroLevels` if `num_levels` is zero.
    #[inline]
    pub fn new(num_levels: usize, default_max_gradient: usize) -> Result<Self, ModelError> {
        Self::with_capacity(0, 0, num_levels, default_max_gradient)
    }

    /// Creates an empty model, reserving room for the estimated number of
    /// columns and edges. The estimates only avoid reallocation; more columns
    /// and edges can always be added.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroLevels` if `num_levels` is zero.
    pub fn with_capacity(
        num_columns: usize,
        num_edges: usize,
        num_levels: usize,
        default_max_gradient: usize,
    ) -> Result<Self, ModelError> {
        if num_levels == 0 {
            return Err(ModelError::ZeroLevels);
        }

        Ok(Self {
            num_levels,
            default_max_gradient,
            level_costs: Vec::with_capacity(num_columns.saturating_mul(num_levels)),
            has_costs: Vec::with_capacity(num_columns),
            adjacency: Vec::with_capacity(num_columns),
            edge_endpoints: Vec::with_capacity(num_edges),
            edge_gradients: Vec::with_capacity(num_edges),
        })
    }

    /// Returns the number of columns in the model.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.has_costs.len()
    }

    /// Returns the number of neighbor edges in the model.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_endpoints.len()
    }

    /// Returns the number of levels of every column.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    /// Returns the gradient bound used by edges without an override.
    #[inline]
    pub fn default_max_gradient(&self) -> usize {
        self.default_max_gradient
    }

    /// Returns `true` if `column` refers to an existing column.
    #[inline]
    pub fn contains_column(&self, column: ColumnIndex) -> bool {
        column.get() < self.num_columns()
    }

    /// Adds `count` columns and returns the identifier of the first one.
    /// The new columns are numbered contiguously from there.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroColumns` if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use surfrec_model::graph::GraphModel;
    /// let mut model = GraphModel::new(4, 1).unwrap();
    /// assert_eq!(model.add_columns(3).unwrap().get(), 0);
    /// assert_eq!(model.add_columns(2).unwrap().get(), 3);
    /// assert!(model.add_columns(0).is_err());
    /// ```
    pub fn add_columns(&mut self, count: usize) -> Result<ColumnIndex, ModelError> {
        if count < 1 {
            return Err(ModelError::ZeroColumns);
        }

        let first = ColumnIndex::new(self.num_columns());
        let new_len = self.num_columns() + count;

        self.has_costs.resize(new_len, false);
        self.adjacency.resize_with(new_len, Neighbors::new);
        self.level_costs.resize(new_len * self.num_levels, 0.0);

        Ok(first)
    }

    /// Adds a neighbor edge between `u` and `v` that uses the default gradient bound.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownColumn` if either endpoint does not exist.
    #[inline]
    pub fn add_edge(&mut self, u: ColumnIndex, v: ColumnIndex) -> Result<EdgeIndex, ModelError> {
        self.push_edge(u, v, None)
    }

    /// Adds a neighbor edge between `u` and `v` with its own gradient bound.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownColumn` if either endpoint does not exist.
    #[inline]
    pub fn add_edge_with_gradient(
        &mut self,
        u: ColumnIndex,
        v: ColumnIndex,
        max_gradient: usize,
    ) -> Result<EdgeIndex, ModelError> {
        self.push_edge(u, v, Some(max_gradient))
    }

    fn push_edge(
        &mut self,
        u: ColumnIndex,
        v: ColumnIndex,
        max_gradient: Option<usize>,
    ) -> Result<EdgeIndex, ModelError> {
        self.check_column(u)?;
        self.check_column(v)?;

        let edge = EdgeIndex::new(self.num_edges());
        self.edge_endpoints.push((u, v));
        self.edge_gradients.push(max_gradient);

        self.adjacency[u.get()].push(v);
        if u != v {
            self.adjacency[v.get()].push(u);
        }

        Ok(edge)
    }

    /// Sets the cost of the surface passing through each level of `column`,
    /// replacing any previous cost vector.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownColumn` if the column does not exist and
    /// `ModelError::CostLengthMismatch` if `costs` does not have exactly
    /// `num_levels` entries.
    pub fn set_level_costs<C>(&mut self, column: ColumnIndex, costs: C) -> Result<(), ModelError>
    where
        C: AsRef<[f64]>,
    {
        self.check_column(column)?;

        let costs = costs.as_ref();
        if costs.len() != self.num_levels {
            return Err(ModelError::CostLengthMismatch {
                column,
                expected: self.num_levels,
                actual: costs.len(),
            });
        }

        let start = flatten_index(self.num_levels, column, 0);
        self.level_costs[start..start + self.num_levels].copy_from_slice(costs);
        self.has_costs[column.get()] = true;

        Ok(())
    }

    /// Returns the cost vector of `column`, or `None` if the column does not
    /// exist or has no costs yet.
    #[inline]
    pub fn level_costs(&self, column: ColumnIndex) -> Option<&[f64]> {
        if !self.contains_column(column) || !self.has_costs[column.get()] {
            return None;
        }

        let start = flatten_index(self.num_levels, column, 0);
        Some(&self.level_costs[start..start + self.num_levels])
    }

    /// Returns the cost of `column` at `level`.
    ///
    /// # Panics
    ///
    /// Panics if `column` or `level` is out of bounds.
    #[inline]
    pub fn level_cost(&self, column: ColumnIndex, level: usize) -> f64 {
        debug_assert!(
            level < self.num_levels,
            "called `GraphModel::level_cost` with level out of bounds: the len is {} but the level is {}",
            self.num_levels,
            level
        );

        self.level_costs[flatten_index(self.num_levels, column, level)]
    }

    /// Returns the endpoints of `edge` in the order they were given.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is out of bounds.
    #[inline]
    pub fn edge(&self, edge: EdgeIndex) -> (ColumnIndex, ColumnIndex) {
        debug_assert!(
            edge.get() < self.num_edges(),
            "called `GraphModel::edge` with edge index out of bounds: the len is {} but the index is {}",
            self.num_edges(),
            edge.get()
        );

        self.edge_endpoints[edge.get()]
    }

    /// Returns the gradient override of `edge`, if one was given.
    #[inline]
    pub fn edge_gradient_override(&self, edge: EdgeIndex) -> Option<usize> {
        self.edge_gradients[edge.get()]
    }

    /// Returns the gradient bound that applies to `edge`: its override, or
    /// the model-wide default.
    #[inline]
    pub fn effective_gradient(&self, edge: EdgeIndex) -> usize {
        self.edge_gradient_override(edge)
            .unwrap_or(self.default_max_gradient)
    }

    /// Iterates over all edges as `(edge, u, v)`.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, ColumnIndex, ColumnIndex)> + '_ {
        self.edge_endpoints
            .iter()
            .enumerate()
            .map(|(i, &(u, v))| (EdgeIndex::new(i), u, v))
    }

    /// Iterates over all column identifiers.
    #[inline]
    pub fn columns(&self) -> impl DoubleEndedIterator<Item = ColumnIndex> + ExactSizeIterator {
        ColumnIndex::range(ColumnIndex::new(0), self.num_columns())
    }

    /// Returns the neighbors of `column` in edge insertion order. A column
    /// joined by several edges to the same neighbor lists it several times.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn neighbors(&self, column: ColumnIndex) -> &[ColumnIndex] {
        debug_assert!(
            self.contains_column(column),
            "called `GraphModel::neighbors` with column index out of bounds: the len is {} but the index is {}",
            self.num_columns(),
            column.get()
        );

        &self.adjacency[column.get()]
    }

    /// Returns the number of neighbor entries of `column`.
    #[inline]
    pub fn degree(&self, column: ColumnIndex) -> usize {
        self.neighbors(column).len()
    }

    /// Checks that the model is ready to be formulated: every column has a
    /// cost vector.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingCosts` for the first column without costs.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self.has_costs.iter().position(|&set| !set) {
            Some(i) => Err(ModelError::MissingCosts {
                column: ColumnIndex::new(i),
            }),
            None => Ok(()),
        }
    }

    #[inline]
    fn check_column(&self, column: ColumnIndex) -> Result<(), ModelError> {
        if self.contains_column(column) {
            Ok(())
        } else {
            Err(ModelError::UnknownColumn {
                column,
                num_columns: self.num_columns(),
            })
        }
    }
}

impl std::fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphModel")
            .field("num_columns", &self.num_columns())
            .field("num_edges", &self.num_edges())
            .field("num_levels", &self.num_levels)
            .field("default_max_gradient", &self.default_max_gradient)
            .finish()
    }
}

impl std::fmt::Display for GraphModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphModel(columns: {}, edges: {}, levels: {}, max_gradient: {})",
            self.num_columns(),
            self.num_edges(),
            self.num_levels,
            self.default_max_gradient
        )
    }
}
