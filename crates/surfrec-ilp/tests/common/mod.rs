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

//! Instances and an exhaustive reference solver shared by the integration
//! tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Once;
use surfrec_ilp::solver::IlpSolver;
use surfrec_lp::registry::BackendFactory;
use surfrec_model::index::ColumnIndex;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Routes `tracing` output through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A small min-surface instance with integer costs.
#[derive(Debug, Clone)]
pub struct Instance {
    pub num_levels: usize,
    pub max_gradient: usize,
    pub costs: Vec<Vec<f64>>,
    pub edges: Vec<(usize, usize)>,
}

impl Instance {
    pub fn new(num_levels: usize, max_gradient: usize) -> Self {
        Self {
            num_levels,
            max_gradient,
            costs: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn column(mut self, costs: &[f64]) -> Self {
        assert_eq!(costs.len(), self.num_levels);
        self.costs.push(costs.to_vec());
        self
    }

    pub fn edge(mut self, u: usize, v: usize) -> Self {
        self.edges.push((u, v));
        self
    }

    pub fn num_columns(&self) -> usize {
        self.costs.len()
    }

    pub fn solver(&self, factory: BackendFactory) -> IlpSolver {
        let mut solver = IlpSolver::new(
            self.num_columns(),
            self.edges.len(),
            self.num_levels,
            self.max_gradient,
            factory,
        )
        .unwrap();
        if self.num_columns() > 0 {
            solver.add_columns(self.num_columns()).unwrap();
        }
        for (i, costs) in self.costs.iter().enumerate() {
            solver.set_level_costs(ColumnIndex::new(i), costs).unwrap();
        }
        for &(u, v) in &self.edges {
            solver
                .add_edge(ColumnIndex::new(u), ColumnIndex::new(v))
                .unwrap();
        }
        solver
    }

    /// Distinct neighbors of every column, self-loops dropped.
    pub fn neighbor_sets(&self) -> Vec<Vec<usize>> {
        let mut sets = vec![Vec::new(); self.num_columns()];
        for &(u, v) in &self.edges {
            if u == v {
                continue;
            }
            if !sets[u].contains(&v) {
                sets[u].push(v);
            }
            if !sets[v].contains(&u) {
                sets[v].push(u);
            }
        }
        sets
    }

    pub fn cost(&self, levels: &[usize]) -> f64 {
        levels
            .iter()
            .enumerate()
            .map(|(i, &l)| self.costs[i][l])
            .sum()
    }

    /// Checks an assignment directly in level space.
    ///
    /// Zero-minimum with `N` neighbors: for every column `n` and every
    /// `l` in `1..=L-2`, at most `N - 1` distinct neighbors sit at level `l`
    /// or above, or `N` of them when `n` itself is above `l`.
    pub fn is_feasible(&self, levels: &[usize], zero_minimum: Option<usize>) -> bool {
        if levels.iter().any(|&l| l >= self.num_levels) {
            return false;
        }
        let gradient_ok = self
            .edges
            .iter()
            .all(|&(u, v)| levels[u].abs_diff(levels[v]) <= self.max_gradient);
        if !gradient_ok {
            return false;
        }

        let Some(n) = zero_minimum else {
            return true;
        };
        if self.num_levels < 3 {
            return true;
        }
        let n = n as i64;
        self.neighbor_sets()
            .iter()
            .enumerate()
            .all(|(column, neighbors)| {
                (1..=self.num_levels - 2).all(|l| {
                    let high = neighbors.iter().filter(|&&nb| levels[nb] >= l).count() as i64;
                    let above = i64::from(levels[column] > l);
                    high - above <= n - 1
                })
            })
    }

    /// The optimum over all `L^n` assignments, or `None` if none is feasible.
    pub fn brute_force(&self, zero_minimum: Option<usize>) -> Option<(f64, Vec<usize>)> {
        let n = self.num_columns();
        let mut levels = vec![0usize; n];
        let mut best: Option<(f64, Vec<usize>)> = None;

        loop {
            if self.is_feasible(&levels, zero_minimum) {
                let cost = self.cost(&levels);
                if best.as_ref().map_or(true, |(b, _)| cost < *b) {
                    best = Some((cost, levels.clone()));
                }
            }

            let mut i = 0;
            while i < n {
                levels[i] += 1;
                if levels[i] < self.num_levels {
                    break;
                }
                levels[i] = 0;
                i += 1;
            }
            if i == n {
                return best;
            }
        }
    }
}

/// Exact optimum of an instance whose edges form the path `0 - 1 - ... - n-1`,
/// by dynamic programming over the levels of consecutive columns.
pub fn chain_optimum(instance: &Instance) -> f64 {
    let g = instance.max_gradient;
    let mut best = instance.costs[0].clone();
    for costs in &instance.costs[1..] {
        best = (0..instance.num_levels)
            .map(|l| {
                let lo = l.saturating_sub(g);
                let hi = (l + g).min(instance.num_levels - 1);
                let previous = best[lo..=hi].iter().copied().fold(f64::INFINITY, f64::min);
                previous + costs[l]
            })
            .collect();
    }
    best.into_iter().fold(f64::INFINITY, f64::min)
}

/// A chain of `num_columns` columns with costs drawn uniformly from `[0, 1)`.
pub fn random_chain(
    seed: u64,
    num_columns: usize,
    num_levels: usize,
    max_gradient: usize,
) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut instance = Instance::new(num_levels, max_gradient);
    for _ in 0..num_columns {
        let costs: Vec<f64> = (0..num_levels).map(|_| rng.gen::<f64>()).collect();
        instance = instance.column(&costs);
    }
    Instance {
        edges: (1..num_columns).map(|i| (i - 1, i)).collect(),
        ..instance
    }
}

/// Edges of a cycle over `n` columns.
pub fn ring(n: usize) -> Vec<(usize, usize)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Edges of a 4-connected `width x height` grid, row-major.
pub fn grid(width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            if x + 1 < width {
                edges.push((i, i + 1));
            }
            if y + 1 < height {
                edges.push((i, i + width));
            }
        }
    }
    edges
}
