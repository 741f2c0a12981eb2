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

//! # Surfrec ILP
//!
//! **Min-surface level assignment as a binary integer program.**
//!
//! Given a `GraphModel` of columns with per-level costs and gradient-bounded
//! neighbor edges, this crate chooses one level per column minimizing the
//! total cost. The choice is encoded with *threshold variables*: variable
//! `(n, l)` is one iff the level of column `n` is at least `l`. In this
//! encoding
//!
//! * the cost of a column telescopes into one coefficient per threshold
//!   (`objective`),
//! * the surface constraints are all two-term implications or small sums
//!   (`constraints`),
//! * a solution is decoded by finding the first inactive threshold of each
//!   column (`decoder`).
//!
//! Solving itself is delegated to a `SolverBackend` from `surfrec-lp`; the
//! `IlpSolver` facade in `solver` ties the pieces together.
//!
//! ## Example
//!
//! ```rust
//! use surfrec_ilp::{params::SolveParameters, solver::IlpSolver};
//! use surfrec_lp::microlp::MicrolpBackend;
//!
//! let mut solver = IlpSolver::new(1, 0, 3, 1, MicrolpBackend::factory()).unwrap();
//! let column = solver.add_columns(1).unwrap();
//! solver.set_level_costs(column, vec![5.0, 1.0, 3.0]).unwrap();
//!
//! let objective = solver.min_surface(&SolveParameters::default()).unwrap();
//! assert_eq!(objective, 1.0);
//! assert_eq!(solver.level(column).unwrap(), 1);
//! ```

pub mod constraints;
pub mod decoder;
pub mod error;
pub mod layout;
pub mod objective;
pub mod params;
pub mod solver;
pub mod stats;
