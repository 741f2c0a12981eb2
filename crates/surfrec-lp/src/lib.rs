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

//! # Surfrec LP
//!
//! The linear programming layer the surface engine talks to. It defines the
//! problem data exchanged with a solver (variables, a linear objective and
//! linear constraints), the `SolverBackend` contract every solver adapter
//! implements, a registry of named backend constructors, and a CPLEX-LP
//! style writer for problem dumps.
//!
//! Solving is delegated. The built-in `microlp` backend translates problems
//! into a `good_lp` model and solves them with the pure-Rust `microlp`
//! solver; other solvers plug in through the same trait.

pub mod backend;
pub mod constraint;
pub mod index;
pub mod lp_format;
pub mod microlp;
pub mod objective;
pub mod params;
pub mod problem;
pub mod registry;
pub mod solution;
pub mod variable;
