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

//! # Surfrec Model
//!
//! **The column graph on which a minimal surface is chosen.**
//!
//! A surface is represented by one discrete level per *column* (a site such as
//! a pixel of a height field). Columns are connected by *neighbor edges* that
//! bound how much the surface may jump between them. Every column carries a
//! cost vector: `costs[l]` is the cost of the surface passing through level
//! `l` of that column.
//!
//! ## Architecture
//!
//! * **`index`**: strongly typed `ColumnIndex` and `EdgeIndex`.
//! * **`graph`**: the `GraphModel` arena. Columns and edges are addressed by
//!   dense identifiers; their attributes (cost vectors, gradient overrides,
//!   adjacency) live in parallel vectors indexed by the same identifiers.
//! * **`error`**: `ModelError`, the usage errors raised while building a model.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: a `ColumnIndex` cannot be used where an `EdgeIndex` is expected.
//! 2.  **Memory Layout**: Structure of Arrays, no pointer graph.
//! 3.  **Fail-Fast**: invalid input is rejected when it is given, not when the model is solved.

pub mod error;
pub mod graph;
pub mod index;
