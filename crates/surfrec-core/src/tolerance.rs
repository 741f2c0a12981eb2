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

//! Floating-point tolerances.
//!
//! LP backends report variable values as floating-point numbers even for
//! binary variables; a value of `0.9999999` must still read as "on". The
//! helpers here keep that interpretation in one place.

use num_traits::Float;

/// Values at or above this threshold are read as an active binary variable.
pub const BINARY_THRESHOLD: f64 = 0.5;

/// Default absolute tolerance for comparing objective values and activities.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Returns `true` if `value` encodes an active (`1`) binary variable.
///
/// ```rust
/// use surfrec_core::tolerance::is_active;
///
/// assert!(is_active(1.0));
/// assert!(is_active(0.9999));
/// assert!(!is_active(0.4999));
/// ```
#[inline(always)]
pub fn is_active(value: f64) -> bool {
    value >= BINARY_THRESHOLD
}

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
///
/// ```rust
/// use surfrec_core::tolerance::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0f32, 1.1f32, 1e-3));
/// ```
#[inline]
pub fn approx_eq<F>(a: F, b: F, tolerance: F) -> bool
where
    F: Float,
{
    (a - b).abs() <= tolerance
}

/// Returns `true` if `value` lies within `tolerance` of an integer.
#[inline]
pub fn is_integral<F>(value: F, tolerance: F) -> bool
where
    F: Float,
{
    approx_eq(value, value.round(), tolerance)
}
