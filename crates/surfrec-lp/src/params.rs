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

//! Solve-time configuration handed to a backend.

use serde::{Deserialize, Serialize};

/// Default relative optimality gap.
pub const DEFAULT_MIP_GAP: f64 = 1e-4;

/// What the backend should concentrate on while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MipFocus {
    /// Balance finding good solutions against proving optimality.
    #[default]
    Balanced,
    /// Find a feasible solution quickly.
    Feasibility,
    /// Concentrate on improving the incumbent.
    Optimality,
    /// Concentrate on moving the bound, proving optimality exactly.
    Bound,
}

impl MipFocus {
    /// The numeric focus codes `0..=3` used by commercial MIP solvers.
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MipFocus::Balanced),
            1 => Some(MipFocus::Feasibility),
            2 => Some(MipFocus::Optimality),
            3 => Some(MipFocus::Bound),
            _ => None,
        }
    }

    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            MipFocus::Balanced => 0,
            MipFocus::Feasibility => 1,
            MipFocus::Optimality => 2,
            MipFocus::Bound => 3,
        }
    }
}

impl std::fmt::Display for MipFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MipFocus::Balanced => write!(f, "Balanced"),
            MipFocus::Feasibility => write!(f, "Feasibility"),
            MipFocus::Optimality => write!(f, "Optimality"),
            MipFocus::Bound => write!(f, "Bound"),
        }
    }
}

/// Parameters passed to `SolverBackend::solve`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendParameters {
    /// Relative optimality gap at which the search may stop.
    pub mip_gap: f64,
    pub mip_focus: MipFocus,
    /// Number of threads; `0` leaves the choice to the backend.
    pub num_threads: usize,
    /// Emit progress at `info` level instead of `debug`.
    pub verbose: bool,
}

impl Default for BackendParameters {
    fn default() -> Self {
        Self {
            mip_gap: DEFAULT_MIP_GAP,
            mip_focus: MipFocus::Balanced,
            num_threads: 0,
            verbose: false,
        }
    }
}

impl BackendParameters {
    #[inline]
    pub fn with_mip_gap(mut self, mip_gap: f64) -> Self {
        self.mip_gap = mip_gap;
        self
    }

    #[inline]
    pub fn with_mip_focus(mut self, mip_focus: MipFocus) -> Self {
        self.mip_focus = mip_focus;
        self
    }

    #[inline]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    #[inline]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl std::fmt::Display for BackendParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BackendParameters(mip_gap: {}, mip_focus: {}, num_threads: {}, verbose: {})",
            self.mip_gap, self.mip_focus, self.num_threads, self.verbose
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = BackendParameters::default();
        assert_eq!(p.mip_gap, 1e-4);
        assert_eq!(p.mip_focus, MipFocus::Balanced);
        assert_eq!(p.num_threads, 0);
        assert!(!p.verbose);
    }

    #[test]
    fn test_focus_codes() {
        for code in 0..4 {
            let focus = MipFocus::from_code(code).unwrap();
            assert_eq!(focus.code(), code);
        }
        assert_eq!(MipFocus::from_code(4), None);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let p: BackendParameters =
            serde_json::from_str(r#"{ "mip_focus": "bound", "num_threads": 4 }"#).unwrap();
        assert_eq!(p.mip_focus, MipFocus::Bound);
        assert_eq!(p.num_threads, 4);
        assert_eq!(p.mip_gap, DEFAULT_MIP_GAP);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(serde_json::from_str::<BackendParameters>(r#"{ "gap": 0.1 }"#).is_err());
    }
}
