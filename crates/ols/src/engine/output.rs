//! Fitted model state.
//!
//! ## Purpose
//!
//! This module defines [`OlsFit`], the parameters produced by a successful
//! fit together with the metadata needed to use and describe them.
//!
//! ## Design notes
//!
//! * **Immutable**: A fit is never updated in place; refitting replaces it.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `coefficients.len() == n_features`.
//! * `intercept == 0` when `fit_intercept` is false.
//! * `rank == n_params()` (rank-deficient designs never produce a fit).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond the linear predictor.
//! * This module does not provide serialization.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::math::solver::Solver;

// ============================================================================
// Fit Structure
// ============================================================================

/// Parameters of a fitted linear model, `ŷ = x · w + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    /// Coefficient vector `w`, one entry per feature.
    pub coefficients: Vec<f64>,

    /// Intercept `b`.
    pub intercept: f64,

    /// Whether an intercept column was part of the design.
    pub fit_intercept: bool,

    /// Number of observations used for the fit.
    pub n_samples: usize,

    /// Number of features `p`.
    pub n_features: usize,

    /// Numerical rank of the design matrix.
    pub rank: usize,

    /// Factorization used to solve the problem.
    pub solver: Solver,
}

impl OlsFit {
    /// Number of fitted parameters (coefficients plus intercept, if any).
    pub fn n_params(&self) -> usize {
        self.n_features + usize::from(self.fit_intercept)
    }

    /// Evaluate the linear predictor on a single observation.
    #[inline]
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        row.iter()
            .zip(self.coefficients.iter())
            .fold(self.intercept, |acc, (&xi, &wi)| acc + xi * wi)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OlsFit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:   {}", self.n_samples)?;
        writeln!(f, "  Features:  {}", self.n_features)?;
        writeln!(f, "  Rank:      {}", self.rank)?;
        writeln!(f, "  Solver:    {}", self.solver.name())?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "{:>12} {:>14}", "Term", "Estimate")?;
        writeln!(f, "{:-<27}", "")?;
        if self.fit_intercept {
            writeln!(f, "{:>12} {:>14.6}", "intercept", self.intercept)?;
        }

        // Show first 10 and last 10 terms if there are more than 20.
        let p = self.coefficients.len();
        let shown: Vec<usize> = if p <= 20 {
            (0..p).collect()
        } else {
            (0..10).chain(p - 10..p).collect()
        };

        let mut prev = 0;
        for (i, &idx) in shown.iter().enumerate() {
            if i > 0 && idx != prev + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev = idx;
            writeln!(
                f,
                "{:>12} {:>14.6}",
                format!("x{}", idx),
                self.coefficients[idx]
            )?;
        }

        Ok(())
    }
}
