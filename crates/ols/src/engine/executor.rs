//! Execution engine for OLS fitting and prediction.
//!
//! ## Purpose
//!
//! This module turns validated inputs into a fitted model and applies a
//! fitted model to new observations. It is the single place where the
//! design matrix is assembled and the least-squares solver is invoked.
//!
//! ## Design notes
//!
//! * The intercept is modelled as a leading column of ones in the design.
//! * Solving is delegated to [`LeastSquares`] (QR or SVD).
//! * Prediction is a plain linear combination per row.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated (handled by `validator`).
//! * `fit` either returns a complete [`OlsFit`] or an error; there is no partial state.
//!
//! ## Non-goals
//!
//! * This module does not validate input data.
//! * This module does not own model state (the regressor does).

// External dependencies
use log::{debug, trace, warn};
use nalgebra::DVector;

// Internal dependencies
use crate::engine::output::OlsFit;
use crate::math::solver::{LeastSquares, Solver};
use crate::primitives::errors::OlsError;
use crate::primitives::input::FeatureMatrix;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for an OLS fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OlsConfig {
    /// Prepend a column of ones to the design matrix.
    pub fit_intercept: bool,

    /// Factorization used to solve the least-squares problem.
    pub solver: Solver,
}

impl Default for OlsConfig {
    fn default() -> Self {
        Self {
            fit_intercept: true,
            solver: Solver::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for OLS operations.
pub struct OlsExecutor;

impl OlsExecutor {
    /// Fit a linear model to validated inputs.
    pub fn fit(config: &OlsConfig, x: &FeatureMatrix, y: &[f64]) -> Result<OlsFit, OlsError> {
        let (n, p) = (x.rows(), x.cols());
        debug!(
            "fitting OLS on {}x{} features (intercept: {}, solver: {})",
            n,
            p,
            config.fit_intercept,
            config.solver.name()
        );

        let design = x.design(config.fit_intercept);
        let targets = DVector::from_row_slice(y);

        let solution = LeastSquares::solve(&design, &targets, config.solver).map_err(|err| {
            if let OlsError::SingularMatrix { rank, columns } = err {
                warn!("design matrix is rank deficient (rank {rank} < {columns})");
            }
            err
        })?;
        trace!("design rank: {}", solution.rank);

        let theta = solution.theta.as_slice();
        let (intercept, coefficients) = if config.fit_intercept {
            (theta[0], theta[1..].to_vec())
        } else {
            (0.0, theta.to_vec())
        };
        trace!("intercept: {intercept}, coefficients: {coefficients:?}");

        Ok(OlsFit {
            coefficients,
            intercept,
            fit_intercept: config.fit_intercept,
            n_samples: n,
            n_features: p,
            rank: solution.rank,
            solver: config.solver,
        })
    }

    /// Apply a fitted model to validated query rows.
    pub fn predict(fit: &OlsFit, x: &FeatureMatrix) -> Vec<f64> {
        debug!("predicting {} rows", x.rows());
        x.iter_rows().map(|row| fit.predict_row(row)).collect()
    }
}
