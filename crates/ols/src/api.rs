//! High-level API for OLS regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuration, the [`OlsRegressor`] with `fit` / `predict` / `score`, and
//! checked metric functions over true and predicted targets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Inputs are validated at every public boundary.
//! * **Atomic fit**: A failed `fit` leaves the previous fit untouched.
//! * **Borrow-checked access**: `fit` takes `&mut self`, reads take `&self`, so
//!   a fit can never race with a prediction on the same instance.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`OlsBuilder`] via `Ols::new()`.
//! 2. Chain configuration methods (`.fit_intercept()`, `.solver()`).
//! 3. Call `.build()` to obtain an unfitted [`OlsRegressor`].

// Internal dependencies
use crate::engine::executor::{OlsConfig, OlsExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::metrics;
use crate::primitives::input::{OlsFeatures, OlsTargets};

// Publicly re-exported types
pub use crate::engine::output::OlsFit;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::solver::Solver;
pub use crate::primitives::errors::OlsError;
pub use crate::primitives::input::FeatureMatrix;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an OLS regressor.
#[derive(Debug, Clone, Default)]
pub struct OlsBuilder {
    /// Whether to fit an intercept (default: true).
    pub fit_intercept: Option<bool>,

    /// Least-squares factorization (default: SVD).
    pub solver: Option<Solver>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl OlsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an intercept term is fitted.
    pub fn fit_intercept(mut self, enabled: bool) -> Self {
        if self.fit_intercept.is_some() {
            self.duplicate_param = Some("fit_intercept");
        }
        self.fit_intercept = Some(enabled);
        self
    }

    /// Set the least-squares solver.
    pub fn solver(mut self, solver: Solver) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Validate the configuration and create an unfitted regressor.
    pub fn build(self) -> Result<OlsRegressor, OlsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = OlsConfig::default();
        Ok(OlsRegressor {
            config: OlsConfig {
                fit_intercept: self.fit_intercept.unwrap_or(defaults.fit_intercept),
                solver: self.solver.unwrap_or(defaults.solver),
            },
            fit: None,
        })
    }
}

// ============================================================================
// Regressor
// ============================================================================

/// Ordinary least squares linear regressor.
///
/// Not designed for shared mutation: concurrent `fit` calls must be
/// serialized by the caller, which `&mut self` already enforces.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    config: OlsConfig,
    fit: Option<OlsFit>,
}

impl OlsRegressor {
    /// Create an unfitted regressor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the model, replacing any previous fit on success.
    pub fn fit<X, Y>(&mut self, x: &X, y: &Y) -> Result<(), OlsError>
    where
        X: OlsFeatures + ?Sized,
        Y: OlsTargets + ?Sized,
    {
        let x = x.to_feature_matrix()?;
        let y = y.as_target_slice()?;
        Validator::validate_fit_inputs(&x, y)?;

        self.fit = Some(OlsExecutor::fit(&self.config, &x, y)?);
        Ok(())
    }

    /// Predict targets for new observations.
    pub fn predict<X>(&self, x: &X) -> Result<Vec<f64>, OlsError>
    where
        X: OlsFeatures + ?Sized,
    {
        let fit = self.fitted_or_err()?;
        let x = x.to_feature_matrix()?;
        Validator::validate_query(&x, fit.n_features)?;

        Ok(OlsExecutor::predict(fit, &x))
    }

    /// Coefficient of determination R² of the predictions for `x` against `y`.
    ///
    /// A constant `y` scores 1.0 when reproduced exactly and 0.0 otherwise.
    pub fn score<X, Y>(&self, x: &X, y: &Y) -> Result<f64, OlsError>
    where
        X: OlsFeatures + ?Sized,
        Y: OlsTargets + ?Sized,
    {
        let (y, y_pred) = self.predict_against(x, y)?;
        Ok(metrics::r_squared(y, &y_pred))
    }

    /// Full diagnostic summary of the predictions for `x` against `y`.
    pub fn diagnostics<X, Y>(&self, x: &X, y: &Y) -> Result<Diagnostics<f64>, OlsError>
    where
        X: OlsFeatures + ?Sized,
        Y: OlsTargets + ?Sized,
    {
        let n_params = self.fitted_or_err()?.n_params();
        let (y, y_pred) = self.predict_against(x, y)?;
        Ok(Diagnostics::compute(y, &y_pred, n_params))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current fit, if any.
    pub fn fitted(&self) -> Option<&OlsFit> {
        self.fit.as_ref()
    }

    /// Whether `fit` has succeeded at least once.
    pub fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }

    /// Fitted coefficient vector `w`.
    pub fn coefficients(&self) -> Result<&[f64], OlsError> {
        Ok(&self.fitted_or_err()?.coefficients)
    }

    /// Fitted intercept `b`.
    pub fn intercept(&self) -> Result<f64, OlsError> {
        Ok(self.fitted_or_err()?.intercept)
    }

    /// Whether this regressor fits an intercept.
    pub fn fits_intercept(&self) -> bool {
        self.config.fit_intercept
    }

    /// Configured solver.
    pub fn solver(&self) -> Solver {
        self.config.solver
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn fitted_or_err(&self) -> Result<&OlsFit, OlsError> {
        self.fit.as_ref().ok_or(OlsError::NotFitted)
    }

    fn predict_against<'y, X, Y>(&self, x: &X, y: &'y Y) -> Result<(&'y [f64], Vec<f64>), OlsError>
    where
        X: OlsFeatures + ?Sized,
        Y: OlsTargets + ?Sized,
    {
        let y_pred = self.predict(x)?;
        let y = y.as_target_slice()?;
        Validator::validate_lengths(y_pred.len(), y.len())?;
        Validator::validate_scoring_pair(y, &y_pred)?;
        Ok((y, y_pred))
    }
}

// ============================================================================
// Metric Functions
// ============================================================================

/// Coefficient of determination of `y_pred` against `y_true`.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64, OlsError> {
    Validator::validate_scoring_pair(y_true, y_pred)?;
    Ok(metrics::r_squared(y_true, y_pred))
}

/// Mean squared error of `y_pred` against `y_true`.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, OlsError> {
    Validator::validate_scoring_pair(y_true, y_pred)?;
    Ok(metrics::mean_squared_error(y_true, y_pred))
}

/// Mean absolute error of `y_pred` against `y_true`.
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, OlsError> {
    Validator::validate_scoring_pair(y_true, y_pred)?;
    Ok(metrics::mean_absolute_error(y_true, y_pred))
}
