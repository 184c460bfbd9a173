//! Diagnostic metrics for OLS fit quality assessment.
//!
//! ## Purpose
//!
//! This module bundles the usual summary of a linear fit: error metrics,
//! R², adjusted R² and the residual standard error.
//!
//! ## Design notes
//!
//! * **Residual-based**: Everything is derived from `y` and `ŷ`.
//! * **Degrees of freedom**: Adjusted R² and the residual standard error use
//!   `n − k`, where `k` counts the fitted parameters (intercept included).
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Error metrics (RSS, RMSE, MAE) are non-negative.
//! * R² <= 1.
//! * Adjusted R² and residual SE are `None` unless `n > k`.
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or formal hypothesis tests.
//! * This module does not compute coefficient standard errors.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::metrics::{
    mean_absolute_error, r_squared, residual_sum_of_squares,
};

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing an OLS fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of observations scored.
    pub n_samples: usize,

    /// Number of fitted parameters (coefficients plus intercept).
    pub n_params: usize,

    /// Residual sum of squares (RSS).
    pub rss: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// R² adjusted for the number of parameters.
    pub adjusted_r_squared: Option<T>,

    /// Residual standard error, `sqrt(RSS / (n − k))`.
    pub residual_se: Option<T>,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from true and predicted targets.
    ///
    /// `y` and `y_pred` must be non-empty and of equal length.
    pub fn compute(y: &[T], y_pred: &[T], n_params: usize) -> Self {
        let n = y.len();
        let n_t = T::from(n).unwrap_or(T::one());

        let rss = residual_sum_of_squares(y, y_pred);
        let r_squared = r_squared(y, y_pred);

        let (adjusted_r_squared, residual_se) = if n > n_params {
            let df_resid = T::from(n - n_params).unwrap_or(T::one());
            let df_total = T::from(n.saturating_sub(1)).unwrap_or(T::one());
            (
                Some(T::one() - (T::one() - r_squared) * df_total / df_resid),
                Some((rss / df_resid).sqrt()),
            )
        } else {
            (None, None)
        };

        Self {
            n_samples: n,
            n_params,
            rss,
            rmse: (rss / n_t).sqrt(),
            mae: mean_absolute_error(y, y_pred),
            r_squared,
            adjusted_r_squared,
            residual_se,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "OLS Diagnostics:")?;
        writeln!(f, "  Samples:      {}", self.n_samples)?;
        writeln!(f, "  Parameters:   {}", self.n_params)?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;

        if let Some(adj) = self.adjusted_r_squared {
            writeln!(f, "  Adj. R²:      {:.6}", adj)?;
        }
        if let Some(se) = self.residual_se {
            writeln!(f, "  Residual SE:  {:.6}", se)?;
        }

        Ok(())
    }
}
