//! Goodness-of-fit metrics over true and predicted targets.
//!
//! ## Purpose
//!
//! This module computes the residual sums and the scores derived from them:
//! RSS, MSE, MAE and the coefficient of determination R².
//!
//! ## Design notes
//!
//! * **Unchecked**: Callers validate lengths and finiteness first; these
//!   functions assume two non-empty slices of equal length.
//! * **Constant targets**: Detected by exact equality of all values, never by
//!   comparing SS_tot against a threshold.
//! * **Scaled R²**: R² sums are taken on `y` divided by a power of two near
//!   `max|y|`, so large-magnitude targets neither overflow nor lose precision.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RSS, MSE and MAE are non-negative.
//! * R² <= 1 (R² = 1 is a perfect fit).
//! * A constant target scores 1 when it is reproduced and 0 otherwise.
//! * Any other target scores `1 − SS_res / SS_tot`.

// External dependencies
use num_traits::Float;

/// Relative tolerance within which predictions reproduce a constant target.
pub const CONSTANT_TARGET_TOLERANCE: f64 = 1e-12;

/// Residual sum of squares: `Σ (y_i − ŷ_i)²`.
pub fn residual_sum_of_squares<T: Float>(y_true: &[T], y_pred: &[T]) -> T {
    y_true
        .iter()
        .zip(y_pred.iter())
        .fold(T::zero(), |acc, (&yi, &yp)| {
            let r = yi - yp;
            acc + r * r
        })
}

/// Total sum of squares: `Σ (y_i − ȳ)²`.
pub fn total_sum_of_squares<T: Float>(y_true: &[T]) -> T {
    let n = T::from(y_true.len()).unwrap_or(T::one());
    let mean = y_true.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    y_true.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    })
}

/// Mean squared error: `RSS / n`.
pub fn mean_squared_error<T: Float>(y_true: &[T], y_pred: &[T]) -> T {
    let n = T::from(y_true.len()).unwrap_or(T::one());
    residual_sum_of_squares(y_true, y_pred) / n
}

/// Mean absolute error: `(1/n) Σ |y_i − ŷ_i|`.
pub fn mean_absolute_error<T: Float>(y_true: &[T], y_pred: &[T]) -> T {
    let n = T::from(y_true.len()).unwrap_or(T::one());
    let sum = y_true
        .iter()
        .zip(y_pred.iter())
        .fold(T::zero(), |acc, (&yi, &yp)| acc + (yi - yp).abs());
    sum / n
}

/// Whether every value equals the first one.
pub fn is_constant<T: Float>(y: &[T]) -> bool {
    y.first().map_or(true, |&y0| y.iter().all(|&v| v == y0))
}

/// Coefficient of determination: `1 − SS_res / SS_tot`.
///
/// A constant `y_true` has no variance to explain and scores 1 when every
/// prediction matches it to `CONSTANT_TARGET_TOLERANCE`, 0 otherwise.
pub fn r_squared<T: Float>(y_true: &[T], y_pred: &[T]) -> T {
    if is_constant(y_true) {
        return constant_target_score(y_true, y_pred);
    }

    // Scale by the power of two at or below max |y|: exact, and the sums cannot overflow.
    let max_abs = y_true.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
    let scale = max_abs.log2().floor().exp2();
    let y_scaled: Vec<T> = y_true.iter().map(|&v| v / scale).collect();
    let pred_scaled: Vec<T> = y_pred.iter().map(|&v| v / scale).collect();

    let ss_res = residual_sum_of_squares(&y_scaled, &pred_scaled);
    let ss_tot = total_sum_of_squares(&y_scaled);
    T::one() - ss_res / ss_tot
}

fn constant_target_score<T: Float>(y_true: &[T], y_pred: &[T]) -> T {
    let y0 = y_true.first().copied().unwrap_or(T::zero());
    let tol = T::from(CONSTANT_TARGET_TOLERANCE).unwrap_or(T::epsilon()) * y0.abs();

    if y_pred.iter().all(|&yp| (yp - y0).abs() <= tol) {
        T::one()
    } else {
        T::zero()
    }
}
