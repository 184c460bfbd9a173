//! Input validation for OLS data and configuration.
//!
//! ## Purpose
//!
//! This module checks the shape and numeric validity of everything handed to
//! `fit`, `predict` and `score` before any linear algebra runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Shape checks run before the full finite-value scan.
//! * **Generics**: Slice checks are generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs are non-empty, rectangular and finite.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not detect rank deficiency (the solver does).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::primitives::input::FeatureMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for OLS input data and configuration.
///
/// All methods return `Result<(), OlsError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a training set for `fit`.
    pub fn validate_fit_inputs(x: &FeatureMatrix, y: &[f64]) -> Result<(), OlsError> {
        // Check 1: Non-empty
        if x.rows() == 0 || y.is_empty() {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Matching lengths
        Self::validate_lengths(x.rows(), y.len())?;

        // Check 3: At least one feature
        if x.cols() == 0 {
            return Err(OlsError::NoFeatures);
        }

        // Check 4: All values finite
        Self::validate_features(x)?;
        Self::validate_targets(y, "y")
    }

    /// Validate a query matrix against the feature count seen at fit time.
    pub fn validate_query(x: &FeatureMatrix, n_features: usize) -> Result<(), OlsError> {
        if x.rows() == 0 {
            return Ok(());
        }
        if x.cols() != n_features {
            return Err(OlsError::FeatureMismatch {
                expected: n_features,
                got: x.cols(),
            });
        }
        Self::validate_features(x)
    }

    /// Validate a pair of true and predicted targets for scoring.
    pub fn validate_scoring_pair<T: Float>(y_true: &[T], y_pred: &[T]) -> Result<(), OlsError> {
        if y_true.is_empty() || y_pred.is_empty() {
            return Err(OlsError::EmptyInput);
        }
        Self::validate_lengths(y_true.len(), y_pred.len())?;
        Self::validate_targets(y_true, "y_true")?;
        Self::validate_targets(y_pred, "y_pred")
    }

    /// Validate that the number of observations matches the number of targets.
    pub fn validate_lengths(x_rows: usize, y_len: usize) -> Result<(), OlsError> {
        if x_rows != y_len {
            return Err(OlsError::DimensionMismatch { x_rows, y_len });
        }
        Ok(())
    }

    // ========================================================================
    // Finite Checks
    // ========================================================================

    /// Validate that every feature value is finite.
    pub fn validate_features(x: &FeatureMatrix) -> Result<(), OlsError> {
        for (i, row) in x.iter_rows().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(OlsError::InvalidNumericValue(format!(
                    "x[{}][{}]={}",
                    i, j, row[j]
                )));
            }
        }
        Ok(())
    }

    /// Validate that every target value is finite.
    pub fn validate_targets<T: Float>(y: &[T], name: &str) -> Result<(), OlsError> {
        if let Some(i) = y.iter().position(|v| !v.is_finite()) {
            return Err(OlsError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                y[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), OlsError> {
        if let Some(param) = duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
