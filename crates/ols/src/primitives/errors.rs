//! Error types for OLS operations.
//!
//! ## Purpose
//!
//! This module defines every error condition raised by fitting, prediction
//! and scoring: shape problems, non-finite input, rank-deficient designs,
//! use before fitting, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending sizes or cell (e.g. `x[2][0]`).
//! * **Deferred**: Builder misuse is recorded during configuration and raised by `build()`.
//! * **Comparable**: `Clone + PartialEq` so callers and tests can match on values.
//!
//! ## Key concepts
//!
//! 1. **Dimension errors**: `EmptyInput`, `NoFeatures`, `DimensionMismatch`,
//!    `FeatureMismatch`, `RaggedRows`.
//! 2. **State errors**: `NotFitted`.
//! 3. **Numerical errors**: `SingularMatrix`, `InvalidNumericValue`.
//! 4. **Configuration errors**: `DuplicateParameter`.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for OLS operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OlsError {
    /// Input contains no observations.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// The feature matrix has zero columns.
    #[error("Feature matrix has no columns; at least 1 feature is required")]
    NoFeatures,

    /// Row count of `x` differs from the length of `y`.
    #[error("Length mismatch: x has {x_rows} rows, y has {y_len} values")]
    DimensionMismatch {
        /// Number of rows in the feature matrix.
        x_rows: usize,
        /// Number of target values.
        y_len: usize,
    },

    /// Column count differs from the feature count seen at fit time.
    #[error("Feature mismatch: model was fitted on {expected} features, got {got}")]
    FeatureMismatch {
        /// Feature count of the fitted model.
        expected: usize,
        /// Feature count of the query matrix.
        got: usize,
    },

    /// A row of the feature matrix has a different length than the first row.
    #[error("Ragged feature matrix: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// `predict`, `score` or an accessor was called before a successful `fit`.
    #[error("Model is not fitted; call fit first")]
    NotFitted,

    /// The design matrix is rank deficient, so the least-squares solution is not unique.
    #[error("Singular design matrix: numerical rank {rank} is below {columns} columns")]
    SingularMatrix {
        /// Numerical rank of the design matrix.
        rank: usize,
        /// Number of columns of the design matrix (features plus intercept).
        columns: usize,
    },

    /// Input data contains NaN or infinite values.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Generic invalid input error with a descriptive message.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}
