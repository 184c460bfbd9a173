//! Input abstractions for OLS fitting and prediction.
//!
//! ## Purpose
//!
//! This module lets `fit`, `predict` and `score` accept several data formats
//! (nested vectors, arrays of rows, `ndarray`, `nalgebra`) through two traits,
//! and normalizes feature input into a single rectangular [`FeatureMatrix`].
//!
//! ## Design notes
//!
//! * **Owned features**: Feature input is copied into a row-major buffer; the
//!   solver needs its own design matrix anyway.
//! * **Borrowed targets**: Target input is exposed as a slice, without copying.
//! * **Shape checks only**: Finite-value checks belong to the validator.
//!
//! ## Invariants
//!
//! * `FeatureMatrix::data().len() == rows * cols`.
//! * A matrix with zero rows reports zero columns when built from rows.
//! * Non-contiguous 1-D `ndarray` targets are rejected.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not encode categorical data.

// External dependencies
use nalgebra::{DMatrix, DVector};
use ndarray::{ArrayBase, Data, Ix1, Ix2};

// Internal dependencies
use crate::primitives::errors::OlsError;

// ============================================================================
// Feature Matrix
// ============================================================================

/// Rectangular, row-major feature matrix (n observations × p features).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    /// Build a matrix from a row-major buffer.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, OlsError> {
        if data.len() != rows * cols {
            return Err(OlsError::InvalidInput(format!(
                "buffer of {} values does not match shape {}x{}",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a sequence of rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, OlsError> {
        let n = rows.len();
        let p = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(n * p);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != p {
                return Err(OlsError::RaggedRows {
                    row: i,
                    expected: p,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: n,
            cols: p,
        })
    }

    /// Number of observations.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of features.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The `i`-th observation.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over observations.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Build the design matrix, optionally prepending a column of ones.
    pub fn design(&self, fit_intercept: bool) -> DMatrix<f64> {
        let offset = usize::from(fit_intercept);
        DMatrix::from_fn(self.rows, self.cols + offset, |i, j| {
            if j < offset {
                1.0
            } else {
                self.data[i * self.cols + j - offset]
            }
        })
    }
}

// ============================================================================
// Feature Input
// ============================================================================

/// Types that can be used as the feature matrix `x`.
pub trait OlsFeatures {
    /// Convert the input into a rectangular feature matrix.
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError>;
}

impl<R: AsRef<[f64]>> OlsFeatures for [R] {
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        FeatureMatrix::from_rows(self)
    }
}

impl<R: AsRef<[f64]>> OlsFeatures for Vec<R> {
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        FeatureMatrix::from_rows(self.as_slice())
    }
}

impl<R: AsRef<[f64]>, const N: usize> OlsFeatures for [R; N] {
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        FeatureMatrix::from_rows(self.as_slice())
    }
}

impl<S> OlsFeatures for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        // Logical iteration order is row-major whatever the memory layout.
        let data: Vec<f64> = self.iter().copied().collect();
        FeatureMatrix::new(data, self.nrows(), self.ncols())
    }
}

impl OlsFeatures for DMatrix<f64> {
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        let (rows, cols) = self.shape();
        // Column-major storage of the transpose is the row-major storage of `self`.
        FeatureMatrix::new(self.transpose().as_slice().to_vec(), rows, cols)
    }
}

impl OlsFeatures for FeatureMatrix {
    fn to_feature_matrix(&self) -> Result<FeatureMatrix, OlsError> {
        Ok(self.clone())
    }
}

// ============================================================================
// Target Input
// ============================================================================

/// Types that can be used as the target vector `y`.
pub trait OlsTargets {
    /// Borrow the targets as a contiguous slice.
    fn as_target_slice(&self) -> Result<&[f64], OlsError>;
}

impl OlsTargets for [f64] {
    fn as_target_slice(&self) -> Result<&[f64], OlsError> {
        Ok(self)
    }
}

impl OlsTargets for Vec<f64> {
    fn as_target_slice(&self) -> Result<&[f64], OlsError> {
        Ok(self.as_slice())
    }
}

impl<const N: usize> OlsTargets for [f64; N] {
    fn as_target_slice(&self) -> Result<&[f64], OlsError> {
        Ok(self.as_slice())
    }
}

impl<S> OlsTargets for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn as_target_slice(&self) -> Result<&[f64], OlsError> {
        self.as_slice().ok_or_else(|| {
            OlsError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

impl OlsTargets for DVector<f64> {
    fn as_target_slice(&self) -> Result<&[f64], OlsError> {
        Ok(self.as_slice())
    }
}
