#![cfg(feature = "dev")]
//! Tests for the input abstractions.
//!
//! These tests verify how OLS accepts feature matrices and target vectors:
//! - Row sequences, ndarray arrays and nalgebra matrices as features
//! - Slices, ndarray arrays and nalgebra vectors as targets
//! - Rejection of ragged and mis-sized input
//! - Design matrix assembly with and without an intercept column

use nalgebra::{DMatrix, DVector};
use ndarray::{array, s, Array1};

use ols::internals::primitives::errors::OlsError;
use ols::internals::primitives::input::{FeatureMatrix, OlsFeatures, OlsTargets};

// ============================================================================
// Feature Matrix Construction
// ============================================================================

/// Test construction from rows.
#[test]
fn test_from_rows() {
    let x = FeatureMatrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();

    assert_eq!(x.rows(), 3);
    assert_eq!(x.cols(), 2);
    assert_eq!(x.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(x.row(1), &[3.0, 4.0]);
    assert_eq!(x.iter_rows().count(), 3);
}

/// Test ragged rows are rejected with the offending row index.
#[test]
fn test_ragged_rows() {
    let rows = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0]];
    assert_eq!(
        FeatureMatrix::from_rows(&rows),
        Err(OlsError::RaggedRows {
            row: 2,
            expected: 2,
            got: 1
        })
    );
}

/// Test a buffer that does not match the requested shape.
#[test]
fn test_new_shape_mismatch() {
    assert!(FeatureMatrix::new(vec![1.0, 2.0, 3.0], 2, 2).is_err());
    assert!(FeatureMatrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).is_ok());
}

// ============================================================================
// Design Matrix
// ============================================================================

/// Test the design matrix gets a leading column of ones.
#[test]
fn test_design_with_intercept() {
    let x = FeatureMatrix::from_rows(&[[2.0_f64, 3.0], [4.0, 5.0]]).unwrap();
    let a = x.design(true);

    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a, DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 1.0, 4.0, 5.0]));
}

/// Test the design matrix is the features alone without an intercept.
#[test]
fn test_design_without_intercept() {
    let x = FeatureMatrix::from_rows(&[[2.0_f64, 3.0], [4.0, 5.0]]).unwrap();
    assert_eq!(
        x.design(false),
        DMatrix::from_row_slice(2, 2, &[2.0, 3.0, 4.0, 5.0])
    );
}

// ============================================================================
// Feature Conversions
// ============================================================================

/// Test ndarray features keep logical row order.
///
/// Verifies a transposed (column-major) view converts row by row.
#[test]
fn test_ndarray_features() {
    let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let x = a.to_feature_matrix().unwrap();
    assert_eq!((x.rows(), x.cols()), (2, 3));
    assert_eq!(x.row(1), &[4.0, 5.0, 6.0]);

    let t = a.t().to_feature_matrix().unwrap();
    assert_eq!((t.rows(), t.cols()), (3, 2));
    assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

/// Test nalgebra features convert from column-major storage.
#[test]
fn test_nalgebra_features() {
    let m: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let x = m.to_feature_matrix().unwrap();
    assert_eq!(x.data(), &[1.0, 2.0, 3.0, 4.0]);
}

// ============================================================================
// Target Conversions
// ============================================================================

/// Test the accepted target containers.
#[test]
fn test_target_conversions() {
    let v = vec![1.0_f64, 2.0, 3.0];
    assert_eq!(v.as_target_slice().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!([1.0_f64, 2.0].as_target_slice().unwrap(), &[1.0, 2.0]);

    let a: Array1<f64> = array![4.0, 5.0];
    assert_eq!(a.as_target_slice().unwrap(), &[4.0, 5.0]);

    let d: DVector<f64> = DVector::from_row_slice(&[6.0, 7.0]);
    assert_eq!(d.as_target_slice().unwrap(), &[6.0, 7.0]);
}

/// Test strided ndarray targets are rejected.
#[test]
fn test_non_contiguous_targets() {
    let a: Array1<f64> = array![1.0, 2.0, 3.0, 4.0];
    let strided = a.slice(s![..;2]);
    assert!(matches!(
        strided.as_target_slice(),
        Err(OlsError::InvalidInput(_))
    ));
}
