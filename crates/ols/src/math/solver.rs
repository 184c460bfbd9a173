//! Least-squares solvers for the design matrix.
//!
//! ## Purpose
//!
//! This module solves `min ‖y − Aθ‖²` for a dense design matrix `A`
//! (n × k), which is the same problem as the normal equations
//! `AᵀAθ = Aᵀy`, without ever forming or inverting `AᵀA`.
//!
//! ## Design notes
//!
//! * **QR**: `A = QR`, then `Rθ = Qᵀy` by back substitution.
//! * **SVD**: `A = UΣVᵀ`, then `θ = VΣ⁺Uᵀy`.
//! * **Rank check**: Both solvers take the numerical rank from the singular
//!   values of the design, counting those above `ε · max(n, k) · s_max`
//!   (`ε` = `f64::EPSILON`, `s_max` the largest singular value), and refuse
//!   rank-deficient designs. QR and SVD therefore always agree on the verdict.
//! * **Equilibration**: Columns are divided by a power of two near their
//!   largest magnitude before factorizing, so a large-offset feature
//!   (timestamps, prices) next to the intercept column is solved accurately.
//!
//! ## Invariants
//!
//! * A returned solution always has length `k`.
//! * A returned solution is the unique least-squares minimizer.
//!
//! ## Non-goals
//!
//! * This module does not return least-norm solutions for singular systems.
//! * This module does not regularize.

// External dependencies
use nalgebra::{DMatrix, DVector};

// Internal dependencies
use crate::primitives::errors::OlsError;

// ============================================================================
// Solver Selection
// ============================================================================

/// Matrix factorization used to solve the least-squares problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    /// Householder QR decomposition.
    ///
    /// Cheaper than SVD; accurate for well-conditioned designs.
    Qr,

    /// Singular value decomposition - default.
    ///
    /// Slower, but gives the most reliable rank estimate.
    #[default]
    Svd,
}

impl Solver {
    /// Short lowercase name, used in summaries and log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Svd => "svd",
        }
    }
}

// ============================================================================
// Solution
// ============================================================================

/// Least-squares solution together with the numerical rank of the design.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares {
    /// Parameter vector θ (length k).
    pub theta: DVector<f64>,

    /// Numerical rank of the design matrix.
    pub rank: usize,
}

impl LeastSquares {
    /// Solve `min ‖y − Aθ‖²` with the selected factorization.
    pub fn solve(
        design: &DMatrix<f64>,
        y: &DVector<f64>,
        solver: Solver,
    ) -> Result<Self, OlsError> {
        if design.nrows() != y.len() {
            return Err(OlsError::DimensionMismatch {
                x_rows: design.nrows(),
                y_len: y.len(),
            });
        }
        if design.ncols() == 0 {
            return Err(OlsError::NoFeatures);
        }

        let scales = Self::column_scales(design);
        let scaled = DMatrix::from_fn(design.nrows(), design.ncols(), |i, j| {
            design[(i, j)] / scales[j]
        });

        let solution = match solver {
            Solver::Qr => Self::solve_qr(&scaled, y)?,
            Solver::Svd => Self::solve_svd(&scaled, y)?,
        };

        Ok(Self {
            theta: DVector::from_fn(scales.len(), |j, _| solution.theta[j] / scales[j]),
            rank: solution.rank,
        })
    }

    /// Largest power of two not above each column's max |a_ij| (1 for zero columns).
    ///
    /// Dividing by a power of two is exact, so the scaled design has the same
    /// rank and the same least-squares solution up to the rescaling of θ.
    pub fn column_scales(design: &DMatrix<f64>) -> Vec<f64> {
        design
            .column_iter()
            .map(|col| {
                let amax = col.amax();
                if amax > 0.0 {
                    amax.log2().floor().exp2()
                } else {
                    1.0
                }
            })
            .collect()
    }

    /// Absolute rank tolerance: `ε · max(n, k) · s_max`.
    #[inline]
    pub fn rank_tolerance(rows: usize, cols: usize, s_max: f64) -> f64 {
        f64::EPSILON * rows.max(cols) as f64 * s_max
    }

    /// Numerical rank given the singular values of an `rows × cols` design.
    pub fn numerical_rank(singular_values: &DVector<f64>, rows: usize, cols: usize) -> usize {
        let tol = Self::rank_tolerance(rows, cols, singular_values.max());
        singular_values.iter().filter(|&&s| s > tol).count()
    }

    fn solve_qr(design: &DMatrix<f64>, y: &DVector<f64>) -> Result<Self, OlsError> {
        let (n, k) = design.shape();
        let rank = Self::numerical_rank(&design.singular_values(), n, k);
        if rank < k {
            return Err(OlsError::SingularMatrix { rank, columns: k });
        }

        // Full column rank implies n >= k, so R is k × k.
        let qr = design.clone().qr();
        let qty = qr.q().tr_mul(y);
        let theta = qr
            .r()
            .solve_upper_triangular(&qty)
            .ok_or(OlsError::SingularMatrix { rank, columns: k })?;

        Ok(Self { theta, rank })
    }

    fn solve_svd(design: &DMatrix<f64>, y: &DVector<f64>) -> Result<Self, OlsError> {
        let (n, k) = design.shape();
        let svd = design.clone().svd(true, true);

        let rank = Self::numerical_rank(&svd.singular_values, n, k);
        if rank < k {
            return Err(OlsError::SingularMatrix { rank, columns: k });
        }

        // Only fails when U or V were not computed.
        let tol = Self::rank_tolerance(n, k, svd.singular_values.max());
        let theta = svd
            .solve(y, tol)
            .map_err(|_| OlsError::SingularMatrix { rank, columns: k })?;

        Ok(Self { theta, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_design() -> (DMatrix<f64>, DVector<f64>) {
        // y = 2 + 3x on x = [0, 1, 2, 3]
        let a = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0, 11.0]);
        (a, y)
    }

    #[test]
    fn qr_solves_exact_line() {
        let (a, y) = line_design();
        let sol = LeastSquares::solve(&a, &y, Solver::Qr).unwrap();
        assert!((sol.theta[0] - 2.0).abs() < 1e-10);
        assert!((sol.theta[1] - 3.0).abs() < 1e-10);
        assert_eq!(sol.rank, 2);
    }

    #[test]
    fn svd_solves_exact_line() {
        let (a, y) = line_design();
        let sol = LeastSquares::solve(&a, &y, Solver::Svd).unwrap();
        assert!((sol.theta[0] - 2.0).abs() < 1e-10);
        assert!((sol.theta[1] - 3.0).abs() < 1e-10);
        assert_eq!(sol.rank, 2);
    }

    #[test]
    fn duplicate_column_is_singular() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        for solver in [Solver::Qr, Solver::Svd] {
            assert!(matches!(
                LeastSquares::solve(&a, &y, solver),
                Err(OlsError::SingularMatrix { rank: 1, columns: 2 })
            ));
        }
    }

    #[test]
    fn wide_design_is_singular() {
        let a = DMatrix::from_row_slice(1, 2, &[1.0, 4.0]);
        let y = DVector::from_row_slice(&[3.0]);
        for solver in [Solver::Qr, Solver::Svd] {
            assert!(matches!(
                LeastSquares::solve(&a, &y, solver),
                Err(OlsError::SingularMatrix { columns: 2, .. })
            ));
        }
    }

    #[test]
    fn offset_feature_is_full_rank() {
        // x = 1e6 + i: nearly parallel to the ones column, but well-posed.
        let n = 10;
        let a = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { 1e6 + i as f64 });
        let y = DVector::from_fn(n, |i, _| 3.0 + 2.0 * i as f64);

        let qr = LeastSquares::solve(&a, &y, Solver::Qr).unwrap();
        let svd = LeastSquares::solve(&a, &y, Solver::Svd).unwrap();
        assert_eq!((qr.rank, svd.rank), (2, 2));
        assert!((qr.theta[1] - 2.0).abs() < 1e-6);
        assert!((svd.theta[1] - 2.0).abs() < 1e-6);
        assert!((qr.theta[0] - svd.theta[0]).abs() < 1e-6 * qr.theta[0].abs());
    }
}
