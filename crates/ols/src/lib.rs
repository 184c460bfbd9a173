//! # OLS - Ordinary Least Squares linear regression for Rust
//!
//! Fits a linear model `ŷ = x · w + b` by minimizing the residual sum of
//! squares, predicts targets for new observations, and scores predictions
//! with the coefficient of determination (R²).
//!
//! ## Quick Start
//!
//! ```rust
//! use ols::prelude::*;
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![2.0, 4.0, 6.0];
//!
//! // Build the model
//! let mut model = Ols::new()
//!     .fit_intercept(true)   // Model an intercept term (default)
//!     .solver(Svd)           // Solve through SVD (default)
//!     .build()?;
//!
//! // Fit the model to the data
//! model.fit(&x, &y)?;
//!
//! let pred = model.predict(&vec![vec![4.0]])?;
//! assert!((pred[0] - 8.0).abs() < 1e-9);
//!
//! let r2 = model.score(&x, &y)?;
//! assert!((r2 - 1.0).abs() < 1e-12);
//!
//! println!("{}", model.fitted().unwrap());
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Samples:   3
//!   Features:  1
//!   Rank:      2
//!   Solver:    svd
//!
//! Coefficients:
//!         Term       Estimate
//! ---------------------------
//!    intercept       0.000000
//!           x0       2.000000
//! ```
//!
//! ## Solving
//!
//! The design matrix is the feature matrix with a leading column of ones
//! (when an intercept is fitted). The least-squares problem is solved by a
//! QR decomposition or an SVD of the design, never by inverting `XᵀX`.
//! Rank-deficient designs (duplicate or constant columns, or fewer
//! observations than parameters) are rejected with
//! [`OlsError::SingularMatrix`](prelude::OlsError::SingularMatrix).
//!
//! ## Result and Error Handling
//!
//! Every operation returns `Result<_, OlsError>`:
//!
//! ```rust
//! use ols::prelude::*;
//!
//! let model = OlsRegressor::new();
//!
//! match model.predict(&vec![vec![1.0]]) {
//!     Ok(pred) => println!("Predicted: {:?}", pred),
//!     Err(e) => eprintln!("Prediction failed: {}", e), // Model is not fitted
//! }
//! ```
//!
//! ## Inputs
//!
//! Features are accepted as nested vectors, arrays of rows, `ndarray`
//! 2-D arrays or `nalgebra` matrices; targets as slices, vectors,
//! contiguous `ndarray` 1-D arrays or `nalgebra` vectors.
//!
//! ```rust
//! use ndarray::{array, Array1};
//! use ols::prelude::*;
//!
//! let x = array![[1.0, 0.0], [2.0, 1.0], [3.0, 0.0], [4.0, 1.0]];
//! let y: Array1<f64> = x.rows().into_iter().map(|r| 1.0 + 2.0 * r[0] - r[1]).collect();
//!
//! let mut model = OlsRegressor::new();
//! model.fit(&x, &y)?;
//!
//! let w = model.coefficients()?;
//! assert!((w[0] - 2.0).abs() < 1e-9 && (w[1] + 1.0).abs() < 1e-9);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade (`debug` for fit/predict shapes,
//! `trace` for fitted parameters, `warn` for rank-deficient designs). No
//! logger is installed by the library.

// Layer 1: Primitives - errors and input abstractions.
mod primitives;

// Layer 2: Math - least-squares solvers.
mod math;

// Layer 3: Evaluation - metrics and diagnostics.
mod evaluation;

// Layer 4: Engine - validation and execution.
mod engine;

// High-level fluent API for OLS regression.
mod api;

// Standard OLS prelude.
pub mod prelude {
    pub use crate::api::{
        mean_absolute_error, mean_squared_error, r2_score, Diagnostics, FeatureMatrix,
        OlsBuilder as Ols, OlsError, OlsFit, OlsRegressor,
        Solver::{Qr, Svd},
    };
    pub use crate::primitives::input::{OlsFeatures, OlsTargets};
}

pub use api::{OlsBuilder, OlsError, OlsFit, OlsRegressor, Solver};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
