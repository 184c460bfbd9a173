//! OLS Regression Examples
//!
//! This example demonstrates typical OLS usage:
//! - Fitting a line with the default configuration
//! - Multivariate fitting with an explicit solver
//! - Scoring held-out data and printing diagnostics
//! - Handling a rank-deficient design
//!
//! Run with `RUST_LOG=debug` to see the library's log records.

use env_logger::{Builder, Env};
use ols::prelude::*;

fn main() -> Result<(), OlsError> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("{}", "=".repeat(80));
    println!("OLS Regression - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_simple_line()?;
    example_2_multivariate()?;
    example_3_singular_design()?;

    Ok(())
}

/// Example 1: Simple Line
/// Fits y ≈ 2x on slightly noisy data with the defaults.
fn example_1_simple_line() -> Result<(), OlsError> {
    println!("Example 1: Simple Line");
    println!("{}", "-".repeat(80));

    let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]];
    let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];

    let mut model = OlsRegressor::new();
    model.fit(&x, &y)?;

    if let Some(fit) = model.fitted() {
        println!("{}", fit);
    }

    let pred = model.predict(&[[6.0], [7.0]])?;
    println!("Predictions at x = 6, 7: {:?}", pred);
    println!("R² on training data: {:.6}", model.score(&x, &y)?);
    println!();

    Ok(())
}

/// Example 2: Multivariate Fit
/// Fits two features with QR and reports diagnostics on held-out rows.
fn example_2_multivariate() -> Result<(), OlsError> {
    println!("Example 2: Multivariate Fit");
    println!("{}", "-".repeat(80));

    // y = 1 + 2a - 0.5b plus a small perturbation
    let x = vec![
        vec![0.0, 1.0],
        vec![1.0, 3.0],
        vec![2.0, 2.0],
        vec![3.0, 5.0],
        vec![4.0, 4.0],
        vec![5.0, 7.0],
    ];
    let y = vec![0.55, 1.45, 4.02, 4.48, 7.01, 7.52];

    let mut model = Ols::new().fit_intercept(true).solver(Qr).build()?;
    model.fit(&x, &y)?;

    println!("Intercept:    {:.6}", model.intercept()?);
    println!("Coefficients: {:?}", model.coefficients()?);

    let x_test = vec![vec![6.0, 6.0], vec![7.0, 9.0]];
    let y_test = vec![10.0, 10.5];
    println!("Held-out R²:  {:.6}", model.score(&x_test, &y_test)?);
    println!();

    println!("{}", model.diagnostics(&x, &y)?);

    let pred = model.predict(&x_test)?;
    println!("MSE (held-out): {:.6}", mean_squared_error(&y_test, &pred)?);
    println!("MAE (held-out): {:.6}", mean_absolute_error(&y_test, &pred)?);
    println!();

    Ok(())
}

/// Example 3: Singular Design
/// A duplicated feature makes the design rank deficient.
fn example_3_singular_design() -> Result<(), OlsError> {
    println!("Example 3: Singular Design");
    println!("{}", "-".repeat(80));

    let x = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0], vec![4.0, 8.0]];
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let mut model = OlsRegressor::new();
    match model.fit(&x, &y) {
        Err(err @ OlsError::SingularMatrix { .. }) => println!("Fit rejected: {}", err),
        other => other?,
    }
    println!("Model fitted: {}", model.is_fitted());

    Ok(())
}
