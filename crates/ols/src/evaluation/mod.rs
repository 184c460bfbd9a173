//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer scores predictions against ground truth:
//! - Residual metrics and the coefficient of determination
//! - A diagnostic summary for a fitted model
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// RSS, MSE, MAE and R².
pub mod metrics;

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;
