//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the dense linear algebra behind OLS: least-squares
//! solving through QR or SVD, with a shared numerical-rank test.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares solvers (QR/SVD).
pub mod solver;
